/*!
dispatch.rs - Trap-frame write-back and the shutdown decision.

Runs last on every trap, after the scheduler has settled on (at most) one
running descriptor. Three outcomes: an internal error was flagged somewhere
this trap, every process has reached TERMINATED, or there is a descriptor to
resume — in which case its saved PC/A/X are written back into the trap frame
for the CPU to pick up.
*/

use crate::constants::{ADDR_A, ADDR_PC, ADDR_X};
use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::kernel::Kernel;

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    /// Returns `true` to keep running, `false` once the kernel has shut
    /// down (having already emitted the metrics report).
    pub(crate) fn dispatch_or_shutdown(&mut self) -> bool {
        if self.internal_error || !self.table.any_non_terminated() {
            self.shutdown();
            return false;
        }

        if let Some(pid) = self.current {
            if let Some(descriptor) = self.table.find_by_pid(pid) {
                let pc = descriptor.pc;
                let [a, x] = descriptor.reg;
                let _ = self.memory.write(ADDR_PC, pc);
                let _ = self.memory.write(ADDR_A, a);
                let _ = self.memory.write(ADDR_X, x);
            }
        }
        true
    }
}
