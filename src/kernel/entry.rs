/*!
entry.rs - Interrupt entry: saving the interrupted process's registers and
advancing the clock-based metrics, both performed before IRQ dispatch on
every trap.
*/

use crate::constants::{ADDR_A, ADDR_PC, ADDR_X, D_INSTRUCTION_CLOCK};
use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::kernel::metrics::clamp_elapsed;
use crate::kernel::Kernel;

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    /// Copies the trap frame's PC/A/X words into the current descriptor, if
    /// a process was running. A no-op on RESET, where there is no current
    /// process yet.
    pub(crate) fn save_user_state(&mut self) {
        let Some(pid) = self.current else { return };
        let pc = self.memory.read(ADDR_PC).unwrap_or(0);
        let a = self.memory.read(ADDR_A).unwrap_or(0);
        let x = self.memory.read(ADDR_X).unwrap_or(0);
        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.pc = pc;
            descriptor.reg = [a, x];
        }
    }

    /// Reads the free-running instruction clock, derives the elapsed tick
    /// count since the last trap, and folds it into both the kernel-wide
    /// and the current process's metrics. Runs before any state
    /// transition this trap may cause, so the elapsed interval is always
    /// attributed to the state the process held *during* it.
    pub(crate) fn update_clock(&mut self) {
        let reading = self.io.read(D_INSTRUCTION_CLOCK).unwrap_or(self.last_clock);
        let elapsed = clamp_elapsed(self.last_clock, reading);
        self.last_clock = reading;
        self.metrics.total_ticks += elapsed;

        match self.current {
            None => self.metrics.idle_ticks += elapsed,
            Some(pid) => {
                if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
                    let state = descriptor.state;
                    descriptor
                        .metrics
                        .record_elapsed(state, elapsed, descriptor.is_terminated());
                }
            }
        }
    }
}
