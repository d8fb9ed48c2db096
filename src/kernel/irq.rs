/*!
irq.rs - IRQ cause codes and dispatch.

The machine signals the kernel with a small fixed set of cause codes on
entry; two codes are reserved and carry no handler of their own, but are
still tallied in the per-cause metrics table.
*/

use crate::constants::{ADDR_ERR, D_TIMER_INTERRUPT_SIGNAL, D_TIMER_INTERVAL};
use crate::kernel::Kernel;
use crate::process::ProcessState;

/// Why the CPU trapped into the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqCause {
    /// Machine reset / boot.
    Reset,
    /// The CPU simulator faulted executing user code.
    CpuError,
    /// A process issued a syscall (`trap` instruction).
    Syscall,
    /// The timer peripheral's interval elapsed.
    Timer,
    /// Reserved cause code, currently unused by any collaborator.
    Reserved4,
    /// Reserved cause code, currently unused by any collaborator.
    Reserved5,
}

impl IrqCause {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => IrqCause::Reset,
            1 => IrqCause::CpuError,
            2 => IrqCause::Syscall,
            3 => IrqCause::Timer,
            4 => IrqCause::Reserved4,
            _ => IrqCause::Reserved5,
        }
    }

    /// Index into `KernelMetrics::per_irq_counts`.
    pub fn index(self) -> usize {
        match self {
            IrqCause::Reset => 0,
            IrqCause::CpuError => 1,
            IrqCause::Syscall => 2,
            IrqCause::Timer => 3,
            IrqCause::Reserved4 => 4,
            IrqCause::Reserved5 => 5,
        }
    }
}

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: crate::contracts::Memory,
    I: crate::contracts::IoBus,
    L: crate::contracts::ProgramLoader<M>,
    C: crate::contracts::Console,
{
    /// Dispatches on `cause`, after the per-cause counter has already been
    /// bumped by `handle_irq`. Reset boots the first process; CpuError and
    /// Syscall run their handlers against the (already-saved) current
    /// descriptor; Timer rearms the timer peripheral (clears the pending
    /// interrupt signal and reloads the interval) and decrements the current
    /// process's quantum; the reserved causes are no-ops.
    pub(crate) fn dispatch_irq(&mut self, cause: IrqCause) {
        match cause {
            IrqCause::Reset => self.boot(),
            IrqCause::CpuError => self.handle_cpu_error(),
            IrqCause::Syscall => self.handle_syscall(),
            IrqCause::Timer => {
                let _ = self.io.write(D_TIMER_INTERRUPT_SIGNAL, 0);
                let _ = self.io.write(D_TIMER_INTERVAL, self.config.interval as i64);
                if self.current.is_some() {
                    self.quantum_remaining = (self.quantum_remaining - 1).max(0);
                }
            }
            IrqCause::Reserved4 | IrqCause::Reserved5 => {}
        }
    }

    /// CPU-error handler: the source sets the faulted process's
    /// state to a block reason rather than TERMINATED, a leftover
    /// enum-conflation bug this crate does not replicate — a CPU fault
    /// always terminates the process, it is never a recoverable block. The
    /// source's immediate wake of any WAIT_PID waiters is preserved: a
    /// waiter should not have to wait for the next device-sweep tick to
    /// learn its awaited process is gone.
    pub(crate) fn handle_cpu_error(&mut self) {
        let Some(pid) = self.current else { return };
        let code = self.memory.read(ADDR_ERR).unwrap_or(-1);
        log::warn!("pid {pid}: cpu fault, error code {code}");

        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.transition(ProcessState::Terminated);
        }
        self.current = None;
        self.internal_error = true;
        self.wake_waiters_for(pid);
    }
}
