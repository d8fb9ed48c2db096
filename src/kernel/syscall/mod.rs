/*!
syscall - The five syscalls a process can trap into: READ, WRITE,
SPAWN, KILL, WAIT.

All five read their number and argument from the *descriptor's* saved A/X
registers — `entry::save_user_state` has already copied them out of the
trap frame by the time `handle_syscall` runs — and
write their result back the same way, for `dispatch::dispatch_or_shutdown`
to place into the trap frame (or not, if the caller just blocked).
*/

mod kill;
mod read;
mod spawn;
mod wait;
mod write;

use crate::constants::syscall as code;
use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::kernel::Kernel;

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    /// Dispatches the current process's pending syscall. A no-op if
    /// there is no current process, which should not happen on a genuine
    /// SYSCALL trap but is handled defensively rather than panicking.
    pub(crate) fn handle_syscall(&mut self) {
        let Some(pid) = self.current else { return };
        let Some(descriptor) = self.table.find_by_pid(pid) else {
            return;
        };
        let number = descriptor.reg[0];
        let argument = descriptor.reg[1];

        match number {
            code::READ => self.syscall_read(pid),
            code::WRITE => self.syscall_write(pid, argument),
            code::SPAWN => self.syscall_spawn(pid, argument),
            code::KILL => self.syscall_kill(pid, argument),
            code::WAIT => self.syscall_wait(pid, argument),
            _ => {
                log::warn!("pid {pid}: unknown syscall number {number}, killing offender");
                self.terminate_process(pid);
            }
        }
    }

    /// Writes `value` into the caller's saved A register — the uniform
    /// syscall return convention: every syscall collapses to a plain
    /// `-1`/success value here, never a typed error.
    pub(crate) fn set_return(&mut self, pid: i32, value: i64) {
        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.reg[0] = value;
        }
    }
}
