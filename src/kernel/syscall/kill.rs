/*!
kill.rs - KILL syscall: terminate a process by pid, or the caller
itself when the argument is `0`.
*/

use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::kernel::Kernel;

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    pub(crate) fn syscall_kill(&mut self, caller: i32, target_arg: i64) {
        let target = if target_arg == 0 {
            caller
        } else {
            target_arg as i32
        };

        let exists_and_alive = self
            .table
            .find_by_pid(target)
            .map(|p| !p.is_terminated())
            .unwrap_or(false);
        if !exists_and_alive {
            self.set_return(caller, -1);
            return;
        }

        self.terminate_process(target);

        if caller != target {
            self.set_return(caller, 0);
        }
    }
}
