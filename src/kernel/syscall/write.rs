//! WRITE syscall: deposit one word on the caller's bound screen, blocking if the device is busy.

use crate::constants::{terminal_device_address, terminal_for_pid, D_TERM_SCREEN_DATA, D_TERM_SCREEN_READY};
use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::kernel::Kernel;
use crate::process::{BlockReason, ProcessState};

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    pub(crate) fn syscall_write(&mut self, pid: i32, argument: i64) {
        let terminal = terminal_for_pid(pid);
        let ready_addr = terminal_device_address(D_TERM_SCREEN_READY, terminal);
        let data_addr = terminal_device_address(D_TERM_SCREEN_DATA, terminal);

        if self.io.read(ready_addr).unwrap_or(0) != 0 {
            let _ = self.io.write(data_addr, argument);
            self.set_return(pid, 0);
            return;
        }

        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.pending_data = argument;
            descriptor.block_reason = Some(BlockReason::WaitWrite);
            descriptor.transition(ProcessState::Blocked);
        }
        self.current = None;
    }
}
