//! READ syscall: fetch one word from the caller's bound keyboard, blocking if nothing is ready.

use crate::constants::{terminal_device_address, terminal_for_pid, D_TERM_KEYBOARD_DATA, D_TERM_KEYBOARD_READY};
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
    pub(crate) fn syscall_read(&mut self, pid: i32) {
        let terminal = terminal_for_pid(pid);
        let ready_addr = terminal_device_address(D_TERM_KEYBOARD_READY, terminal);
        let data_addr = terminal_device_address(D_TERM_KEYBOARD_DATA, terminal);

        if self.io.read(ready_addr).unwrap_or(0) != 0 {
            let value = self.io.read(data_addr).unwrap_or(0);
            self.set_return(pid, value);
            return;
        }

        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.block_reason = Some(BlockReason::WaitRead);
            descriptor.transition(ProcessState::Blocked);
        }
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KernelConfig;
    use crate::process::ProcessDescriptor;
    use crate::testing::mock::{MockConsole, MockIoBus, MockMemory, MockProgramLoader};

    fn new_kernel() -> Kernel<MockMemory, MockIoBus, MockProgramLoader, MockConsole> {
        Kernel::new(
            MockMemory::default(),
            MockIoBus::default(),
            MockProgramLoader::default(),
            MockConsole::default(),
            KernelConfig::default(),
        )
    }

    #[test]
    fn returns_data_immediately_when_keyboard_ready() {
        let mut kernel = new_kernel();
        let pid = 1;
        kernel.table.insert(ProcessDescriptor::new(pid, 0, 0));
        kernel.current = Some(pid);
        let terminal = terminal_for_pid(pid);
        kernel
            .io
            .write(terminal_device_address(D_TERM_KEYBOARD_READY, terminal), 1)
            .unwrap();
        kernel
            .io
            .write(terminal_device_address(D_TERM_KEYBOARD_DATA, terminal), 42)
            .unwrap();

        kernel.syscall_read(pid);

        assert_eq!(kernel.table.find_by_pid(pid).unwrap().reg[0], 42);
        assert_eq!(kernel.current, Some(pid));
    }

    #[test]
    fn blocks_when_keyboard_not_ready() {
        let mut kernel = new_kernel();
        let pid = 1;
        kernel.table.insert(ProcessDescriptor::new(pid, 0, 0));
        kernel.current = Some(pid);

        kernel.syscall_read(pid);

        assert_eq!(
            kernel.table.find_by_pid(pid).unwrap().state,
            ProcessState::Blocked
        );
        assert_eq!(
            kernel.table.find_by_pid(pid).unwrap().block_reason,
            Some(BlockReason::WaitRead)
        );
        assert_eq!(kernel.current, None);
    }
}
