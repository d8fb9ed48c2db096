/*!
sweep.rs - Pending I/O sweep: polls every BLOCKED-on-device descriptor for
readiness and wakes it.

Runs once per trap, after IRQ dispatch and before scheduling, regardless of
what caused the trap — a process blocked on a keyboard read can become
READY off the back of a timer tick just as easily as off its own syscall.
WAIT_PID is not a device wait and is not touched here; it is resolved
directly at the moment the awaited process terminates (`lifecycle::wake_waiters_for`).
*/

use crate::constants::{
    terminal_device_address, terminal_for_pid, D_TERM_KEYBOARD_DATA, D_TERM_KEYBOARD_READY,
    D_TERM_SCREEN_DATA, D_TERM_SCREEN_READY,
};
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
    pub(crate) fn sweep_blocked(&mut self) {
        let candidates: Vec<i32> = self
            .table
            .iter()
            .filter(|p| p.state == ProcessState::Blocked)
            .map(|p| p.pid)
            .collect();

        for pid in candidates {
            let terminal = terminal_for_pid(pid);
            let reason = self.table.find_by_pid(pid).and_then(|p| p.block_reason);
            match reason {
                Some(BlockReason::WaitRead) => self.try_wake_reader(pid, terminal),
                Some(BlockReason::WaitWrite) => self.try_wake_writer(pid, terminal),
                Some(BlockReason::WaitPid) | None => {}
            }
        }
    }

    fn try_wake_reader(&mut self, pid: i32, terminal: i32) {
        let ready_addr = terminal_device_address(D_TERM_KEYBOARD_READY, terminal);
        let data_addr = terminal_device_address(D_TERM_KEYBOARD_DATA, terminal);
        if self.io.read(ready_addr).unwrap_or(0) == 0 {
            return;
        }
        let value = self.io.read(data_addr).unwrap_or(0);
        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.reg[0] = value;
            descriptor.block_reason = None;
            descriptor.transition(ProcessState::Ready);
        }
        self.ready_queue.enqueue_tail(pid);
    }

    fn try_wake_writer(&mut self, pid: i32, terminal: i32) {
        let ready_addr = terminal_device_address(D_TERM_SCREEN_READY, terminal);
        let data_addr = terminal_device_address(D_TERM_SCREEN_DATA, terminal);
        if self.io.read(ready_addr).unwrap_or(0) == 0 {
            return;
        }
        let pending = self
            .table
            .find_by_pid(pid)
            .map(|p| p.pending_data)
            .unwrap_or(0);
        let _ = self.io.write(data_addr, pending);
        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.reg[0] = 0;
            descriptor.block_reason = None;
            descriptor.transition(ProcessState::Ready);
        }
        self.ready_queue.enqueue_tail(pid);
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
    fn blocked_reader_wakes_once_keyboard_is_ready() {
        let mut kernel = new_kernel();
        let pid = 1;
        let mut descriptor = ProcessDescriptor::new(pid, 0, 0);
        descriptor.transition(ProcessState::Blocked);
        descriptor.block_reason = Some(BlockReason::WaitRead);
        kernel.table.insert(descriptor);

        let terminal = terminal_for_pid(pid);
        kernel
            .io
            .write(terminal_device_address(D_TERM_KEYBOARD_READY, terminal), 1)
            .unwrap();
        kernel
            .io
            .write(terminal_device_address(D_TERM_KEYBOARD_DATA, terminal), 65)
            .unwrap();

        kernel.sweep_blocked();

        let descriptor = kernel.table.find_by_pid(pid).unwrap();
        assert_eq!(descriptor.state, ProcessState::Ready);
        assert_eq!(descriptor.reg[0], 65);
        assert!(kernel.ready_queue.contains(pid));
    }

    #[test]
    fn blocked_reader_stays_blocked_when_not_ready() {
        let mut kernel = new_kernel();
        let pid = 1;
        let mut descriptor = ProcessDescriptor::new(pid, 0, 0);
        descriptor.transition(ProcessState::Blocked);
        descriptor.block_reason = Some(BlockReason::WaitRead);
        kernel.table.insert(descriptor);

        kernel.sweep_blocked();

        let descriptor = kernel.table.find_by_pid(pid).unwrap();
        assert_eq!(descriptor.state, ProcessState::Blocked);
        assert!(!kernel.ready_queue.contains(pid));
    }

    #[test]
    fn wait_pid_blocked_process_is_untouched_by_sweep() {
        let mut kernel = new_kernel();
        let pid = 1;
        let mut descriptor = ProcessDescriptor::new(pid, 0, 0);
        descriptor.transition(ProcessState::Blocked);
        descriptor.block_reason = Some(BlockReason::WaitPid);
        descriptor.wait_target = Some(2);
        kernel.table.insert(descriptor);

        kernel.sweep_blocked();

        assert_eq!(
            kernel.table.find_by_pid(pid).unwrap().state,
            ProcessState::Blocked
        );
    }
}
