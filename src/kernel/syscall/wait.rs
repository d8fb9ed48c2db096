/*!
wait.rs - WAIT syscall: block until a specific pid reaches
TERMINATED, or return immediately if it already has.
*/

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
    pub(crate) fn syscall_wait(&mut self, caller: i32, target_arg: i64) {
        let target = target_arg as i32;

        if target == caller {
            self.set_return(caller, -1);
            return;
        }

        let Some(target_descriptor) = self.table.find_by_pid(target) else {
            self.set_return(caller, -1);
            return;
        };

        if target_descriptor.is_terminated() {
            self.set_return(caller, 0);
            return;
        }

        if let Some(descriptor) = self.table.find_by_pid_mut(caller) {
            descriptor.block_reason = Some(BlockReason::WaitPid);
            descriptor.wait_target = Some(target);
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
    fn waiting_on_self_is_rejected() {
        let mut kernel = new_kernel();
        let pid = 1;
        kernel.table.insert(ProcessDescriptor::new(pid, 0, 0));
        kernel.current = Some(pid);

        kernel.syscall_wait(pid, pid as i64);

        assert_eq!(kernel.table.find_by_pid(pid).unwrap().reg[0], -1);
        assert_eq!(kernel.current, Some(pid));
    }

    #[test]
    fn waiting_on_already_terminated_pid_returns_immediately() {
        let mut kernel = new_kernel();
        let caller = 1;
        let target = 2;
        kernel.table.insert(ProcessDescriptor::new(caller, 0, 0));
        kernel.current = Some(caller);
        let mut descriptor = ProcessDescriptor::new(target, 0, 0);
        descriptor.transition(ProcessState::Terminated);
        kernel.table.insert(descriptor);

        kernel.syscall_wait(caller, target as i64);

        assert_eq!(kernel.table.find_by_pid(caller).unwrap().reg[0], 0);
        assert_eq!(kernel.current, Some(caller));
    }

    #[test]
    fn waiting_on_a_live_pid_blocks_the_caller() {
        let mut kernel = new_kernel();
        let caller = 1;
        let target = 2;
        kernel.table.insert(ProcessDescriptor::new(caller, 0, 0));
        kernel.current = Some(caller);
        kernel.table.insert(ProcessDescriptor::new(target, 0, 0));

        kernel.syscall_wait(caller, target as i64);

        let descriptor = kernel.table.find_by_pid(caller).unwrap();
        assert_eq!(descriptor.state, ProcessState::Blocked);
        assert_eq!(descriptor.wait_target, Some(target));
        assert_eq!(kernel.current, None);
    }

    #[test]
    fn waiting_on_unknown_pid_is_rejected() {
        let mut kernel = new_kernel();
        let caller = 1;
        kernel.table.insert(ProcessDescriptor::new(caller, 0, 0));
        kernel.current = Some(caller);

        kernel.syscall_wait(caller, 999);

        assert_eq!(kernel.table.find_by_pid(caller).unwrap().reg[0], -1);
    }
}
