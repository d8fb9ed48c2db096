/*!
spawn.rs - SPAWN syscall: read a filename out of the caller's memory
and create a new process from it, via the shared `lifecycle::spawn_process`
helper also used by RESET.
*/

use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::kernel::loader::read_cstring_from_memory;
use crate::kernel::Kernel;

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    pub(crate) fn syscall_spawn(&mut self, caller: i32, filename_ptr: i64) {
        let filename = match read_cstring_from_memory(&self.memory, filename_ptr) {
            Ok(name) => name,
            Err(_) => {
                self.set_return(caller, -1);
                return;
            }
        };
        match self.spawn_process(&filename) {
            Ok(new_pid) => self.set_return(caller, new_pid as i64),
            Err(_) => self.set_return(caller, -1),
        }
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

    fn write_filename(kernel: &mut Kernel<MockMemory, MockIoBus, MockProgramLoader, MockConsole>, addr: i64, name: &str) {
        for (i, byte) in name.bytes().enumerate() {
            kernel.memory.write(addr + i as i64, byte as i64).unwrap();
        }
        kernel.memory.write(addr + name.len() as i64, 0).unwrap();
    }

    #[test]
    fn spawn_success_returns_new_pid_to_caller() {
        let mut kernel = new_kernel();
        let caller = 1;
        kernel.table.insert(ProcessDescriptor::new(caller, 0, 0));
        kernel.next_pid = 2;
        write_filename(&mut kernel, 500, "child.maq");

        kernel.syscall_spawn(caller, 500);

        let returned = kernel.table.find_by_pid(caller).unwrap().reg[0];
        assert_eq!(returned, 2);
        assert!(kernel.table.find_by_pid(2).is_some());
    }

    #[test]
    fn spawn_failure_returns_minus_one() {
        let mut kernel = new_kernel();
        let caller = 1;
        kernel.table.insert(ProcessDescriptor::new(caller, 0, 0));
        kernel.loader.fail_next();
        write_filename(&mut kernel, 500, "child.maq");

        kernel.syscall_spawn(caller, 500);

        assert_eq!(kernel.table.find_by_pid(caller).unwrap().reg[0], -1);
    }

    #[test]
    fn spawn_with_unterminated_filename_returns_minus_one() {
        let mut kernel = new_kernel();
        let caller = 1;
        kernel.table.insert(ProcessDescriptor::new(caller, 0, 0));

        kernel.syscall_spawn(caller, 500);

        assert_eq!(kernel.table.find_by_pid(caller).unwrap().reg[0], -1);
    }
}
