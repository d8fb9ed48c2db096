use supervisorcito::config::KernelConfig;
use supervisorcito::constants::{ADDR_A, ADDR_X, D_INSTRUCTION_CLOCK};
use supervisorcito::contracts::{IoBus, Memory};
use supervisorcito::testing::mock::{MockConsole, MockIoBus, MockMemory, MockProgramLoader};
use supervisorcito::{IrqCause, Kernel};

pub type TestKernel = Kernel<MockMemory, MockIoBus, MockProgramLoader, MockConsole>;

pub fn boot(config: KernelConfig) -> TestKernel {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut kernel = Kernel::new(
        MockMemory::default(),
        MockIoBus::default(),
        MockProgramLoader::default(),
        MockConsole::default(),
        config,
    );
    assert!(kernel.handle_irq(IrqCause::Reset), "boot should not shut down immediately");
    kernel
}

/// Drives a syscall trap for whichever process is current: writes the
/// syscall number and argument into the trap frame (as a real CPU would
/// after executing a `trap` instruction) and runs one kernel entry.
pub fn syscall(kernel: &mut TestKernel, number: i64, argument: i64) -> bool {
    kernel.memory_mut().write(ADDR_A, number).unwrap();
    kernel.memory_mut().write(ADDR_X, argument).unwrap();
    kernel.handle_irq(IrqCause::Syscall)
}

pub fn timer_tick(kernel: &mut TestKernel, clock_delta: i64) -> bool {
    let current = kernel.io_mut();
    let now = current.read(D_INSTRUCTION_CLOCK).unwrap();
    current.set_clock(now + clock_delta);
    kernel.handle_irq(IrqCause::Timer)
}
