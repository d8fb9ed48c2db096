mod common;

use supervisorcito::config::KernelConfig;
use supervisorcito::constants::{
    syscall, terminal_device_address, ADDR_A, D_TERM_KEYBOARD_DATA, D_TERM_KEYBOARD_READY,
};
use supervisorcito::contracts::{IoBus, Memory};
use supervisorcito::process::ProcessState;
use supervisorcito::IrqCause;

#[test]
fn read_blocks_then_wakes_once_keyboard_becomes_ready() {
    let mut kernel = common::boot(KernelConfig::default());

    let keep_running = common::syscall(&mut kernel, syscall::READ, 0);
    assert!(keep_running);
    assert_eq!(kernel.current_pid(), None);
    assert_eq!(
        kernel.process_table().find_by_pid(1).unwrap().state,
        ProcessState::Blocked
    );

    kernel
        .io_mut()
        .write(terminal_device_address(D_TERM_KEYBOARD_READY, 0), 1)
        .unwrap();
    kernel
        .io_mut()
        .write(terminal_device_address(D_TERM_KEYBOARD_DATA, 0), 97)
        .unwrap();

    let keep_running = kernel.handle_irq(IrqCause::Timer);
    assert!(keep_running);
    assert_eq!(kernel.current_pid(), Some(1));
    assert_eq!(kernel.memory_mut().read(ADDR_A).unwrap(), 97);
}

#[test]
fn write_blocks_then_flushes_once_screen_is_ready() {
    use supervisorcito::constants::{D_TERM_SCREEN_DATA, D_TERM_SCREEN_READY};

    let mut kernel = common::boot(KernelConfig::default());
    common::syscall(&mut kernel, syscall::WRITE, 88);
    assert_eq!(kernel.current_pid(), None);

    kernel
        .io_mut()
        .write(terminal_device_address(D_TERM_SCREEN_READY, 0), 1)
        .unwrap();

    kernel.handle_irq(IrqCause::Timer);

    assert_eq!(kernel.current_pid(), Some(1));
    let written = kernel
        .io_mut()
        .read(terminal_device_address(D_TERM_SCREEN_DATA, 0))
        .unwrap();
    assert_eq!(written, 88);
}
