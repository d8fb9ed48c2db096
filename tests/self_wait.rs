mod common;

use supervisorcito::config::KernelConfig;
use supervisorcito::constants::{syscall, ADDR_A};
use supervisorcito::contracts::Memory;

#[test]
fn waiting_on_self_is_rejected_without_blocking() {
    let mut kernel = common::boot(KernelConfig::default());

    let keep_running = common::syscall(&mut kernel, syscall::WAIT, 1);

    assert!(keep_running);
    assert_eq!(kernel.current_pid(), Some(1));
    assert_eq!(kernel.memory_mut().read(ADDR_A).unwrap(), -1);
}

#[test]
fn waiting_on_a_pid_that_never_existed_is_rejected() {
    let mut kernel = common::boot(KernelConfig::default());

    common::syscall(&mut kernel, syscall::WAIT, 999);

    assert_eq!(kernel.current_pid(), Some(1));
    assert_eq!(kernel.memory_mut().read(ADDR_A).unwrap(), -1);
}
