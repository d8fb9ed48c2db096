mod common;

use supervisorcito::config::{KernelConfig, SchedulerPolicy};
use supervisorcito::constants::syscall;
use supervisorcito::contracts::Memory;
use supervisorcito::process::ProcessState;

fn priority_config() -> KernelConfig {
    KernelConfig {
        policy: SchedulerPolicy::Priority,
        ..KernelConfig::default()
    }
}

fn spawn_child(kernel: &mut common::TestKernel, filename: &str, filename_addr: i64) {
    for (i, byte) in filename.bytes().enumerate() {
        kernel
            .memory_mut()
            .write(filename_addr + i as i64, byte as i64)
            .unwrap();
    }
    kernel
        .memory_mut()
        .write(filename_addr + filename.len() as i64, 0)
        .unwrap();
    common::syscall(kernel, syscall::SPAWN, filename_addr);
}

#[test]
fn a_cpu_hog_is_penalized_and_a_fresh_ready_process_runs_next() {
    let mut kernel = common::boot(priority_config());
    spawn_child(&mut kernel, "b.maq", 500);
    spawn_child(&mut kernel, "c.maq", 600);

    for _ in 0..5 {
        common::timer_tick(&mut kernel, 1);
    }

    assert_eq!(kernel.current_pid(), Some(2));
    assert_eq!(kernel.metrics().preemptions, 1);

    let process1 = kernel.process_table().find_by_pid(1).unwrap();
    assert_eq!(process1.state, ProcessState::Ready);
    assert!(
        (process1.priority - 1.0).abs() < 1e-9,
        "a process that used its whole quantum should be penalized by 0.5, got {}",
        process1.priority
    );
}

#[test]
fn equal_priority_ties_favor_the_earlier_enqueued_process() {
    let mut kernel = common::boot(priority_config());
    spawn_child(&mut kernel, "b.maq", 500);
    spawn_child(&mut kernel, "c.maq", 600);

    // Process 1 self-terminates before its quantum expires, so both
    // children still carry the untouched default priority (0.5 each):
    // the tie must resolve to pid 2, the first one enqueued.
    common::syscall(&mut kernel, syscall::KILL, 0);

    assert_eq!(kernel.current_pid(), Some(2));
}
