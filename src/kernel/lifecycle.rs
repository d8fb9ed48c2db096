/*!
lifecycle.rs - Boot, process creation, shutdown, and WAIT_PID wakeups.
RESET and SPAWN share one process-creation path, recovered from the
original source's behavior rather than stated outright.
*/

use std::fs;

use crate::constants::{D_TIMER_INTERRUPT_SIGNAL, D_TIMER_INTERVAL, INIT_PROGRAM};
use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::error::{KernelError, Result};
use crate::kernel::Kernel;
use crate::process::{BlockReason, ProcessDescriptor, ProcessState};

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    /// RESET: programs the timer peripheral to the configured interval,
    /// then creates the init process and lets the scheduler that runs
    /// later this same trap dispatch it. A load failure here is fatal
    /// — there is nothing else the machine could possibly run.
    pub(crate) fn boot(&mut self) {
        let _ = self.io.write(D_TIMER_INTERVAL, self.config.interval as i64);
        if self.spawn_process(INIT_PROGRAM).is_err() {
            self.internal_error = true;
        }
    }

    /// Loads `filename`, allocates the next pid, and enqueues a fresh READY
    /// descriptor. Shared by `boot` and the SPAWN syscall — the two
    /// only differ in what they do with the resulting pid (the scheduler
    /// picks up the init process on its own; SPAWN hands the pid back to
    /// its caller in a register the syscall layer chooses).
    pub(crate) fn spawn_process(&mut self, filename: &str) -> Result<i32> {
        let loaded = self
            .loader
            .load(filename, &mut self.memory)
            .map_err(|e| KernelError::Internal(format!("load {filename} failed: {e}")))?;
        let pid = self.next_pid;
        self.next_pid += 1;
        let descriptor = ProcessDescriptor::new(pid, loaded.entry, self.metrics.total_ticks);
        self.table.insert(descriptor);
        self.ready_queue.enqueue_tail(pid);
        Ok(pid)
    }

    /// Transitions `pid` to TERMINATED, unlinks it from the ready queue,
    /// clears it as the running process if it was current, and wakes any
    /// WAIT_PID waiters. Shared by the KILL syscall and the unknown-syscall
    /// default arm, which both kill a process outright rather than block it.
    pub(crate) fn terminate_process(&mut self, pid: i32) {
        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            descriptor.transition(ProcessState::Terminated);
        }
        self.ready_queue.remove_pid(pid);
        if self.current == Some(pid) {
            self.current = None;
        }
        self.wake_waiters_for(pid);
    }

    /// Wakes every BLOCKED-on-WAIT_PID descriptor awaiting `terminated_pid`.
    /// Called the instant a process reaches TERMINATED, not polled by the
    /// device sweep.
    pub(crate) fn wake_waiters_for(&mut self, terminated_pid: i32) {
        let waiters: Vec<i32> = self
            .table
            .iter()
            .filter(|p| {
                p.state == ProcessState::Blocked
                    && p.block_reason == Some(BlockReason::WaitPid)
                    && p.wait_target == Some(terminated_pid)
            })
            .map(|p| p.pid)
            .collect();
        for pid in waiters {
            if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
                descriptor.reg[0] = 0;
                descriptor.block_reason = None;
                descriptor.wait_target = None;
                descriptor.transition(ProcessState::Ready);
            }
            self.ready_queue.enqueue_tail(pid);
        }
    }

    /// Disables the timer peripheral, then renders and stores the
    /// end-of-run report, writing it to `config.metrics_path` when one is
    /// configured.
    pub(crate) fn shutdown(&mut self) {
        let _ = self.io.write(D_TIMER_INTERVAL, 0);
        let _ = self.io.write(D_TIMER_INTERRUPT_SIGNAL, 0);

        let report = self.metrics.render_report(&self.table);
        if let Some(path) = &self.config.metrics_path {
            if let Err(err) = fs::write(path, &report) {
                log::warn!("failed to write metrics report to {path}: {err}");
            }
        }
        log::info!("kernel shutdown; {} processes total", self.table.len());
        self.last_report = Some(report);
    }
}
