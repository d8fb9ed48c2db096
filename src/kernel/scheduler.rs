/*!
scheduler.rs - The three interchangeable scheduling policies, plus
the priority-update formula and the shared "execution transition" applied
whenever the scheduler actually settles on a (possibly new) running
descriptor.

All three policies share one invariant-preserving trick: a descriptor is
only ever transitioned to READY (and only ever counted as preempted) inside
`execute_transition`, when the newly chosen pid differs from the previously
running one. A policy that decides to keep the current process running
returns before calling `execute_transition` at all — matching the source,
where `so_executa_proc` is simply not called on that path, so no quantum
reset and no transition happens either.
*/

use crate::config::SchedulerPolicy;
use crate::kernel::Kernel;
use crate::process::ProcessState;

impl<M, I, L, C> Kernel<M, I, L, C> {
    /// Picks (and, if necessary, switches to) the next descriptor to run.
    /// Called once per kernel entry, after the pending-I/O sweep.
    pub(crate) fn schedule(&mut self) {
        self.apply_priority_update();
        match self.config.policy {
            SchedulerPolicy::Simple => self.schedule_simple(),
            SchedulerPolicy::RoundRobin => self.schedule_round_robin(),
            SchedulerPolicy::Priority => self.schedule_priority(),
        }
    }

    /// Priority update formula, applied unconditionally before
    /// policy dispatch, on the outgoing current — even under policies that
    /// never read `priority`. A process that used more of its quantum is
    /// penalized: the formula raises the numeric priority value (lower
    /// numeric value is higher precedence), in `[0, 0.5]` per update.
    fn apply_priority_update(&mut self) {
        let Some(pid) = self.current else { return };
        let quantum = self.config.quantum;
        if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
            let used_fraction = (quantum - self.quantum_remaining) as f64 / quantum as f64;
            descriptor.priority += used_fraction / 2.0;
        }
    }

    /// Simple / FIFO-ish (policy 3): keep the current RUNNING descriptor;
    /// else pick the first READY descriptor in table order; else idle if
    /// something is BLOCKED, else flag internal error (nothing left to run
    /// at all).
    fn schedule_simple(&mut self) {
        if let Some(pid) = self.current {
            if self.is_running(pid) {
                return;
            }
        }
        let first_ready = self
            .table
            .iter()
            .find(|p| p.state == ProcessState::Ready)
            .map(|p| p.pid);
        if let Some(pid) = first_ready {
            self.execute_transition(Some(pid));
            return;
        }
        if self.table.any_in_state(ProcessState::Blocked) {
            self.current = None;
        } else {
            self.internal_error = true;
        }
    }

    /// Round-robin (policy 2): keep the current descriptor while its
    /// quantum remains; otherwise requeue it at the tail and dispatch the
    /// head of the ready queue.
    fn schedule_round_robin(&mut self) {
        if let Some(pid) = self.current {
            if self.is_running(pid) && self.quantum_remaining > 0 {
                return;
            }
            if self.is_running(pid) {
                self.ready_queue.enqueue_tail(pid);
            }
        }
        let next = self.ready_queue.remove_head();
        self.execute_transition(next);
    }

    /// Priority (policy 1): keep the current descriptor while its quantum
    /// remains; otherwise requeue it and dispatch the READY descriptor with
    /// numerically smallest priority.
    fn schedule_priority(&mut self) {
        if let Some(pid) = self.current {
            if self.is_running(pid) && self.quantum_remaining > 0 {
                return;
            }
            if self.is_running(pid) {
                self.ready_queue.enqueue_tail(pid);
            }
        }
        let table = &self.table;
        let next = self
            .ready_queue
            .remove_min_priority(|pid| {
                table.find_by_pid(pid).map(|p| p.priority).unwrap_or(f64::INFINITY)
            });
        self.execute_transition(next);
    }

    fn is_running(&self, pid: i32) -> bool {
        self.table
            .find_by_pid(pid)
            .map(|p| p.state == ProcessState::Running)
            .unwrap_or(false)
    }

    fn priority_of(&self, pid: i32) -> f64 {
        self.table.find_by_pid(pid).map(|p| p.priority).unwrap_or(f64::INFINITY)
    }

    /// Execution transition, grounded in `so_executa_proc`: applied
    /// whenever a policy settles on `chosen` (which may equal the previous
    /// current, e.g. a round-robin process requeuing itself and
    /// immediately being the only entry popped back off).
    ///
    /// - if `chosen` differs from the previous current and that previous
    ///   descriptor is still RUNNING, transition it to READY and count a
    ///   global preemption;
    /// - if `chosen` is not already RUNNING, transition it to RUNNING;
    /// - set `current = chosen` and reset the quantum.
    pub(crate) fn execute_transition(&mut self, chosen: Option<i32>) {
        let previous = self.current;
        if chosen != previous {
            if let Some(prev_pid) = previous {
                if self.is_running(prev_pid) {
                    if let Some(descriptor) = self.table.find_by_pid_mut(prev_pid) {
                        descriptor.transition(ProcessState::Ready);
                    }
                    self.metrics.preemptions += 1;
                }
            }
        }
        if let Some(pid) = chosen {
            if !self.is_running(pid) {
                if let Some(descriptor) = self.table.find_by_pid_mut(pid) {
                    descriptor.transition(ProcessState::Running);
                }
            }
        }
        self.current = chosen;
        self.quantum_remaining = self.config.quantum;
    }
}
