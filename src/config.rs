/*!
config.rs - Runtime configuration for the kernel's tunables.

The source fixed INTERVAL, QUANTUM, POLICY, and the terminal count as
compile-time constants. Exposing them as a `KernelConfig` value is a pure
generalization: `KernelConfig::default()` reproduces the source's
compile-time defaults exactly, and nothing about their meaning changes when
they're read from a struct instead of a `#define`. Making them runtime
values is what lets one binary exercise all three scheduler policies and
arbitrary quanta/intervals across a single test run.
*/

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INTERVAL, DEFAULT_QUANTUM, NUM_TERMINALS};

/// Scheduling policy, selected in the source by the `ESCALONADOR`
/// compile-time constant. Numbering matches the source's `1`/`2`/`3`
/// so config files and tests can reference the same numbers the source used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerPolicy {
    /// Dynamic priority, lowest numeric value runs next.
    Priority = 1,
    /// Round-robin with a fixed quantum.
    RoundRobin = 2,
    /// First-ready-by-table-order, no preemption on quantum expiry.
    Simple = 3,
}

impl Default for SchedulerPolicy {
    fn default() -> Self {
        SchedulerPolicy::RoundRobin
    }
}

/// Kernel tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Timer interval, in instruction-clock ticks, between timer IRQs.
    pub interval: i32,
    /// Timer ticks a RUNNING process may use before being forced to yield.
    pub quantum: i32,
    /// Which of the three interchangeable schedulers is active.
    pub policy: SchedulerPolicy,
    /// Number of logical (keyboard, screen) terminal pairs on the I/O bus.
    pub num_terminals: i32,
    /// Filesystem path the end-of-run metrics report is written to on
    /// shutdown. `None` skips the filesystem write entirely — the
    /// rendered report is still available via `Kernel::last_report`.
    #[serde(default)]
    pub metrics_path: Option<String>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            quantum: DEFAULT_QUANTUM,
            policy: SchedulerPolicy::default(),
            num_terminals: NUM_TERMINALS,
            metrics_path: None,
        }
    }
}
