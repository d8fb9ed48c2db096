/*!
descriptor.rs - Per-process descriptor: identity, saved registers, lifecycle
state, block reason, and metrics.
*/

use log::debug;

use crate::process::metrics::ProcessMetrics;

/// Lifecycle state of a process. The source's internal
/// `ESTADO_INICIALIZANDO` is folded into `Running` here: both describe a
/// process actively holding the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessState {
    Ready,
    Running,
    Blocked,
    Terminated,
}

impl ProcessState {
    pub const ALL: [ProcessState; 4] = [
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Blocked,
        ProcessState::Terminated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProcessState::Ready => "READY",
            ProcessState::Running => "RUNNING",
            ProcessState::Blocked => "BLOCKED",
            ProcessState::Terminated => "TERMINATED",
        }
    }

    /// Index into fixed-size per-state metrics arrays.
    pub fn index(self) -> usize {
        match self {
            ProcessState::Ready => 0,
            ProcessState::Running => 1,
            ProcessState::Blocked => 2,
            ProcessState::Terminated => 3,
        }
    }
}

/// Why a BLOCKED process is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    WaitRead,
    WaitWrite,
    WaitPid,
}

/// A process's descriptor: identity, saved CPU state, lifecycle state, and
/// scheduling/metrics bookkeeping.
#[derive(Debug, Clone)]
pub struct ProcessDescriptor {
    pub pid: i32,
    pub pc: i64,
    /// Register save slots, indexed 0 = "A", 1 = "X".
    pub reg: [i64; 2],
    pub state: ProcessState,
    pub block_reason: Option<BlockReason>,
    /// Word pending a screen write while blocked on WAIT_WRITE.
    pub pending_data: i64,
    /// Pid being awaited, while blocked on WAIT_PID.
    pub wait_target: Option<i32>,
    /// Dynamic priority in [0, 1]; lower is higher precedence.
    pub priority: f64,
    pub metrics: ProcessMetrics,
    /// Global total-ticks reading at creation, used to bound per-process
    /// metrics against elapsed time.
    pub creation_tick: i64,
}

impl ProcessDescriptor {
    /// Constructs a descriptor in state READY with both register slots at
    /// zero, priority 0.5, zeroed metrics, and the READY entry counter
    /// bumped to 1.
    pub fn new(pid: i32, pc: i64, creation_tick: i64) -> Self {
        let mut metrics = ProcessMetrics::default();
        metrics.states[ProcessState::Ready.index()].quantity = 1;
        Self {
            pid,
            pc,
            reg: [0, 0],
            state: ProcessState::Ready,
            block_reason: None,
            pending_data: 0,
            wait_target: None,
            priority: 0.5,
            metrics,
            creation_tick,
        }
    }

    /// True if this process has ever run to completion and can no longer be
    /// scheduled.
    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    /// Transitions to `new_state`:
    /// (a) if this matches the preemption pattern (RUNNING -> READY),
    ///     increments the process's preemption counter;
    /// (b) increments the destination state's entry counter;
    /// (c) logs diagnostically.
    /// State writes are not idempotent: entering a state always bumps its
    /// entry counter, even if `new_state == self.state`.
    pub fn transition(&mut self, new_state: ProcessState) {
        if self.state == ProcessState::Running && new_state == ProcessState::Ready {
            self.metrics.preemptions += 1;
        }
        debug!(
            "pid {}: {} -> {}",
            self.pid,
            self.state.as_str(),
            new_state.as_str()
        );
        self.metrics.states[new_state.index()].quantity += 1;
        self.state = new_state;
    }
}
