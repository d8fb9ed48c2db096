/*!
kernel - The supervisor kernel: process table, ready queue, the active
scheduler, and the trap-driven control loop that ties them together.

`Kernel<M, I, L, C>` is generic over the four external contracts: a
`Memory`, an `IoBus`, a `ProgramLoader<M>`, and a `Console`. It never
constructs or steps a CPU itself — a caller (the CPU simulator, out of
scope here) drives it one trap at a time via [`Kernel::handle_irq`].
*/

mod dispatch;
mod entry;
mod irq;
mod lifecycle;
mod loader;
mod metrics;
mod scheduler;
mod sweep;
mod syscall;

pub use irq::IrqCause;
pub use metrics::{KernelMetrics, ProcessSnapshot};

use crate::config::KernelConfig;
use crate::contracts::{Console, IoBus, Memory, ProgramLoader};
use crate::process::ProcessTable;
use crate::queue::ReadyQueue;

/// The supervisor kernel.
pub struct Kernel<M, I, L, C> {
    pub(crate) memory: M,
    pub(crate) io: I,
    pub(crate) loader: L,
    pub(crate) console: C,
    pub(crate) config: KernelConfig,

    pub(crate) table: ProcessTable,
    pub(crate) ready_queue: ReadyQueue,
    /// Pid of the RUNNING process, or `None` while idle.
    pub(crate) current: Option<i32>,
    pub(crate) next_pid: i32,
    /// Timer ticks remaining in the current process's quantum.
    pub(crate) quantum_remaining: i32,
    /// Last instruction-clock reading observed, for delta computation.
    pub(crate) last_clock: i64,
    /// Set when the kernel hits an unrecoverable internal condition;
    /// checked by the dispatcher to trigger shutdown.
    pub(crate) internal_error: bool,

    pub(crate) metrics: KernelMetrics,
    /// The rendered end-of-run report, set once by `shutdown`.
    pub(crate) last_report: Option<String>,
}

impl<M, I, L, C> Kernel<M, I, L, C>
where
    M: Memory,
    I: IoBus,
    L: ProgramLoader<M>,
    C: Console,
{
    pub fn new(memory: M, io: I, loader: L, console: C, config: KernelConfig) -> Self {
        Self {
            memory,
            io,
            loader,
            console,
            config,
            table: ProcessTable::new(),
            ready_queue: ReadyQueue::new(),
            current: None,
            next_pid: 1,
            quantum_remaining: 0,
            last_clock: 0,
            internal_error: false,
            metrics: KernelMetrics::default(),
            last_report: None,
        }
    }

    /// The one entry point a CPU simulator calls on every trap. Returns
    /// `true` if the kernel wants the CPU to keep running, `false` if it
    /// has shut down.
    ///
    /// Fixed order: save the interrupted process's
    /// state, update clock-based metrics, dispatch on `cause`, sweep
    /// blocked processes for newly-ready devices, run the scheduler, then
    /// either write back the trap frame for the chosen process or shut
    /// down.
    pub fn handle_irq(&mut self, cause: IrqCause) -> bool {
        self.metrics.per_irq_counts[cause.index()] += 1;

        self.save_user_state();
        self.update_clock();
        self.dispatch_irq(cause);
        self.sweep_blocked();
        self.schedule();

        self.dispatch_or_shutdown()
    }

    pub fn metrics(&self) -> &KernelMetrics {
        &self.metrics
    }

    pub fn process_table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn current_pid(&self) -> Option<i32> {
        self.current
    }

    /// Direct access to the memory collaborator, for harnesses that need to
    /// poke the trap frame or device-backed words directly (e.g. tests
    /// driving a fake CPU by hand).
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Pids currently sitting in the ready queue, oldest-enqueued first.
    /// Exposed for diagnostics and for tests asserting queue invariants.
    pub fn ready_queue_pids(&self) -> Vec<i32> {
        self.ready_queue.iter().copied().collect()
    }

    /// The rendered end-of-run report, available once `handle_irq` has
    /// returned `false`.
    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }
}
