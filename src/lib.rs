/*!
A single-threaded, trap-driven supervisor kernel for a teaching-grade
computer simulator.

The kernel multiplexes one simulated CPU across many user processes. It is
driven entirely by [`kernel::Kernel::handle_irq`]: a caller representing the
CPU simulator traps into the kernel with a cause, and the kernel saves
state, dispatches the cause, sweeps blocked processes for device readiness,
runs the active scheduler, and either resumes a process or shuts down.

The CPU simulator itself, the word-addressed memory array, the I/O bus, the
executable loader, and the diagnostic console are all external
collaborators, referenced here only through the traits in [`contracts`].
Nothing in this crate constructs or steps a CPU.
*/

pub mod config;
pub mod constants;
pub mod contracts;
pub mod error;
pub mod kernel;
pub mod process;
pub mod queue;
pub mod testing;

pub use config::{KernelConfig, SchedulerPolicy};
pub use error::{KernelError, Result};
pub use kernel::{IrqCause, Kernel, KernelMetrics};
