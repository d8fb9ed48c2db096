/*!
error.rs - Internal error type for the kernel's Rust layer.

The kernel never surfaces a structured error to user code: syscalls return a
bare `-1`, and internal failures just flip the internal-error flag and let
the scheduler's exhaustion check trip shutdown. `KernelError` exists purely
so the Rust implementation can use `Result`/`?` internally (trait methods on
`Memory`/`IoBus`/`ProgramLoader` return `Result`) instead of threading bools
by hand; every call site that faces simulated hardware collapses it back to
the untyped `-1`/flag behavior expected at the boundary.
*/

use thiserror::Error;

/// Internal error type. Device-not-ready and nothing-left-to-run are not
/// modeled as errors here: they are plain state transitions, not failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A syscall request the caller had no business making: unknown syscall
    /// number, wait-on-self, wait-on-missing-pid, malformed spawn filename.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The CPU simulator faulted (`IrqCause::CpuError`); propagated as an
    /// IRQ, not a `Result`, but kept here so `err_name`-style formatting has
    /// one home.
    #[error("cpu fault: {0}")]
    CpuFault(String),

    /// Memory/IO read or write failed, or the program loader failed.
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type Result<T> = core::result::Result<T, KernelError>;
