/*!
contracts.rs - Traits for the collaborators the kernel treats as external.

The CPU simulator, the memory array, the I/O bus, the executable-file
reader, and the diagnostic console are all external to the kernel; the
kernel only ever touches them through these four traits (the CPU itself has
no trait here — the kernel is never driven by calling into a CPU, it is
*called by* one, via `Kernel::handle_irq`). This mirrors the way the teaching
codebase this crate grew from decoupled its CPU core from its bus: a small
set of narrow traits at the seam, so the core can be exercised with an
in-memory fake instead of the real collaborator (see `testing::mock`).
*/

use crate::error::Result;

/// Word-addressed memory, shared between the CPU simulator and the kernel.
/// The trap frame lives at fixed addresses in this space.
pub trait Memory {
    fn read(&self, addr: i64) -> Result<i64>;
    fn write(&mut self, addr: i64, value: i64) -> Result<()>;
}

/// Word-addressed I/O bus. Device addresses are plain integers; the kernel
/// computes terminal-relative offsets itself via
/// `constants::terminal_device_address`.
pub trait IoBus {
    fn read(&self, addr: i64) -> Result<i64>;
    fn write(&mut self, addr: i64, value: i64) -> Result<()>;
}

/// A program loaded into memory by the external executable-file reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedProgram {
    /// Address the CPU should start executing at.
    pub entry: i64,
}

/// Bridge to the external executable-file reader.
/// A real implementation reads the program image and copies every word it
/// declares into `memory` at its declared base; this trait only has to
/// report back the program's entry address (or fail).
pub trait ProgramLoader<M: Memory> {
    fn load(&mut self, filename: &str, memory: &mut M) -> Result<LoadedProgram>;
}

/// Diagnostic console external to the kernel. This is the simulated
/// machine's own debug output device, distinct from the host process's
/// operational logging done via the `log` crate.
pub trait Console {
    fn print(&mut self, line: &str);
}
