/*!
constants.rs - Fixed trap-frame addresses, IRQ codes, syscall numbers, and
device register layout.

These mirror the machine's ABI exactly: the CPU
simulator deposits/consumes user state at these addresses, and the I/O bus
exposes device registers at `base + 4 * terminal`. Nothing here is a Rust
design choice; changing any of these constants changes what a compatible
assembly trap stub and executable loader expect.
*/

/// Saved/restored program counter.
pub const ADDR_PC: i64 = 0;
/// Saved/restored general register A; also the syscall number on entry and
/// the return value on exit (except SPAWN, see `kernel::syscall::spawn`).
pub const ADDR_A: i64 = 1;
/// Saved/restored general register X; also the syscall argument.
pub const ADDR_X: i64 = 2;
/// CPU error code, valid only on an `IrqCause::CpuError` trap.
pub const ADDR_ERR: i64 = 3;
/// Where the CPU branches on trap; must hold the loader-placed assembly stub.
pub const ADDR_TRAP_VECTOR: i64 = 10;

/// Number of timer interrupts a RUNNING process may use before being forced
/// to yield.
pub const DEFAULT_QUANTUM: i32 = 5;
/// Timer interval (in instruction-clock ticks) between timer interrupts.
pub const DEFAULT_INTERVAL: i32 = 20;
/// Number of logical (keyboard, screen) terminal pairs on the I/O bus.
pub const NUM_TERMINALS: i32 = 4;

/// I/O bus register bases. The address for terminal `t` is `base + 4 * t`.
pub const D_TERM_KEYBOARD_DATA: i64 = 100;
pub const D_TERM_KEYBOARD_READY: i64 = 101;
pub const D_TERM_SCREEN_DATA: i64 = 102;
pub const D_TERM_SCREEN_READY: i64 = 103;

/// Timer peripheral registers.
pub const D_TIMER_INTERVAL: i64 = 200;
pub const D_TIMER_INTERRUPT_SIGNAL: i64 = 201;
/// Free-running instruction counter used for tick bookkeeping.
pub const D_INSTRUCTION_CLOCK: i64 = 202;

/// Computes the I/O bus address of `device` for `terminal`, per the source's
/// `calcula_endereco_dispositivo`. Preserve exactly: changing this mapping
/// changes which tests can be interleaved.
#[inline]
pub const fn terminal_device_address(device_base: i64, terminal: i32) -> i64 {
    device_base + 4 * terminal as i64
}

/// Terminal index owning `pid`: `(pid - 1) mod NUM_TERMINALS`.
#[inline]
pub fn terminal_for_pid(pid: i32) -> i32 {
    (pid - 1).rem_euclid(NUM_TERMINALS)
}

/// Syscall numbers.
pub mod syscall {
    pub const READ: i64 = 1;
    pub const WRITE: i64 = 2;
    pub const SPAWN: i64 = 7;
    pub const KILL: i64 = 8;
    pub const WAIT: i64 = 9;
}

/// Maximum length, in bytes, of a filename copied out of process memory for
/// SPAWN.
pub const MAX_FILENAME_LEN: usize = 100;

/// Filename of the program synthesized into the first process on reset.
pub const INIT_PROGRAM: &str = "init.maq";
