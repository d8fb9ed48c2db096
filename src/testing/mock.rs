/*!
mock.rs - In-memory fakes for the four external contracts, used by
unit and integration tests in place of a real CPU simulator, memory image,
I/O bus, and executable loader.
*/

use std::collections::HashMap;

use crate::constants::D_INSTRUCTION_CLOCK;
use crate::contracts::{Console, IoBus, LoadedProgram, Memory, ProgramLoader};
use crate::error::{KernelError, Result};

/// Word-addressed memory backed by a sparse map; unread addresses read as 0.
#[derive(Debug, Default)]
pub struct MockMemory {
    words: HashMap<i64, i64>,
}

impl Memory for MockMemory {
    fn read(&self, addr: i64) -> Result<i64> {
        Ok(*self.words.get(&addr).unwrap_or(&0))
    }

    fn write(&mut self, addr: i64, value: i64) -> Result<()> {
        self.words.insert(addr, value);
        Ok(())
    }
}

/// Word-addressed I/O bus backed by a sparse map, with a convenience for
/// driving the instruction clock directly in tests.
#[derive(Debug, Default)]
pub struct MockIoBus {
    registers: HashMap<i64, i64>,
}

impl MockIoBus {
    pub fn set_clock(&mut self, value: i64) {
        self.registers.insert(D_INSTRUCTION_CLOCK, value);
    }
}

impl IoBus for MockIoBus {
    fn read(&self, addr: i64) -> Result<i64> {
        Ok(*self.registers.get(&addr).unwrap_or(&0))
    }

    fn write(&mut self, addr: i64, value: i64) -> Result<()> {
        self.registers.insert(addr, value);
        Ok(())
    }
}

/// Diagnostic console that records every line printed, for assertions.
#[derive(Debug, Default)]
pub struct MockConsole {
    pub lines: Vec<String>,
}

impl Console for MockConsole {
    fn print(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Loader fake. Succeeds with a fixed entry point unless armed with
/// `fail_next`, which makes exactly the next `load` call fail.
#[derive(Debug, Default)]
pub struct MockProgramLoader {
    fail_next: bool,
    pub loaded: Vec<String>,
}

impl MockProgramLoader {
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl ProgramLoader<MockMemory> for MockProgramLoader {
    fn load(&mut self, filename: &str, _memory: &mut MockMemory) -> Result<LoadedProgram> {
        if self.fail_next {
            self.fail_next = false;
            return Err(KernelError::Internal(format!("mock refused to load {filename}")));
        }
        self.loaded.push(filename.to_string());
        Ok(LoadedProgram { entry: 0 })
    }
}
