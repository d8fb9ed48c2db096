/*!
table.rs - Process table: every descriptor ever created, insertion-ordered.

The source represents this as a NULL-sentinel-terminated dynamic array and
iterates until it hits the sentinel; here it's an ordinary growable
sequence, iterated by length rather than by terminator. TERMINATED
descriptors stay here forever — they remain reapable for pid-based WAIT
resolution and metrics — only kernel teardown frees them.
*/

use crate::process::descriptor::{ProcessDescriptor, ProcessState};

/// Insertion-ordered collection of every process the kernel has ever
/// created, including TERMINATED ones.
#[derive(Debug, Default)]
pub struct ProcessTable {
    processes: Vec<ProcessDescriptor>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
        }
    }

    pub fn insert(&mut self, descriptor: ProcessDescriptor) {
        self.processes.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessDescriptor> {
        self.processes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ProcessDescriptor> {
        self.processes.iter_mut()
    }

    pub fn find_by_pid(&self, pid: i32) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    pub fn find_by_pid_mut(&mut self, pid: i32) -> Option<&mut ProcessDescriptor> {
        self.processes.iter_mut().find(|p| p.pid == pid)
    }

    /// True iff at least one descriptor has not reached TERMINATED — the
    /// complement of the condition that triggers shutdown.
    pub fn any_non_terminated(&self) -> bool {
        self.processes.iter().any(|p| !p.is_terminated())
    }

    pub fn any_in_state(&self, state: ProcessState) -> bool {
        self.processes.iter().any(|p| p.state == state)
    }
}
