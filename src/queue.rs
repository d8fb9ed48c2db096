/*!
queue.rs - Ready queue: an ordered sequence of READY pids.

The queue owns only its own link nodes, never descriptors — descriptors
live in `ProcessTable`. It is therefore keyed by
pid, not by descriptor reference; `remove_min_priority` takes a
priority-lookup closure supplied by the caller (the scheduler, which has a
`&ProcessTable` in hand) rather than owning a copy of the priority itself.
A descriptor's priority can change while it sits in other data (the
outgoing runner), but never while it is actually enqueued here, so
a flat `Vec` with a linear min-scan is sufficient and matches the source's
observable tie-breaking: insertion order wins ties.
*/

/// FIFO-ordered queue of READY pids, plus O(n) priority-minimum removal.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    pids: Vec<i32>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self { pids: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pids.len()
    }

    pub fn contains(&self, pid: i32) -> bool {
        self.pids.contains(&pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &i32> {
        self.pids.iter()
    }

    /// Appends `pid` at the tail in O(1).
    pub fn enqueue_tail(&mut self, pid: i32) {
        self.pids.push(pid);
    }

    /// Pops the head (oldest-enqueued) pid, for FIFO and round-robin.
    pub fn remove_head(&mut self) -> Option<i32> {
        if self.pids.is_empty() {
            None
        } else {
            Some(self.pids.remove(0))
        }
    }

    /// Scans linearly and removes the pid with numerically smallest
    /// priority, as reported by `priority_of`. Ties go to the
    /// earliest-enqueued entry (scan order), matching the source.
    pub fn remove_min_priority(&mut self, priority_of: impl Fn(i32) -> f64) -> Option<i32> {
        if self.pids.is_empty() {
            return None;
        }
        let mut best_index = 0;
        let mut best_priority = priority_of(self.pids[0]);
        for (index, &pid) in self.pids.iter().enumerate().skip(1) {
            let priority = priority_of(pid);
            if priority < best_priority {
                best_priority = priority;
                best_index = index;
            }
        }
        Some(self.pids.remove(best_index))
    }

    /// Removes a specific pid (used by KILL), scanning linearly. A no-op if
    /// the pid is not enqueued.
    pub fn remove_pid(&mut self, pid: i32) {
        self.pids.retain(|&p| p != pid);
    }
}
