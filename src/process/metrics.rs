/*!
metrics.rs - Per-process metrics: state dwell times, preemptions, response
and turnaround time, grounded in `metrica.c` /
`processo.c`'s `atualiza_metricas_processo`.
*/

use crate::process::descriptor::ProcessState;

/// Entry count and accumulated ticks for one lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct StateMetrics {
    pub quantity: u64,
    pub tempo_total: i64,
}

/// Per-process metrics block.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProcessMetrics {
    pub preemptions: u64,
    /// Sum of elapsed ticks while not TERMINATED.
    pub turnaround: i64,
    /// Mean READY-accumulated-time per READY-entry. This is only a true
    /// first-response-latency when there is exactly one READY burst before
    /// first dispatch; otherwise it is a mean-wait.
    pub response: f64,
    pub states: [StateMetrics; 4],
}

impl Default for ProcessMetrics {
    fn default() -> Self {
        Self {
            preemptions: 0,
            turnaround: 0,
            response: 0.0,
            states: [StateMetrics::default(); 4],
        }
    }
}

impl ProcessMetrics {
    /// Applies one elapsed-tick update against `current_state` (the state
    /// the process held during the just-elapsed interval)
    /// ordering guarantee that metrics update precedes any state
    /// transition within the same trap.
    pub fn record_elapsed(&mut self, current_state: ProcessState, elapsed: i64, terminated: bool) {
        if !terminated {
            self.turnaround += elapsed;
        }
        self.states[current_state.index()].tempo_total += elapsed;

        let ready = &self.states[ProcessState::Ready.index()];
        if ready.quantity > 0 {
            self.response = ready.tempo_total as f64 / ready.quantity as f64;
        }
    }

    /// Sum of accumulated ticks across every state.
    pub fn total_accumulated_ticks(&self) -> i64 {
        self.states.iter().map(|s| s.tempo_total).sum()
    }
}
