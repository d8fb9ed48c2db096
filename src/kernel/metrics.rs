/*!
metrics.rs - Kernel-wide metrics and the end-of-run text report, grounded
in `metrica.c`'s table layout.

The text report is the human-facing artifact emitted on shutdown;
`KernelMetrics` and `ProcessSnapshot` additionally
derive `serde::Serialize` so tests (and any future machine consumer) can
assert on structured values instead of scraping text.
*/

use std::fmt::Write as _;

use crate::process::{ProcessMetrics, ProcessState, ProcessTable};

/// Global, run-wide counters.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct KernelMetrics {
    pub total_ticks: i64,
    pub idle_ticks: i64,
    /// Indexed by `kernel::irq::IrqCause::index()`.
    pub per_irq_counts: [u64; 6],
    pub preemptions: u64,
}

/// One process's identity plus its metrics block, as emitted in the
/// per-process report table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProcessSnapshot {
    pub pid: i32,
    pub metrics: ProcessMetrics,
}

impl KernelMetrics {
    /// Renders the end-of-run report: a system-metrics table, an
    /// interruptions-by-cause table, and a per-process table, followed by a
    /// per-state summary table aggregated across every process that ever
    /// existed, grounded in `metrica.c`'s `imprime_metricas`.
    pub fn render_report(&self, table: &ProcessTable) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== system metrics ===");
        let _ = writeln!(out, "total_ticks   {}", self.total_ticks);
        let _ = writeln!(out, "idle_ticks    {}", self.idle_ticks);
        let _ = writeln!(out, "preemptions   {}", self.preemptions);
        let _ = writeln!(out);

        let _ = writeln!(out, "=== interruptions ===");
        const IRQ_NAMES: [&str; 6] = [
            "reset", "cpu_error", "syscall", "timer", "reserved4", "reserved5",
        ];
        for (index, name) in IRQ_NAMES.iter().enumerate() {
            let _ = writeln!(out, "{:<10}{}", name, self.per_irq_counts[index]);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "=== per-process metrics ===");
        let _ = writeln!(
            out,
            "{:>5} {:>12} {:>10} {:>10}",
            "pid", "preemptions", "turnaround", "response"
        );
        for process in table.iter() {
            let _ = writeln!(
                out,
                "{:>5} {:>12} {:>10} {:>10.2}",
                process.pid,
                process.metrics.preemptions,
                process.metrics.turnaround,
                process.metrics.response
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "=== per-state totals ===");
        let mut totals = [0u64; 4];
        let mut tempos = [0i64; 4];
        for process in table.iter() {
            for state in ProcessState::ALL {
                totals[state.index()] += process.metrics.states[state.index()].quantity;
                tempos[state.index()] += process.metrics.states[state.index()].tempo_total;
            }
        }
        for state in ProcessState::ALL {
            let _ = writeln!(
                out,
                "{:<10} entries={:<8} ticks={}",
                state.as_str(),
                totals[state.index()],
                tempos[state.index()]
            );
        }
        out
    }

    /// Structured per-process snapshot, for tests that want to assert on
    /// values rather than parse `render_report`'s text.
    pub fn snapshot(table: &ProcessTable) -> Vec<ProcessSnapshot> {
        table
            .iter()
            .map(|p| ProcessSnapshot {
                pid: p.pid,
                metrics: p.metrics.clone(),
            })
            .collect()
    }
}

/// Used by `kernel::entry` to bound a single tick delta: the source trusts
/// the instruction clock to be monotonic and non-decreasing across traps.
pub(crate) fn clamp_elapsed(previous: i64, current: i64) -> i64 {
    (current - previous).max(0)
}
