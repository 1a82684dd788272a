//! Highlighting instrumentation, gated behind the `perf-instrumentation`
//! Cargo feature.
//!
//! `HighlightStats` counts what each `on_edit` call cost:
//!
//! 1. **Edits**: events handled, split into restyles and selection clears
//! 2. **Rescans**: window rescans vs. tail rescans (the expensive path)
//! 3. **Characters classified**: total work done by the classifier
//! 4. **Restyle latency**: P50/P95/P99 over a rolling 1000-sample window

use std::time::Duration;

/// Maximum number of latency samples retained.
const RING_CAP: usize = 1000;

/// Highlighting statistics collector.
#[derive(Debug, Clone, Default)]
pub struct HighlightStats {
    /// Edits that triggered a restyle.
    pub edits: u64,
    /// `(0, 0)` notifications that only cleared the selection.
    pub selection_clears: u64,
    /// Line-window rescans.
    pub window_rescans: u64,
    /// Rescans that ran to the end of the document.
    pub tail_rescans: u64,
    /// Characters passed through the classifier.
    pub chars_classified: u64,
    /// Edits rejected as inconsistent (each followed by a full resync).
    pub range_errors: u64,

    latencies: Vec<Duration>,
    cursor: usize,
}

impl HighlightStats {
    pub fn new() -> Self {
        Self {
            latencies: Vec::with_capacity(RING_CAP),
            ..Self::default()
        }
    }

    /// Records the duration of one `on_edit` call.
    pub fn record_latency(&mut self, elapsed: Duration) {
        if self.latencies.len() < RING_CAP {
            self.latencies.push(elapsed);
        } else {
            self.latencies[self.cursor] = elapsed;
        }
        self.cursor = (self.cursor + 1) % RING_CAP;
    }

    /// Share of restyles that escalated to a tail rescan, in percent.
    pub fn tail_rate(&self) -> f64 {
        if self.window_rescans == 0 {
            0.0
        } else {
            (self.tail_rescans as f64 / self.window_rescans as f64) * 100.0
        }
    }

    /// Formats the current stats into a human-readable report string.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("[hilite perf] {} edits\n", self.edits));
        out.push_str(&format!(
            "  Rescans:               window={}  tail={} ({:.1}%)\n",
            self.window_rescans,
            self.tail_rescans,
            self.tail_rate(),
        ));
        out.push_str(&format!(
            "  Classified:            {} chars\n",
            self.chars_classified
        ));
        out.push_str(&format!(
            "  Selection clears:      {}  range errors: {}\n",
            self.selection_clears, self.range_errors
        ));

        if self.latencies.is_empty() {
            out.push_str("  Restyle latency:       (no data)\n");
        } else {
            let mut sorted = self.latencies.clone();
            sorted.sort();
            out.push_str(&format!(
                "  Restyle latency:       P50={}  P95={}  P99={}\n",
                fmt_duration(percentile(&sorted, 50)),
                fmt_duration(percentile(&sorted, 95)),
                fmt_duration(percentile(&sorted, 99)),
            ));
        }
        out
    }
}

fn percentile(sorted: &[Duration], pct: usize) -> Duration {
    if sorted.is_empty() {
        return Duration::ZERO;
    }
    let idx = (sorted.len() * pct / 100).min(sorted.len() - 1);
    sorted[idx]
}

fn fmt_duration(d: Duration) -> String {
    let us = d.as_micros();
    if us >= 1000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{}µs", us)
    }
}
