//! Progress reporting for an evaluation run.

/// Snapshot of evaluation progress (CLI-friendly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalProgress {
    /// URLs whose unit of work has finished (including failures).
    pub urls_done: usize,
    pub urls_total: usize,
    /// Elapsed time since the run started (seconds).
    pub elapsed_secs: f64,
}

impl EvalProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.urls_total == 0 {
            return 1.0;
        }
        (self.urls_done as f64 / self.urls_total as f64).min(1.0)
    }

    /// Throughput in URLs per second (0 if elapsed is 0).
    pub fn urls_per_sec(&self) -> f64 {
        if self.elapsed_secs <= 0.0 {
            return 0.0;
        }
        self.urls_done as f64 / self.elapsed_secs
    }
}
