use log::info;
use std::sync::Mutex;

/// Thin wrapper over the `log` facade so engines can record one-line run
/// summaries without caring about the logger backend.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Run/error counters shared by the GUI bridge across request handlers.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

struct Counters {
    runs: usize,
    errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters { runs: 0, errors: 0 }),
        }
    }

    pub fn record_run(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.runs += 1;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.runs, counters.errors)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_counts_runs_and_errors() {
        let metrics = MetricsRecorder::new();
        metrics.record_run();
        metrics.record_run();
        metrics.record_error();
        assert_eq!(metrics.snapshot(), (2, 1));
    }
}
