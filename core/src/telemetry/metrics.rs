use std::sync::Mutex;

/// Counts accepted and rejected submissions for the current session.
pub struct MetricsRecorder {
    inner: Mutex<Counters>,
}

struct Counters {
    accepted: usize,
    rejected: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters {
                accepted: 0,
                rejected: 0,
            }),
        }
    }

    pub fn record_accepted(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.accepted += 1;
        }
    }

    pub fn record_rejected(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.rejected += 1;
        }
    }

    /// Returns (accepted, rejected).
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(counters) = self.inner.lock() {
            (counters.accepted, counters.rejected)
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
    fn counters_track_both_outcomes() {
        let metrics = MetricsRecorder::new();
        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected();
        assert_eq!(metrics.snapshot(), (2, 1));
    }
}
