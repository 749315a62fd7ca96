use std::sync::Mutex;

/// Counts evaluations and rejected entries across a session.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    evaluations: usize,
    rejections: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                evaluations: 0,
                rejections: 0,
            }),
        }
    }

    pub fn record_evaluation(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.evaluations += 1;
        }
    }

    pub fn record_rejection(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.rejections += 1;
        }
    }

    /// `(evaluations, rejections)`
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.evaluations, metrics.rejections)
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

impl std::fmt::Debug for MetricsRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (evaluations, rejections) = self.snapshot();
        f.debug_struct("MetricsRecorder")
            .field("evaluations", &evaluations)
            .field("rejections", &rejections)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_and_accumulate() {
        let metrics = MetricsRecorder::new();
        assert_eq!(metrics.snapshot(), (0, 0));
        metrics.record_evaluation();
        metrics.record_evaluation();
        metrics.record_rejection();
        assert_eq!(metrics.snapshot(), (2, 1));
    }
}
