use std::time::{Duration, Instant};

/// Wall-clock timer for a run. Reporting is opt-in so the quiet path stays
/// silent.
pub struct ExecutionTimer {
    start: Instant,
    enabled: bool,
}

impl ExecutionTimer {
    pub fn new(enabled: bool) -> Self {
        Self {
            start: Instant::now(),
            enabled,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn log_elapsed(&self, phase: &str) {
        if self.enabled {
            tracing::debug!("⏱️ {} completed in {:?}", phase, self.elapsed());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ExecutionTimer {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_elapsed_is_monotonic() {
        let timer = ExecutionTimer::new(true);
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
        assert!(timer.is_enabled());
    }

    #[test]
    fn test_default_timer_is_disabled() {
        assert!(!ExecutionTimer::default().is_enabled());
    }
}
