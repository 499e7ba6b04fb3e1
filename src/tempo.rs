use std::time::Duration;

use crate::config::TempoConfig;

/// Tick interval in milliseconds for `score`.
///
/// Monotonically non-decreasing in `score` and never above `config.max_ms`.
#[must_use]
pub fn interval_for(score: u32, config: TempoConfig) -> u64 {
    let grown = config
        .start_ms
        .saturating_add(u64::from(score).saturating_mul(config.step_ms));
    grown.min(config.max_ms)
}

/// Tracks the interval currently handed to the scheduler.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Tempo {
    config: TempoConfig,
    current_ms: u64,
}

impl Tempo {
    /// Starts at the interval for a score of zero.
    #[must_use]
    pub fn new(config: TempoConfig) -> Self {
        Self {
            config,
            current_ms: interval_for(0, config),
        }
    }

    /// Recomputes the interval after a score change.
    ///
    /// Returns the new interval only when it differs from the current one, which
    /// is the caller's cue to reschedule.
    pub fn update(&mut self, score: u32) -> Option<u64> {
        let next = interval_for(score, self.config);
        if next == self.current_ms {
            return None;
        }

        self.current_ms = next;
        Some(next)
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.current_ms
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.current_ms)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Level, TempoConfig};

    use super::{interval_for, Tempo};

    #[test]
    fn classic_curve_grows_then_caps() {
        let classic = Level::Classic.tempo();

        assert_eq!(interval_for(0, classic), 80);
        assert_eq!(interval_for(1, classic), 90);
        assert_eq!(interval_for(14, classic), 220);
        assert_eq!(interval_for(50, classic), 220);
    }

    #[test]
    fn huge_scores_saturate_at_max() {
        let config = TempoConfig::new(80, 220, u64::MAX);

        assert_eq!(interval_for(u32::MAX, config), 220);
    }

    #[test]
    fn update_reports_only_changes() {
        let mut tempo = Tempo::new(TempoConfig::new(80, 100, 10));
        assert_eq!(tempo.interval_ms(), 80);

        assert_eq!(tempo.update(1), Some(90));
        assert_eq!(tempo.update(2), Some(100));
        assert_eq!(tempo.update(3), None);
        assert_eq!(tempo.interval_ms(), 100);
    }

    #[test]
    fn zero_step_never_reschedules() {
        let mut tempo = Tempo::new(TempoConfig::new(120, 200, 0));

        for score in 1..20 {
            assert_eq!(tempo.update(score), None);
        }
    }
}
