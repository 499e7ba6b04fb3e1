use crate::game::{GameObserver, Snapshot};

/// Best score seen across runs in this process.
///
/// The engine only reports candidate values; where (or whether) the best
/// score is stored is up to the host.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    /// Starts from a previously known best score.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Records `score`; returns true when it beats the current best.
    pub fn offer(&mut self, score: u32) -> bool {
        if score <= self.value {
            return false;
        }

        self.value = score;
        true
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

impl GameObserver for BestScore {
    fn on_frame(&mut self, _snapshot: &Snapshot<'_>) {}

    fn on_score(&mut self, score: u32) {
        if self.offer(score) {
            log::debug!("new best score {score}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BestScore;

    #[test]
    fn only_higher_scores_replace_the_best() {
        let mut best = BestScore::new(3);

        assert!(!best.offer(2));
        assert!(!best.offer(3));
        assert!(best.offer(4));
        assert_eq!(best.value(), 4);
    }

    #[test]
    fn reset_clears_the_best() {
        let mut best = BestScore::new(12);

        best.reset();

        assert_eq!(best.value(), 0);
        assert!(best.offer(1));
    }
}
