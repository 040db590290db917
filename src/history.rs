/// Rolling history of the most recent temperature samples
use thiserror::Error;

/// Number of samples the history retains.
///
/// Three samples is the minimum needed to tell a short-term move
/// (newest vs. previous) apart from a sustained one (oldest through
/// newest), which is exactly what the trend classifier compares.
pub const CAPACITY: usize = 3;

/// Error returned by history accessors when the requested sample has
/// not been pushed yet.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history is empty")]
    EmptyHistory,
    #[error("history holds {held} sample(s), {needed} required")]
    InsufficientHistory { held: usize, needed: usize },
}

/// Fixed-capacity buffer of the most recent samples (no heap growth).
///
/// Samples are stored oldest-first. Once the buffer is full, every
/// `push` evicts the oldest sample, so the buffer always holds the
/// `CAPACITY` most recently pushed values in chronological order.
#[derive(Debug, Clone, Default)]
pub struct RollingHistory {
    values: [f32; CAPACITY],
    count: usize,
}

impl RollingHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, evicting the oldest one if the buffer is full.
    ///
    /// Always succeeds; the buffer never grows beyond `CAPACITY`.
    pub fn push(&mut self, sample: f32) {
        if self.count < CAPACITY {
            self.values[self.count] = sample;
            self.count += 1;
        } else {
            // Shift everything one slot toward oldest, dropping slot 0.
            for i in 1..CAPACITY {
                self.values[i - 1] = self.values[i];
            }
            self.values[CAPACITY - 1] = sample;
        }
    }

    /// The most recently pushed sample.
    pub fn newest(&self) -> Result<f32, HistoryError> {
        if self.count == 0 {
            return Err(HistoryError::EmptyHistory);
        }
        Ok(self.values[self.count - 1])
    }

    /// The second-most-recent sample.
    ///
    /// Requires at least two samples; fails with `InsufficientHistory`
    /// otherwise (there is no implicit zero for a missing slot).
    pub fn previous(&self) -> Result<f32, HistoryError> {
        if self.count < 2 {
            return Err(HistoryError::InsufficientHistory {
                held: self.count,
                needed: 2,
            });
        }
        Ok(self.values[self.count - 2])
    }

    /// The least-recent sample still held.
    ///
    /// Once eviction has occurred this is not the first sample ever
    /// seen. Callers that need a full 3-sample window must check
    /// `is_full()` first; with a single sample held, oldest == newest.
    pub fn oldest(&self) -> Result<f32, HistoryError> {
        if self.count == 0 {
            return Err(HistoryError::EmptyHistory);
        }
        Ok(self.values[0])
    }

    /// Number of samples currently held (0..=CAPACITY).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = RollingHistory::new();
        assert!(history.is_empty());
        assert!(!history.is_full());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn accessors_fail_on_empty_history() {
        let history = RollingHistory::new();
        assert_eq!(history.newest(), Err(HistoryError::EmptyHistory));
        assert_eq!(history.oldest(), Err(HistoryError::EmptyHistory));
        assert_eq!(
            history.previous(),
            Err(HistoryError::InsufficientHistory { held: 0, needed: 2 })
        );
    }

    #[test]
    fn previous_requires_two_samples() {
        let mut history = RollingHistory::new();
        history.push(21.5);
        assert_eq!(
            history.previous(),
            Err(HistoryError::InsufficientHistory { held: 1, needed: 2 })
        );
    }

    #[test]
    fn single_sample_is_both_newest_and_oldest() {
        let mut history = RollingHistory::new();
        history.push(21.5);
        assert_eq!(history.newest(), Ok(21.5));
        assert_eq!(history.oldest(), Ok(21.5));
        assert_eq!(history.len(), 1);
        assert!(!history.is_full());
    }

    #[test]
    fn fills_in_chronological_order() {
        let mut history = RollingHistory::new();
        history.push(1.0);
        history.push(2.0);
        history.push(3.0);
        assert!(history.is_full());
        assert_eq!(history.oldest(), Ok(1.0));
        assert_eq!(history.previous(), Ok(2.0));
        assert_eq!(history.newest(), Ok(3.0));
    }

    #[test]
    fn fourth_push_evicts_first_sample() {
        let mut history = RollingHistory::new();
        for sample in [1.0, 2.0, 3.0, 4.0] {
            history.push(sample);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.oldest(), Ok(2.0));
        assert_eq!(history.previous(), Ok(3.0));
        assert_eq!(history.newest(), Ok(4.0));
    }

    #[test]
    fn holds_exactly_three_most_recent_samples() {
        let mut history = RollingHistory::new();
        for sample in [5.0, 6.0, 7.0, 8.0, 9.0, 10.0] {
            history.push(sample);
        }
        assert_eq!(history.oldest(), Ok(8.0));
        assert_eq!(history.previous(), Ok(9.0));
        assert_eq!(history.newest(), Ok(10.0));
    }

    #[test]
    fn accessors_do_not_mutate_state() {
        let mut history = RollingHistory::new();
        history.push(4.0);
        history.push(5.0);

        let first = (history.newest(), history.previous(), history.len());
        let second = (history.newest(), history.previous(), history.len());
        assert_eq!(first, second);
        assert!(!history.is_full());
        assert!(!history.is_empty());
    }
}
