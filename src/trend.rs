/// Trend classification over the rolling sample history
use std::fmt;

use crate::history::RollingHistory;

/// Direction of the recent temperature movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    /// Human-readable label for display and telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Steady => "steady",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sensitivity settings for the classifier.
///
/// `drift` is the minimum sustained 3-point delta to call a move
/// significant; `jump` is the minimum single-step delta to call a move
/// significant even without sustained direction. Both are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub drift: f32,
    pub jump: f32,
}

impl Thresholds {
    pub fn new(drift: f32, jump: f32) -> Self {
        Self { drift, jump }
    }

    /// Build thresholds from a drift sensitivity alone, defaulting the
    /// jump threshold to twice the drift threshold.
    pub fn from_drift(drift: f32) -> Self {
        Self {
            drift,
            jump: 2.0 * drift,
        }
    }
}

/// Classify the current trend of `history` under `thresholds`.
///
/// Total over every history state and never mutates the history:
/// - empty or single-sample history: `Steady` (nothing to compare)
/// - two samples: the newest-vs-previous delta against the drift
///   threshold decides the direction
/// - full history: a single-step delta at or beyond the jump threshold
///   counts as a sharp move; otherwise the direction must be strictly
///   monotonic across all three samples with the newest-vs-oldest
///   delta at or beyond the drift threshold
pub fn classify(history: &RollingHistory, thresholds: &Thresholds) -> Trend {
    if history.is_empty() {
        return Trend::Steady;
    }

    // Accessors are only reached behind these count checks, so the
    // classifier itself never observes a history error.
    let (newest, previous) = match (history.newest(), history.previous()) {
        (Ok(newest), Ok(previous)) => (newest, previous),
        _ => return Trend::Steady,
    };

    let short_delta = newest - previous;

    if !history.is_full() {
        if short_delta >= thresholds.drift {
            return Trend::Rising;
        }
        if short_delta <= -thresholds.drift {
            return Trend::Falling;
        }
        return Trend::Steady;
    }

    let oldest = match history.oldest() {
        Ok(oldest) => oldest,
        Err(_) => return Trend::Steady,
    };
    let long_delta = newest - oldest;

    let rising_jump = short_delta >= thresholds.jump;
    let rising_drift = oldest < previous && previous < newest && long_delta >= thresholds.drift;
    if rising_jump || rising_drift {
        return Trend::Rising;
    }

    let falling_jump = short_delta <= -thresholds.jump;
    let falling_drift = oldest > previous && previous > newest && long_delta <= -thresholds.drift;
    if falling_jump || falling_drift {
        return Trend::Falling;
    }

    Trend::Steady
}
