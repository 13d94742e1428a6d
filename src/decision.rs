//! Thresholding of the best correlation score.

use crate::search::MatchResult;
use crate::util::{SubImageError, SubImageResult};
use std::fmt;

/// Empirically chosen acceptance threshold for normalized cross-correlation.
pub const DEFAULT_THRESHOLD: f32 = 0.98;

/// Matching configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchConfig {
    /// Minimum best score accepted as a match.
    pub threshold: f32,
    /// Use the parallel correlation kernel when the `rayon` feature is enabled.
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Creates a validated single-threaded configuration.
    pub fn new(threshold: f32) -> SubImageResult<Self> {
        let cfg = Self {
            threshold,
            parallel: false,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that the threshold is finite and within [-1, 1].
    pub fn validate(&self) -> SubImageResult<()> {
        if self.threshold.is_finite() && (-1.0..=1.0).contains(&self.threshold) {
            Ok(())
        } else {
            Err(SubImageError::InvalidThreshold {
                value: self.threshold,
            })
        }
    }

    /// Accepts or rejects a match result.
    pub fn decide(&self, result: MatchResult) -> Decision {
        if result.score >= self.threshold {
            Decision::Found {
                x: result.x,
                y: result.y,
                score: result.score,
            }
        } else {
            Decision::NotFound {
                score: result.score,
            }
        }
    }
}

/// Outcome of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// Top-left corner of the query within the search image.
    Found { x: u32, y: u32, score: f32 },
    /// Best score stayed below the threshold.
    NotFound { score: f32 },
}

impl Decision {
    /// Returns the match location, or `(-1, -1)` if nothing was accepted.
    pub fn location(&self) -> (i64, i64) {
        match *self {
            Decision::Found { x, y, .. } => (i64::from(x), i64::from(y)),
            Decision::NotFound { .. } => (-1, -1),
        }
    }

    /// Returns the best score seen, whether or not it was accepted.
    pub fn score(&self) -> f32 {
        match *self {
            Decision::Found { score, .. } | Decision::NotFound { score } => score,
        }
    }

    /// Returns true for [`Decision::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Decision::Found { .. })
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.location();
        write!(f, "{x},{y}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Decision, MatchConfig, DEFAULT_THRESHOLD};
    use crate::search::MatchResult;
    use crate::util::SubImageError;

    fn result(score: f32) -> MatchResult {
        MatchResult { x: 12, y: 7, score }
    }

    #[test]
    fn threshold_is_inclusive() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);

        let found = cfg.decide(result(DEFAULT_THRESHOLD));
        assert!(found.is_found());
        assert_eq!(found.to_string(), "12,7");

        let missed = cfg.decide(result(0.9799));
        assert_eq!(missed, Decision::NotFound { score: 0.9799 });
        assert_eq!(missed.to_string(), "-1,-1");
    }

    #[test]
    fn no_finite_score_is_never_found() {
        let cfg = MatchConfig::new(-1.0).unwrap();
        let decision = cfg.decide(result(f32::NEG_INFINITY));
        assert_eq!(decision.location(), (-1, -1));
    }

    #[test]
    fn out_of_range_thresholds_are_rejected() {
        for value in [1.5, -1.01, f32::NAN, f32::INFINITY] {
            match MatchConfig::new(value) {
                Err(SubImageError::InvalidThreshold { .. }) => {}
                other => panic!("threshold {value} accepted: {other:?}"),
            }
        }
        assert!(MatchConfig::new(1.0).is_ok());
    }
}
