//! Run configuration, validation, and error types.
//!
//! [`EnhanceConfig`] is the input for constructing an
//! [`Enhancer`](crate::Enhancer). [`validate()`](EnhanceConfig::validate)
//! checks its invariants once, before the first pass.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnhanceConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `iterations` is zero.
    NoIterations,
    /// `workers` is zero.
    ZeroWorkers,
    /// A checkpoint is zero or past the last pass.
    CheckpointOutOfRange {
        /// The offending checkpoint.
        checkpoint: u32,
        /// The configured number of passes.
        iterations: u32,
    },
    /// Checkpoints are not strictly increasing.
    CheckpointsUnordered {
        /// The earlier entry.
        previous: u32,
        /// The entry that did not exceed it.
        next: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIterations => write!(f, "iterations must be at least 1"),
            Self::ZeroWorkers => write!(f, "workers must be at least 1"),
            Self::CheckpointOutOfRange {
                checkpoint,
                iterations,
            } => write!(
                f,
                "checkpoint {checkpoint} is outside 1..={iterations}"
            ),
            Self::CheckpointsUnordered { previous, next } => write!(
                f,
                "checkpoints must be strictly increasing, got {previous} then {next}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── EnhanceConfig ──────────────────────────────────────────────────

/// Configuration for an enhancement run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnhanceConfig {
    /// Number of passes to run. Default: 50.
    pub iterations: u32,
    /// Generations at which the lit count is recorded. Strictly
    /// increasing, each in `1..=iterations`. Default: `[2, 50]`.
    pub checkpoints: Vec<u32>,
    /// Worker threads per pass. 1 runs on the calling thread. Default: 1.
    pub workers: usize,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            checkpoints: vec![2, 50],
            workers: 1,
        }
    }
}

impl EnhanceConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        for &checkpoint in &self.checkpoints {
            if checkpoint == 0 || checkpoint > self.iterations {
                return Err(ConfigError::CheckpointOutOfRange {
                    checkpoint,
                    iterations: self.iterations,
                });
            }
        }
        for pair in self.checkpoints.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ConfigError::CheckpointsUnordered {
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(())
    }

    /// Whether `generation` is a configured checkpoint.
    pub fn is_checkpoint(&self, generation: u32) -> bool {
        self.checkpoints.contains(&generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EnhanceConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert!(cfg.is_checkpoint(2));
        assert!(cfg.is_checkpoint(50));
        assert!(!cfg.is_checkpoint(3));
    }

    #[test]
    fn zero_iterations_rejected() {
        let cfg = EnhanceConfig {
            iterations: 0,
            checkpoints: vec![],
            ..EnhanceConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoIterations));
    }

    #[test]
    fn zero_workers_rejected() {
        let cfg = EnhanceConfig {
            workers: 0,
            ..EnhanceConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn checkpoint_past_end_rejected() {
        let cfg = EnhanceConfig {
            iterations: 10,
            ..EnhanceConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::CheckpointOutOfRange {
                checkpoint: 50,
                iterations: 10
            })
        );
    }

    #[test]
    fn checkpoint_zero_rejected() {
        let cfg = EnhanceConfig {
            checkpoints: vec![0, 2],
            ..EnhanceConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CheckpointOutOfRange { checkpoint: 0, .. })
        ));
    }

    #[test]
    fn unordered_checkpoints_rejected() {
        let cfg = EnhanceConfig {
            checkpoints: vec![5, 5],
            ..EnhanceConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::CheckpointsUnordered {
                previous: 5,
                next: 5
            })
        );
    }

    #[test]
    fn no_checkpoints_is_valid() {
        let cfg = EnhanceConfig {
            checkpoints: Vec::new(),
            ..EnhanceConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_display() {
        let err = ConfigError::CheckpointOutOfRange {
            checkpoint: 7,
            iterations: 3,
        };
        assert_eq!(err.to_string(), "checkpoint 7 is outside 1..=3");
    }
}
