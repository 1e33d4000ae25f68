// ============================================================
// Layer 3 — Split Ratios
// ============================================================
// The three fractions of a corpus that go to the train, valid
// and test partitions. A SplitRatios value can only be built
// through `SplitRatios::new`, so every instance in the program
// has already passed validation.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed distance between the ratio sum and 1.0
pub const RATIO_TOLERANCE: f64 = 1e-6;

/// Configuration errors, reported before any file is touched.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("train_ratio + valid_ratio + test_ratio must equal 1.0 (got {train} + {valid} + {test} = {sum})")]
    RatioSum {
        train: f64,
        valid: f64,
        test:  f64,
        sum:   f64,
    },

    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidRatio { name: &'static str, value: f64 },
}

/// Validated train/valid/test fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    train: f64,
    valid: f64,
    test:  f64,
}

impl SplitRatios {
    /// Build ratios, rejecting negative or non-finite values and any
    /// triple whose sum is further than `RATIO_TOLERANCE` from 1.0.
    /// The values are never normalised.
    pub fn new(train: f64, valid: f64, test: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("train_ratio", train), ("valid_ratio", valid), ("test_ratio", test)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRatio { name, value });
            }
        }

        let sum = train + valid + test;
        if (sum - 1.0).abs() > RATIO_TOLERANCE {
            return Err(ConfigError::RatioSum { train, valid, test, sum });
        }

        Ok(Self { train, valid, test })
    }

    pub fn train(&self) -> f64 {
        self.train
    }

    pub fn valid(&self) -> f64 {
        self.valid
    }

    pub fn test(&self) -> f64 {
        self.test
    }
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self { train: 0.8, valid: 0.1, test: 0.1 }
    }
}
