//! Calculator trait, error type, and algorithm selection.
//!
//! `Calculator` is implemented by both strategies. `Algorithm` is the plain
//! value a caller passes with each request to pick one of them.

use std::fmt;
use std::str::FromStr;

use crate::bignum::{BigNum, BigNumError};
use crate::fastdoubling::FastDoubling;
use crate::linear::LinearAccumulation;

/// Error type for Fibonacci calculations.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The bignum engine failed.
    #[error("engine error: {0}")]
    Engine(#[from] BigNumError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms at F({0})")]
    Mismatch(u64),
}

/// A strategy computing F(n) on top of the bignum engine.
pub trait Calculator: Send + Sync {
    /// Compute F(n).
    fn calculate(&self, n: u64) -> Result<BigNum, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &'static str;
}

/// Selects which strategy computes a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Repeated addition, `n - 2` bignum adds.
    Linear,
    /// Fast doubling, `O(log n)` rounds.
    #[default]
    FastDoubling,
}

impl Algorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Linear, Algorithm::FastDoubling];

    /// Map a front-end selector: `0` is linear, `1` is fast doubling.
    #[must_use]
    pub fn from_selector(selector: u64) -> Option<Self> {
        match selector {
            0 => Some(Self::Linear),
            1 => Some(Self::FastDoubling),
            _ => None,
        }
    }

    /// The selector that maps back to this algorithm.
    #[must_use]
    pub fn selector(self) -> u64 {
        match self {
            Self::Linear => 0,
            Self::FastDoubling => 1,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.calculator().name()
    }

    /// The stateless calculator implementing this algorithm.
    #[must_use]
    pub fn calculator(self) -> &'static dyn Calculator {
        match self {
            Self::Linear => &LinearAccumulation,
            Self::FastDoubling => &FastDoubling,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "dp" => Ok(Self::Linear),
            "fast" | "fastdoubling" | "fast-doubling" => Ok(Self::FastDoubling),
            _ => Err(FibError::Config(format!("unknown algorithm: {s}"))),
        }
    }
}
