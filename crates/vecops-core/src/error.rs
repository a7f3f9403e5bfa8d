//! Error types for the vector kernel layer
//!
//! Kernels themselves never fail: length mismatches follow the common-prefix
//! rule and NaN/Inf outcomes are ordinary results. Errors are reserved for
//! construction-time APIs (stride descriptors, backend selection) and the
//! guard-region harness.

use thiserror::Error;

/// Which part of a guarded buffer was overwritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRegion {
    /// Sentinels before the logical extent
    Front,
    /// Sentinels after the logical extent
    Back,
    /// Gap cells between strided elements
    Interior,
}

impl std::fmt::Display for GuardRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardRegion::Front => f.write_str("front"),
            GuardRegion::Back => f.write_str("back"),
            GuardRegion::Interior => f.write_str("interior"),
        }
    }
}

/// Core error type for kernel-layer operations
#[derive(Error, Debug)]
pub enum Error {
    /// Dimension or backing-size relationship violated
    #[error("Shape mismatch in {context}: expected at least {expected} elements, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Structurally invalid size parameter
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Backend not compiled in or not supported by this CPU
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),

    /// A sentinel cell of a guarded buffer was modified
    #[error("Guard violated in {region} region at index {index}")]
    GuardViolation { region: GuardRegion, index: usize },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a buffer too short for the declared extent
    pub fn shape_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::ShapeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for a non-positive stride increment
    pub fn non_positive_increment(inc: isize) -> Self {
        Self::InvalidDimension(format!("increment {inc} must be positive"))
    }
}
