//! Error types for the relevance engine
//!
//! Well-formed inputs never fail: malformed items, unknown business types and
//! unparseable timestamps all degrade to lower scores or default branches.
//! The only errors this crate produces are caller contract violations caught
//! when an engine is constructed from an invalid configuration.

use thiserror::Error;

/// Relevance engine errors
#[derive(Debug, Error)]
pub enum RelevanceError {
    #[error("scoring weight `{name}` must lie in [0, 1], got {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("scoring weights sum to {sum}, which exceeds 1.0")]
    WeightSumExceeded { sum: f64 },

    #[error(
        "tier thresholds must satisfy 0 < low < medium < high <= 1 \
         (got high={high}, medium={medium}, low={low})"
    )]
    ThresholdsNotOrdered { high: f64, medium: f64, low: f64 },

    #[error("selection cap `{name}` must be at least 1")]
    CapIsZero { name: &'static str },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RelevanceError>;
