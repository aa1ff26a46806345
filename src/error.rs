//! Error type shared by the edit-distance and vector-metric entry points.
//!
//! Every failure is detected at the boundary, before any table or
//! accumulator is allocated, and reported synchronously. Nothing here is
//! retryable: the functions are deterministic, so a retry reproduces the
//! same error.

use thiserror::Error;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `simil`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A per-operation cost is negative, NaN, or infinite.
    #[error("invalid {name} cost: {value} (costs must be finite and non-negative)")]
    InvalidCost {
        /// Which operation the cost belongs to (`insert`, `replace`, ...).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A per-dimension weight is negative, NaN, or infinite.
    #[error("invalid weight at dimension {index}: {value} (weights must be finite and non-negative)")]
    InvalidWeight {
        /// Dimension of the offending weight.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A non-empty weight vector does not cover every compared dimension.
    #[error("weight vector too short: {needed} dimensions compared, {got} weights given")]
    WeightsTooShort {
        /// Number of dimensions being compared (the shorter input length).
        needed: usize,
        /// Number of weights supplied.
        got: usize,
    },

    /// Cosine similarity is undefined because an operand has zero (weighted) norm.
    #[error("cosine similarity undefined: operand has zero norm")]
    ZeroNorm,

    /// An input or a computed result is NaN or infinite.
    #[error("non-finite value: {0}")]
    NonFinite(&'static str),

    /// A feature matrix row has a different dimensionality than the first row.
    #[error("ragged feature matrix: row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Dimensionality of row 0.
        expected: usize,
        /// Dimensionality of the offending row.
        got: usize,
    },

    /// Points were to be assigned but the centroid matrix has no rows.
    #[error("cannot assign points: no centroids")]
    NoCentroids,

    /// A metric name could not be parsed.
    #[error("unknown metric: {0} (must be one of euclidean|manhattan|cosine)")]
    UnknownMetric(String),
}
