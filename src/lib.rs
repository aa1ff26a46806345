//! Edit distances and weighted vector metrics.
//!
//! `simil` provides the comparison primitives that similarity search,
//! spell correction, and clustering pipelines are built from:
//!
//! - **Edit distance**: [`levenshtein`], [`damerau_levenshtein`] over any
//!   `&[T]` with `T: PartialEq`, with per-operation costs in a [`CostModel`]
//! - **Vector metrics**: [`euclidean_distance`], [`manhattan_distance`],
//!   [`cosine_similarity`] with optional per-dimension weights
//! - **Clustering surface**: [`FeatureMatrix`], [`nearest`], [`assign`]
//!
//! Every function is pure and allocates only its own working memory, so all
//! of them can be called concurrently without synchronization.
//!
//! # Errors
//!
//! Invalid costs and weights are rejected before any work is done. Cosine
//! similarity of a zero-norm vector is [`Error::ZeroNorm`], never a silent
//! `0.0` or a NaN, and cosine of a vector holding NaN or infinity is
//! [`Error::NonFinite`]. Finite vectors of any magnitude have a defined
//! cosine. An edit distance whose total cost overflows `f64` is
//! [`Error::NonFinite`] too. Vectors of different lengths are **not** an
//! error: the vector metrics compare the shorter prefix (see [`dense`]).
//!
//! # Historical Context
//!
//! Levenshtein (1965) defined the distance for binary codes with insertions,
//! deletions and reversals; Damerau (1964) had observed that a single
//! adjacent transposition accounts for most human spelling errors. The
//! dynamic-programming formulation is due to Wagner & Fischer (1974).
//!
//! # Example
//!
//! ```rust
//! use simil::{cosine_similarity, damerau_levenshtein_str, euclidean_distance, CostModel};
//!
//! let costs = CostModel::default();
//! assert_eq!(damerau_levenshtein_str("recieve", "receive", &costs).unwrap(), 1.0);
//!
//! let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0], None).unwrap();
//! assert!((d - 5.0).abs() < 1e-12);
//!
//! let c = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0], None).unwrap();
//! assert_eq!(c, 0.0);
//! ```
//!
//! # References
//!
//! - Levenshtein, V.I. (1966). "Binary codes capable of correcting deletions,
//!   insertions, and reversals"
//! - Damerau, F.J. (1964). "A technique for computer detection and correction
//!   of spelling errors"
//! - Wagner, R.A. & Fischer, M.J. (1974). "The String-to-String Correction Problem"

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cluster;
pub mod dense;
pub mod edit;
mod error;
pub mod metric;

pub use cluster::{assign, nearest, FeatureMatrix};
pub use dense::{cosine_similarity, euclidean_distance, manhattan_distance};
pub use edit::{
    damerau_levenshtein, damerau_levenshtein_str, levenshtein, levenshtein_str,
    normalized_levenshtein, CostModel, EditMetric,
};
pub use error::{Error, Result};
pub use metric::{SymmetricMetric, VectorMetric, Weighted};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let costs = CostModel::default();
        let s = ["a", "b", "c"];
        assert_eq!(levenshtein(&s, &s, &costs).unwrap(), 0.0);
        assert_eq!(damerau_levenshtein(&s, &s, &costs).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_sequences() {
        let costs = CostModel::default().with_insert(2.0).with_delete(3.0);
        assert_eq!(levenshtein_str("", "abc", &costs).unwrap(), 6.0);
        assert_eq!(levenshtein_str("abc", "", &costs).unwrap(), 9.0);
    }

    #[test]
    fn test_euclidean() {
        let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0], None).unwrap();
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(
            manhattan_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 3.0], None).unwrap(),
            7.0
        );
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(
            cosine_similarity(&[1.0, 2.0], &[0.0, 0.0], None),
            Err(Error::ZeroNorm)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CostModel::default().with_delete(-1.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid delete cost: -1 (costs must be finite and non-negative)"
        );
        assert_eq!(
            Error::ZeroNorm.to_string(),
            "cosine similarity undefined: operand has zero norm"
        );
        assert_eq!(
            Error::NonFinite("edit distance").to_string(),
            "non-finite value: edit distance"
        );
    }
}
