//! Metric trait surface and a configurable vector-metric selector.
//!
//! Clustering and nearest-neighbor code is written against
//! [`SymmetricMetric`], so it never needs to know which distance it runs on.
//! [`VectorMetric`] is the concrete choice, parseable from configuration.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dense::{cosine_similarity, euclidean_distance, manhattan_distance};
use crate::error::{Error, Result};

/// A symmetric distance metric.
///
/// This is an interface only; implementations decide their own numeric
/// behavior, including how they signal undefined distances.
pub trait SymmetricMetric<T> {
    /// Compute the (symmetric) distance between `a` and `b`.
    fn distance(&self, a: &[T], b: &[T]) -> T;
}

/// Which vector distance to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VectorMetric {
    /// [`euclidean_distance`].
    #[default]
    Euclidean,
    /// [`manhattan_distance`].
    Manhattan,
    /// Cosine distance, `1 - cosine_similarity`.
    Cosine,
}

impl VectorMetric {
    /// Distance between `a` and `b` under this metric.
    ///
    /// For [`VectorMetric::Cosine`] this is `1 - similarity`, in `[0, 2]`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying function returns: bad weights,
    /// [`Error::ZeroNorm`] for cosine on a zero vector, or
    /// [`Error::NonFinite`] for cosine on a NaN or infinite component.
    pub fn try_distance(&self, a: &[f64], b: &[f64], weights: Option<&[f64]>) -> Result<f64> {
        match self {
            Self::Euclidean => euclidean_distance(a, b, weights),
            Self::Manhattan => manhattan_distance(a, b, weights),
            Self::Cosine => cosine_similarity(a, b, weights).map(|s| 1.0 - s),
        }
    }

    /// Bind a weight vector to this metric.
    #[must_use]
    pub fn weighted(self, weights: &[f64]) -> Weighted<'_> {
        Weighted {
            metric: self,
            weights,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
            Self::Cosine => "cosine",
        }
    }
}

/// Any error from [`VectorMetric::try_distance`] comes back as `f64::NAN`:
/// cosine on a zero-norm operand, or cosine on a NaN or infinite component.
/// Use [`VectorMetric::try_distance`] to get the error instead.
impl SymmetricMetric<f64> for VectorMetric {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self.try_distance(a, b, None).unwrap_or(f64::NAN)
    }
}

impl fmt::Display for VectorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VectorMetric {
    type Err = Error;

    /// Parse a string to a `VectorMetric`.
    ///
    /// Accepts `"euclidean" | "manhattan" | "cosine"`, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            "cosine" => Ok(Self::Cosine),
            _ => Err(Error::UnknownMetric(s.to_string())),
        }
    }
}

/// A [`VectorMetric`] with per-dimension weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted<'w> {
    /// The underlying metric.
    pub metric: VectorMetric,
    /// One weight per compared dimension.
    pub weights: &'w [f64],
}

impl Weighted<'_> {
    /// Weighted distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Same as [`VectorMetric::try_distance`].
    pub fn try_distance(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        self.metric.try_distance(a, b, Some(self.weights))
    }
}

/// Any error from [`Weighted::try_distance`] comes back as `f64::NAN`:
/// short or invalid weights, cosine on a zero-norm operand, or cosine on a
/// NaN or infinite weighted component. Use [`Weighted::try_distance`] to get
/// the error instead.
impl SymmetricMetric<f64> for Weighted<'_> {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self.try_distance(a, b).unwrap_or(f64::NAN)
    }
}
