//! Weighted distances and similarities between dense feature vectors.
//!
//! Core operations: Euclidean distance, Manhattan distance, cosine similarity.
//!
//! # Length Mismatch
//!
//! **Vectors of different lengths are not an error.** Every function compares
//! the first `min(a.len(), b.len())` dimensions and ignores the tail of the
//! longer vector. This keeps compatibility with existing callers, but it also
//! hides caller bugs: a truncated comparison is logged at `trace` level.
//!
//! # Weights
//!
//! `weights` is optional. `None` or an empty slice means every dimension has
//! weight `1.0`. Otherwise the slice must cover every compared dimension and
//! hold finite, non-negative values.
//!
//! | Function | Formula (over `i < min(len(a), len(b))`) |
//! |----------|-----------|
//! | [`euclidean_distance`] | `sqrt(Σ w[i] (a[i] - b[i])²)` |
//! | [`manhattan_distance`] | `Σ w[i] \|a[i] - b[i]\|` |
//! | [`cosine_similarity`] | `Σ w[i]² a[i] b[i] / (sqrt(Σ w[i]² a[i]²) sqrt(Σ w[i]² b[i]²))` |
//!
//! Note that cosine squares the weight while the two distances use it as is.
//! Cosine effectively compares the rescaled vectors `w ⊙ a` and `w ⊙ b`. The
//! two conventions differ from many weighted-cosine definitions, and both are
//! kept exactly as they are for compatibility.

use crate::error::{Error, Result};

/// Number of dimensions compared, with a trace event on truncation.
fn compared_len(a: &[f64], b: &[f64]) -> usize {
    if a.len() != b.len() {
        tracing::trace!(
            a_len = a.len(),
            b_len = b.len(),
            "comparing vectors of different lengths; truncating to the shorter"
        );
    }
    a.len().min(b.len())
}

/// Validate `weights` for an `n`-dimensional comparison.
///
/// Returns `None` for uniform weighting.
fn checked_weights(weights: Option<&[f64]>, n: usize) -> Result<Option<&[f64]>> {
    let w = match weights {
        None => return Ok(None),
        Some(w) if w.is_empty() => return Ok(None),
        Some(w) => w,
    };
    if w.len() < n {
        tracing::debug!(needed = n, got = w.len(), "rejecting short weight vector");
        return Err(Error::WeightsTooShort {
            needed: n,
            got: w.len(),
        });
    }
    if let Some((index, &value)) = w
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        tracing::debug!(index, value, "rejecting weight");
        return Err(Error::InvalidWeight { index, value });
    }
    Ok(Some(&w[..n]))
}

/// Weighted Euclidean distance: `sqrt(Σ w[i] (a[i] - b[i])²)`.
///
/// Returns `0.0` when either vector is empty.
///
/// # Errors
///
/// [`Error::WeightsTooShort`] or [`Error::InvalidWeight`] for bad weights.
///
/// # Example
///
/// ```rust
/// use simil::euclidean_distance;
///
/// let a = [0.0, 0.0];
/// let b = [3.0, 4.0];
/// assert!((euclidean_distance(&a, &b, None).unwrap() - 5.0).abs() < 1e-12);
/// ```
pub fn euclidean_distance(a: &[f64], b: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    let n = compared_len(a, b);
    let (a, b) = (&a[..n], &b[..n]);
    let sum: f64 = match checked_weights(weights, n)? {
        Some(w) => a
            .iter()
            .zip(b)
            .zip(w)
            .map(|((x, y), wi)| {
                let diff = x - y;
                wi * diff * diff
            })
            .sum(),
        None => a
            .iter()
            .zip(b)
            .map(|(x, y)| {
                let diff = x - y;
                diff * diff
            })
            .sum(),
    };
    Ok(sum.sqrt())
}

/// Weighted Manhattan (L1) distance: `Σ w[i] |a[i] - b[i]|`.
///
/// Returns `0.0` when either vector is empty.
///
/// # Errors
///
/// [`Error::WeightsTooShort`] or [`Error::InvalidWeight`] for bad weights.
///
/// # Example
///
/// ```rust
/// use simil::manhattan_distance;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 6.0, 3.0];
/// // |1-4| + |2-6| + |3-3| = 3 + 4 + 0 = 7
/// assert_eq!(manhattan_distance(&a, &b, None).unwrap(), 7.0);
/// ```
pub fn manhattan_distance(a: &[f64], b: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    let n = compared_len(a, b);
    let (a, b) = (&a[..n], &b[..n]);
    let sum: f64 = match checked_weights(weights, n)? {
        Some(w) => a
            .iter()
            .zip(b)
            .zip(w)
            .map(|((x, y), wi)| wi * (x - y).abs())
            .sum(),
        None => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
    };
    Ok(sum)
}

/// Weighted cosine similarity.
///
/// ```text
/// Σ w[i]² a[i] b[i] / (sqrt(Σ w[i]² a[i]²) * sqrt(Σ w[i]² b[i]²))
/// ```
///
/// The weight is squared in every term, unlike the two distances in this
/// module. This is deliberate and must not be "fixed": existing callers rely
/// on it.
///
/// # Result Range
///
/// `[-1, 1]` for valid input. Floating-point error can push the value
/// slightly outside this range; clamp if strict bounds are required.
///
/// # Errors
///
/// - [`Error::ZeroNorm`] if either operand has zero (weighted) norm over the
///   compared dimensions, including the empty case. There is no silent
///   `0.0` fallback.
/// - [`Error::NonFinite`] if a compared component, after weighting, is NaN
///   or infinite.
/// - [`Error::WeightsTooShort`] or [`Error::InvalidWeight`] for bad weights.
///
/// # Numerical Range
///
/// Each operand is divided by its largest absolute weighted component before
/// the sums are formed, so finite inputs anywhere between the smallest
/// subnormal and `f64::MAX` neither overflow nor underflow to a zero norm.
///
/// # Example
///
/// ```rust
/// use simil::{cosine_similarity, Error};
///
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0], None).unwrap(), 1.0);
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0], None).unwrap(), 0.0);
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 0.0], None), Err(Error::ZeroNorm));
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    let n = compared_len(a, b);
    let (a, b) = (&a[..n], &b[..n]);
    let w = checked_weights(weights, n)?;

    let scale_a = max_abs_weighted(a, w)?;
    let scale_b = max_abs_weighted(b, w)?;
    if scale_a == 0.0 || scale_b == 0.0 {
        tracing::debug!(n, "cosine similarity of zero-norm operand");
        return Err(Error::ZeroNorm);
    }

    // After rescaling every component is in [-1, 1] and the largest is
    // exactly +-1, so both sums lie in [1, n].
    let mut cross = 0.0_f64;
    let mut sum_a = 0.0_f64;
    let mut sum_b = 0.0_f64;
    for i in 0..n {
        let wi = w.map_or(1.0, |w| w[i]);
        let x = wi * a[i] / scale_a;
        let y = wi * b[i] / scale_b;
        cross += x * y;
        sum_a += x * x;
        sum_b += y * y;
    }
    Ok(cross / (sum_a.sqrt() * sum_b.sqrt()))
}

/// Largest `|w[i] x[i]|`, rejecting components that are not finite.
fn max_abs_weighted(x: &[f64], w: Option<&[f64]>) -> Result<f64> {
    let mut max = 0.0_f64;
    for (i, &xi) in x.iter().enumerate() {
        let v = w.map_or(1.0, |w| w[i]) * xi;
        if !v.is_finite() {
            tracing::debug!(index = i, value = xi, "rejecting non-finite cosine component");
            return Err(Error::NonFinite("cosine similarity operand"));
        }
        max = max.max(v.abs());
    }
    Ok(max)
}
