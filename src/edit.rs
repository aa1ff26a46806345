//! Weighted edit distances over arbitrary sequences.
//!
//! Both algorithms work on `&[T]` for any `T: PartialEq`, so the same body
//! serves characters, bytes, and opaque tokens. Element-type mismatches are
//! impossible by construction: `src` and `dst` share one `T`.
//!
//! # Recurrence
//!
//! ```text
//! d[0][j] = j * insert
//! d[i][0] = i * delete
//! d[i][j] = min(d[i-1][j]   + delete,
//!               d[i][j-1]   + insert,
//!               d[i-1][j-1] + (0 if src[i-1] == dst[j-1] else replace))
//! ```
//!
//! Damerau–Levenshtein adds one option when the last two elements are swapped
//! between the sequences (`src[i-1] == dst[j-2] && src[i-2] == dst[j-1]`):
//!
//! ```text
//! d[i][j] = min(d[i][j], d[i-2][j-2] + transpose)
//! ```
//!
//! This is the *restricted* variant (optimal string alignment): only adjacent
//! swaps are recognized, and a swapped pair is never edited again.
//!
//! # Complexity
//!
//! | Function | Time | Auxiliary space |
//! |----------|------|-----------------|
//! | [`levenshtein`] | O(n·m) | O(min(n, m)), two rows |
//! | [`damerau_levenshtein`] | O(n·m) | O(m), three rows |
//!
//! Neither algorithm has an early exit. Callers comparing very long sequences
//! should bound input size before calling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Per-operation costs for edit distances.
///
/// All costs default to `1.0`. A model is validated on every call and never
/// mutated by the algorithms.
///
/// # Example
///
/// ```rust
/// use simil::CostModel;
///
/// let costs = CostModel::default().with_replace(2.0);
/// assert_eq!(costs.insert, 1.0);
/// assert_eq!(costs.replace, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostModel {
    /// Cost of inserting one element of `dst`.
    pub insert: f64,
    /// Cost of replacing one element with a different one.
    pub replace: f64,
    /// Cost of deleting one element of `src`.
    pub delete: f64,
    /// Cost of swapping two adjacent elements (Damerau–Levenshtein only).
    pub transpose: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

impl CostModel {
    /// Every operation costs `cost`.
    #[must_use]
    pub const fn uniform(cost: f64) -> Self {
        Self {
            insert: cost,
            replace: cost,
            delete: cost,
            transpose: cost,
        }
    }

    /// Set the insertion cost.
    #[must_use]
    pub fn with_insert(mut self, cost: f64) -> Self {
        self.insert = cost;
        self
    }

    /// Set the replacement cost.
    #[must_use]
    pub fn with_replace(mut self, cost: f64) -> Self {
        self.replace = cost;
        self
    }

    /// Set the deletion cost.
    #[must_use]
    pub fn with_delete(mut self, cost: f64) -> Self {
        self.delete = cost;
        self
    }

    /// Set the adjacent-transposition cost.
    #[must_use]
    pub fn with_transpose(mut self, cost: f64) -> Self {
        self.transpose = cost;
        self
    }

    /// The same model with insertion and deletion exchanged.
    ///
    /// `d(src, dst, costs) == d(dst, src, costs.reversed())` for both
    /// algorithms in this module.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            insert: self.delete,
            delete: self.insert,
            ..self
        }
    }

    /// Check that every cost is finite and non-negative.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCost`] naming the first offending operation.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("insert", self.insert),
            ("replace", self.replace),
            ("delete", self.delete),
            ("transpose", self.transpose),
        ] {
            if !value.is_finite() || value < 0.0 {
                tracing::debug!(name, value, "rejecting edit cost");
                return Err(Error::InvalidCost { name, value });
            }
        }
        Ok(())
    }
}

/// Weighted Levenshtein distance from `src` to `dst`.
///
/// Returns the minimum total cost of single-element insertions, deletions
/// and replacements turning `src` into `dst`. Replacing an element with an
/// equal one costs nothing.
///
/// Empty inputs: `len(dst) * insert` if `src` is empty, `len(src) * delete`
/// if `dst` is empty, `0.0` if both are.
///
/// # Errors
///
/// - [`Error::InvalidCost`] if any cost in `costs` is negative or non-finite.
/// - [`Error::NonFinite`] if the total cost overflows `f64`. Each cost is
///   finite on its own, but a sum of large ones (e.g. `1e308`) need not be.
///
/// # Example
///
/// ```rust
/// use simil::{levenshtein, CostModel};
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein(&a, &b, &CostModel::default()).unwrap(), 3.0);
/// ```
pub fn levenshtein<T: PartialEq>(src: &[T], dst: &[T], costs: &CostModel) -> Result<f64> {
    costs.validate()?;
    finite_total(levenshtein_rows(
        src,
        dst,
        costs.insert,
        costs.replace,
        costs.delete,
    ))
}

/// Reject a total cost that overflowed.
fn finite_total(total: f64) -> Result<f64> {
    if total.is_finite() {
        Ok(total)
    } else {
        tracing::debug!(total, "edit distance overflowed");
        Err(Error::NonFinite("edit distance"))
    }
}

/// Two-row Levenshtein. Costs are assumed valid.
fn levenshtein_rows<T: PartialEq>(
    src: &[T],
    dst: &[T],
    insert: f64,
    replace: f64,
    delete: f64,
) -> f64 {
    if src.is_empty() {
        return dst.len() as f64 * insert;
    }
    if dst.is_empty() {
        return src.len() as f64 * delete;
    }

    // Keep the shorter sequence in the row buffer. Swapping the roles of the
    // sequences swaps the roles of insertion and deletion.
    if dst.len() > src.len() {
        return levenshtein_rows(dst, src, delete, replace, insert);
    }

    let mut prev: Vec<f64> = (0..=dst.len()).map(|j| j as f64 * insert).collect();
    let mut curr = vec![0.0_f64; dst.len() + 1];

    for (i, s) in src.iter().enumerate() {
        curr[0] = (i + 1) as f64 * delete;
        for (j, d) in dst.iter().enumerate() {
            let sub = if s == d { 0.0 } else { replace };
            curr[j + 1] = (prev[j + 1] + delete)
                .min(curr[j] + insert)
                .min(prev[j] + sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[dst.len()]
}

/// Weighted restricted Damerau–Levenshtein distance from `src` to `dst`.
///
/// Like [`levenshtein`], plus swapping two adjacent elements at cost
/// `costs.transpose`. Non-adjacent transpositions are not detected, and a
/// transposed pair is not edited further: `"ca" -> "abc"` costs 3, not 2.
///
/// # Errors
///
/// - [`Error::InvalidCost`] if any cost in `costs` is negative or non-finite.
/// - [`Error::NonFinite`] if the total cost overflows `f64`. Each cost is
///   finite on its own, but a sum of large ones (e.g. `1e308`) need not be.
///
/// # Example
///
/// ```rust
/// use simil::{damerau_levenshtein, levenshtein, CostModel};
///
/// let costs = CostModel::default();
/// assert_eq!(damerau_levenshtein(b"ca", b"ac", &costs).unwrap(), 1.0);
/// assert_eq!(levenshtein(b"ca", b"ac", &costs).unwrap(), 2.0);
/// ```
pub fn damerau_levenshtein<T: PartialEq>(
    src: &[T],
    dst: &[T],
    costs: &CostModel,
) -> Result<f64> {
    costs.validate()?;
    finite_total(damerau_rows(src, dst, costs))
}

/// Three-row restricted Damerau–Levenshtein. Costs are assumed valid.
fn damerau_rows<T: PartialEq>(src: &[T], dst: &[T], costs: &CostModel) -> f64 {
    if src.is_empty() {
        return dst.len() as f64 * costs.insert;
    }
    if dst.is_empty() {
        return src.len() as f64 * costs.delete;
    }

    let n = dst.len();
    // Rows i-2, i-1 and i of the full table.
    let mut two_back = vec![0.0_f64; n + 1];
    let mut prev: Vec<f64> = (0..=n).map(|j| j as f64 * costs.insert).collect();
    let mut curr = vec![0.0_f64; n + 1];

    for i in 1..=src.len() {
        let s = &src[i - 1];
        curr[0] = i as f64 * costs.delete;
        for j in 1..=n {
            let d = &dst[j - 1];
            let sub = if s == d { 0.0 } else { costs.replace };
            let mut best = (prev[j] + costs.delete)
                .min(curr[j - 1] + costs.insert)
                .min(prev[j - 1] + sub);
            if i > 1 && j > 1 && *s == dst[j - 2] && src[i - 2] == *d {
                best = best.min(two_back[j - 2] + costs.transpose);
            }
            curr[j] = best;
        }
        // two_back <- prev, prev <- curr; the stale row becomes scratch.
        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// [`levenshtein`] over the `char`s of two strings.
///
/// # Errors
///
/// Same as [`levenshtein`].
pub fn levenshtein_str(src: &str, dst: &str, costs: &CostModel) -> Result<f64> {
    let src: Vec<char> = src.chars().collect();
    let dst: Vec<char> = dst.chars().collect();
    levenshtein(&src, &dst, costs)
}

/// [`damerau_levenshtein`] over the `char`s of two strings.
///
/// # Errors
///
/// Same as [`damerau_levenshtein`].
pub fn damerau_levenshtein_str(src: &str, dst: &str, costs: &CostModel) -> Result<f64> {
    let src: Vec<char> = src.chars().collect();
    let dst: Vec<char> = dst.chars().collect();
    damerau_levenshtein(&src, &dst, costs)
}

/// Unit-cost Levenshtein distance divided by the longer length.
///
/// Result is in `[0, 1]`; two empty sequences give `0.0`. Handy as a
/// length-independent threshold for spell correction.
///
/// ```rust
/// use simil::normalized_levenshtein;
///
/// assert_eq!(normalized_levenshtein(b"abcd", b"abcx"), 0.25);
/// ```
#[must_use]
pub fn normalized_levenshtein<T: PartialEq>(src: &[T], dst: &[T]) -> f64 {
    let longest = src.len().max(dst.len());
    if longest == 0 {
        return 0.0;
    }
    levenshtein_rows(src, dst, 1.0, 1.0, 1.0) / longest as f64
}

/// An edit-distance algorithm paired with its cost model.
///
/// Lets pipelines choose the algorithm from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EditMetric {
    /// Insert, delete, replace.
    Levenshtein(CostModel),
    /// Insert, delete, replace, adjacent transposition.
    DamerauLevenshtein(CostModel),
}

impl Default for EditMetric {
    fn default() -> Self {
        Self::Levenshtein(CostModel::default())
    }
}

impl EditMetric {
    /// Edit distance from `src` to `dst` under this algorithm and its costs.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCost`] if the cost model is invalid.
    pub fn distance<T: PartialEq>(&self, src: &[T], dst: &[T]) -> Result<f64> {
        match self {
            Self::Levenshtein(costs) => levenshtein(src, dst, costs),
            Self::DamerauLevenshtein(costs) => damerau_levenshtein(src, dst, costs),
        }
    }

    /// The cost model in use.
    #[must_use]
    pub const fn costs(&self) -> &CostModel {
        match self {
            Self::Levenshtein(costs) | Self::DamerauLevenshtein(costs) => costs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_kitten_sitting() {
        let d = levenshtein(&chars("kitten"), &chars("sitting"), &CostModel::default()).unwrap();
        assert_eq!(d, 3.0);
    }

    #[test]
    fn test_empty_inputs() {
        let costs = CostModel::default().with_insert(2.0).with_delete(0.5);
        let abc = chars("abc");
        let empty: Vec<char> = Vec::new();

        assert_eq!(levenshtein(&empty, &abc, &costs).unwrap(), 6.0);
        assert_eq!(levenshtein(&abc, &empty, &costs).unwrap(), 1.5);
        assert_eq!(levenshtein(&empty, &empty, &costs).unwrap(), 0.0);

        assert_eq!(damerau_levenshtein(&empty, &abc, &costs).unwrap(), 6.0);
        assert_eq!(damerau_levenshtein(&abc, &empty, &costs).unwrap(), 1.5);
        assert_eq!(damerau_levenshtein(&empty, &empty, &costs).unwrap(), 0.0);
    }

    #[test]
    fn test_transposition() {
        let costs = CostModel::default();
        assert_eq!(damerau_levenshtein(b"ca", b"ac", &costs).unwrap(), 1.0);
        assert_eq!(levenshtein(b"ca", b"ac", &costs).unwrap(), 2.0);
    }

    #[test]
    fn test_restricted_variant() {
        // The unrestricted variant would give 2 (swap, then insert between).
        let costs = CostModel::default();
        assert_eq!(damerau_levenshtein(b"ca", b"abc", &costs).unwrap(), 3.0);
    }

    #[test]
    fn test_transposition_cost_applies() {
        let costs = CostModel::default().with_transpose(1.5);
        assert_eq!(damerau_levenshtein(b"ab", b"ba", &costs).unwrap(), 1.5);

        // Two replacements are cheaper than an expensive swap.
        let costs = CostModel::default().with_transpose(5.0);
        assert_eq!(damerau_levenshtein(b"ab", b"ba", &costs).unwrap(), 2.0);
    }

    #[test]
    fn test_replace_more_expensive_than_delete_insert() {
        // Replacement at 3 loses to delete+insert at 2.
        let costs = CostModel::default().with_replace(3.0);
        assert_eq!(levenshtein(b"a", b"b", &costs).unwrap(), 2.0);
    }

    #[test]
    fn test_asymmetric_costs() {
        let costs = CostModel::default().with_insert(2.0).with_delete(1.0);
        // "ab" -> "abc": one insertion.
        assert_eq!(levenshtein(b"ab", b"abc", &costs).unwrap(), 2.0);
        // "abc" -> "ab": one deletion.
        assert_eq!(levenshtein(b"abc", b"ab", &costs).unwrap(), 1.0);
        assert_eq!(
            levenshtein(b"abc", b"ab", &costs).unwrap(),
            levenshtein(b"ab", b"abc", &costs.reversed()).unwrap()
        );
    }

    #[test]
    fn test_tokens() {
        let src = ["the", "quick", "brown", "fox"];
        let dst = ["the", "brown", "quick", "fox"];
        let costs = CostModel::default();
        assert_eq!(levenshtein(&src, &dst, &costs).unwrap(), 2.0);
        assert_eq!(damerau_levenshtein(&src, &dst, &costs).unwrap(), 1.0);
    }

    #[test]
    fn test_str_helpers_use_chars() {
        let costs = CostModel::default();
        // One char, two bytes.
        assert_eq!(levenshtein_str("café", "cafe", &costs).unwrap(), 1.0);
        assert_eq!(damerau_levenshtein_str("teh", "the", &costs).unwrap(), 1.0);
    }

    #[test]
    fn test_rejects_invalid_costs() {
        let bad = [
            CostModel::default().with_insert(-1.0),
            CostModel::default().with_replace(f64::NAN),
            CostModel::default().with_delete(f64::INFINITY),
            CostModel::default().with_transpose(-0.5),
        ];
        for costs in bad {
            assert!(matches!(
                levenshtein(b"a", b"b", &costs),
                Err(Error::InvalidCost { .. })
            ));
            assert!(matches!(
                damerau_levenshtein(b"a", b"b", &costs),
                Err(Error::InvalidCost { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_before_empty_shortcut() {
        let costs = CostModel::default().with_insert(f64::NAN);
        let empty: [u8; 0] = [];
        assert!(matches!(
            levenshtein(&empty, b"abc", &costs),
            Err(Error::InvalidCost { name: "insert", .. })
        ));
        assert!(matches!(
            damerau_levenshtein(&empty, b"abc", &costs),
            Err(Error::InvalidCost { name: "insert", .. })
        ));
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let costs = CostModel::default().with_delete(1e308);
        let empty: [u8; 0] = [];
        assert_eq!(
            levenshtein(b"ab", &empty, &costs),
            Err(Error::NonFinite("edit distance"))
        );
        assert_eq!(
            damerau_levenshtein(b"ab", &empty, &costs),
            Err(Error::NonFinite("edit distance"))
        );

        let costs = CostModel::uniform(1e308);
        assert_eq!(
            levenshtein(b"ab", b"xy", &costs),
            Err(Error::NonFinite("edit distance"))
        );
        assert_eq!(
            damerau_levenshtein(b"ab", b"xy", &costs),
            Err(Error::NonFinite("edit distance"))
        );
    }

    #[test]
    fn test_large_cost_avoided_by_cheaper_path() {
        // A single huge cost is fine when the optimal path never takes it.
        let costs = CostModel::default().with_replace(1e308).with_transpose(1e308);
        assert_eq!(levenshtein(b"aa", b"bb", &costs).unwrap(), 4.0);
        assert_eq!(damerau_levenshtein(b"ab", b"ba", &costs).unwrap(), 2.0);
    }

    #[test]
    fn test_zero_costs() {
        let costs = CostModel::uniform(0.0);
        assert_eq!(levenshtein(b"abc", b"xyz", &costs).unwrap(), 0.0);
        assert_eq!(damerau_levenshtein(b"abc", b"xyz", &costs).unwrap(), 0.0);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(normalized_levenshtein::<u8>(&[], &[]), 0.0);
        assert_eq!(normalized_levenshtein(b"abc", b""), 1.0);
        assert_eq!(normalized_levenshtein(b"abcd", b"abcx"), 0.25);
    }

    #[test]
    fn test_edit_metric_dispatch() {
        let lev = EditMetric::default();
        let dl = EditMetric::DamerauLevenshtein(CostModel::default());
        assert_eq!(lev.distance(b"ca", b"ac").unwrap(), 2.0);
        assert_eq!(dl.distance(b"ca", b"ac").unwrap(), 1.0);
        assert_eq!(dl.costs(), &CostModel::default());
    }
}
