//! Feature matrices and nearest-centroid assignment.
//!
//! This is the surface a clustering routine (k-means and friends) builds on:
//! a validated row-major matrix of feature vectors, and the assignment step
//! that maps each point to its closest centroid under a [`VectorMetric`].
//! Centroid updates and iteration policy belong to the caller.

use std::slice::Chunks;

use crate::error::{Error, Result};
use crate::metric::{SymmetricMetric, VectorMetric};

/// A matrix of feature vectors, all of the same dimensionality.
///
/// Stored as a flat vector in row-first order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureMatrix {
    ncols: usize,
    nrows: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Build a matrix from a list of rows.
    ///
    /// An empty list gives an empty matrix with zero columns.
    ///
    /// # Errors
    ///
    /// [`Error::RaggedMatrix`] if any row differs in length from row 0.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != ncols {
                tracing::debug!(row, expected = ncols, got = r.len(), "ragged feature matrix");
                return Err(Error::RaggedMatrix {
                    row,
                    expected: ncols,
                    got: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self {
            ncols,
            nrows: rows.len(),
            data,
        })
    }

    /// Number of rows (feature vectors).
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (dimensions per vector).
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Row `index`, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.nrows {
            return None;
        }
        let start = index * self.ncols;
        Some(&self.data[start..start + self.ncols])
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> Rows<'_> {
        Rows {
            inner: RowsInner::from_matrix(self),
        }
    }

    /// Closest row to `point` under any [`SymmetricMetric`].
    ///
    /// Rows at a NaN distance are skipped. Ties go to the lowest index.
    /// Returns `None` if the matrix is empty or every distance is NaN.
    pub fn nearest_by<M>(&self, point: &[f64], metric: &M) -> Option<(usize, f64)>
    where
        M: SymmetricMetric<f64> + ?Sized,
    {
        let mut best: Option<(usize, f64)> = None;
        for (idx, row) in self.iter_rows().enumerate() {
            let dist = metric.distance(point, row);
            if dist.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((idx, dist));
            }
        }
        best
    }
}

/// Iterator over the rows of a [`FeatureMatrix`].
pub struct Rows<'a> {
    inner: RowsInner<'a>,
}

// Zero-column matrices still have rows, which `chunks` cannot express.
enum RowsInner<'a> {
    Chunks(Chunks<'a, f64>),
    Empty { remaining: usize },
}

impl<'a> RowsInner<'a> {
    fn from_matrix(m: &'a FeatureMatrix) -> Self {
        if m.ncols == 0 {
            Self::Empty {
                remaining: m.nrows,
            }
        } else {
            Self::Chunks(m.data.chunks(m.ncols))
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            RowsInner::Chunks(chunks) => chunks.next(),
            RowsInner::Empty { remaining } => {
                if *remaining == 0 {
                    None
                } else {
                    *remaining -= 1;
                    Some(&[])
                }
            }
        }
    }
}

/// Index and distance of the row in `centroids` closest to `point`.
///
/// Ties go to the lowest index. Returns `Ok(None)` for an empty matrix.
/// An infinite distance still orders after every finite one.
///
/// # Errors
///
/// - The first error any distance computation returns, e.g.
///   [`Error::ZeroNorm`] for cosine against a zero centroid.
/// - [`Error::NonFinite`] if a distance is NaN, which happens when `point`
///   or a centroid holds NaN or opposite infinities.
///
/// # Example
///
/// ```rust
/// use simil::{nearest, FeatureMatrix, VectorMetric};
///
/// let centroids = FeatureMatrix::from_rows(&[[0.0, 0.0], [10.0, 10.0]]).unwrap();
/// let (idx, dist) = nearest(&[9.0, 10.0], &centroids, VectorMetric::Euclidean, None)
///     .unwrap()
///     .unwrap();
/// assert_eq!(idx, 1);
/// assert!((dist - 1.0).abs() < 1e-12);
/// ```
pub fn nearest(
    point: &[f64],
    centroids: &FeatureMatrix,
    metric: VectorMetric,
    weights: Option<&[f64]>,
) -> Result<Option<(usize, f64)>> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, row) in centroids.iter_rows().enumerate() {
        let dist = metric.try_distance(point, row, weights)?;
        if dist.is_nan() {
            tracing::debug!(row = idx, %metric, "NaN distance to centroid");
            return Err(Error::NonFinite("distance to centroid"));
        }
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((idx, dist));
        }
    }
    Ok(best)
}

/// Assign every row of `points` to its nearest row of `centroids`.
///
/// This is the assignment step of k-means. An empty `centroids` matrix
/// yields an empty assignment only when `points` is empty too.
///
/// # Errors
///
/// - [`Error::NoCentroids`] if `centroids` is empty but `points` is not.
/// - Any error from the distance computation.
pub fn assign(
    points: &FeatureMatrix,
    centroids: &FeatureMatrix,
    metric: VectorMetric,
    weights: Option<&[f64]>,
) -> Result<Vec<usize>> {
    let mut labels = Vec::with_capacity(points.nrows());
    for point in points.iter_rows() {
        match nearest(point, centroids, metric, weights)? {
            Some((idx, _)) => labels.push(idx),
            None => {
                tracing::debug!(points = points.nrows(), "assignment without centroids");
                return Err(Error::NoCentroids);
            }
        }
    }
    Ok(labels)
}
