//! Dense travel-cost matrix.

use crate::error::{Result, RouteGenError};

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Costs are validated on construction: the matrix is square and every entry
/// is finite and non-negative. The matrix owns its data, so graphs built from
/// it never alias caller buffers.
///
/// # Examples
///
/// ```
/// use u_routegen::distance::TravelMatrix;
///
/// let tm = TravelMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// assert!((tm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(tm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelMatrix {
    /// Creates a travel matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean travel matrix from planar coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut tm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                tm.data[i * n + j] = d;
                tm.data[j * n + i] = d;
            }
        }
        tm
    }

    /// Creates a travel matrix from an explicit row-major n×n grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RouteGenError::InvalidParameter(format!(
                "travel matrix of size {size} needs {} entries, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|c| !c.is_finite() || *c < 0.0) {
            return Err(RouteGenError::InvalidParameter(format!(
                "travel cost at ({}, {}) must be finite and non-negative, got {}",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Creates a travel matrix from a list of rows.
    ///
    /// Fails with `InvalidParameter` if the rows do not form a square grid.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(RouteGenError::InvalidParameter(format!(
                "travel matrix is not square: row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        Self::from_data(size, rows.concat())
    }

    /// Returns the travel cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the `k` locations with the smallest travel cost from `from`,
    /// excluding `from` itself.
    ///
    /// Candidates are ordered by `(cost, index)`, so equal costs resolve to
    /// the lowest index. Returns fewer than `k` entries only when the matrix
    /// has fewer than `k + 1` locations.
    pub fn k_nearest(&self, from: usize, k: usize) -> Vec<usize> {
        let mut candidates: Vec<usize> = (0..self.size).filter(|&j| j != from).collect();
        candidates.sort_by(|&a, &b| {
            self.get(from, a)
                .total_cmp(&self.get(from, b))
                .then(a.cmp(&b))
        });
        candidates.truncate(k);
        candidates
    }

    /// Extracts the sub-matrix over the given locations, in the given order.
    pub fn restrict(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.size) {
            return Err(RouteGenError::InvalidParameter(format!(
                "location {bad} is out of range for a travel matrix of size {}",
                self.size
            )));
        }
        let data = indices
            .iter()
            .flat_map(|&i| indices.iter().map(move |&j| (i, j)))
            .map(|(i, j)| self.get(i, j))
            .collect();
        Ok(Self {
            data,
            size: indices.len(),
        })
    }
}
