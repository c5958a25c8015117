//! Square edge matrix and cycle-space arithmetic.

use crate::error::{Result, RouteGenError};

/// Largest entry a graph or route matrix may hold.
pub const MAX_EDGE_WEIGHT: u8 = 2;

/// A dense n×n edge matrix stored in row-major order.
///
/// This is the single representation shared by networks, spanning trees,
/// cycles, and routes. Entries are small non-negative weights: `1` for an
/// ordinary edge, `2` for the scaled edge of a direct round trip. Cycle-space
/// operations treat any non-zero entry as "edge present".
///
/// # Examples
///
/// ```
/// use u_routegen::graph::EdgeMatrix;
///
/// let mut a = EdgeMatrix::new(3);
/// a.set_edge(0, 1, 1);
/// a.set_edge(1, 2, 1);
/// let mut b = EdgeMatrix::new(3);
/// b.set_edge(1, 2, 1);
///
/// let sym = a.xor(&b).unwrap();
/// assert!(sym.has_edge(0, 1));
/// assert!(!sym.has_edge(1, 2));
/// assert!(a.overlaps(&b).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeMatrix {
    data: Vec<u8>,
    size: usize,
}

impl EdgeMatrix {
    /// Creates an edge matrix with no edges.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates an edge matrix from an explicit row-major grid.
    ///
    /// Only the length is checked; use [`is_symmetric`](Self::is_symmetric)
    /// and [`has_zero_diagonal`](Self::has_zero_diagonal) to validate shape.
    pub fn from_data(size: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RouteGenError::DimensionMismatch {
                expected: size * size,
                found: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Number of nodes (rows) in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the entry at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.data[i * self.size + j]
    }

    /// Returns `true` if there is an edge between `i` and `j`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.get(i, j) != 0
    }

    /// Sets the undirected edge `{i, j}` to `value` in both directions.
    ///
    /// # Panics
    ///
    /// Panics on a self-loop or an out-of-bounds index.
    pub fn set_edge(&mut self, i: usize, j: usize, value: u8) {
        assert_ne!(i, j, "self-loops are not allowed");
        self.data[i * self.size + j] = value;
        self.data[j * self.size + i] = value;
    }

    /// Removes the undirected edge `{i, j}`.
    pub fn remove_edge(&mut self, i: usize, j: usize) {
        self.set_edge(i, j, 0);
    }

    /// Row sum at node `i`. Scaled edges count with their weight.
    pub fn degree(&self, i: usize) -> u32 {
        self.row(i).iter().map(|&v| u32::from(v)).sum()
    }

    /// Row sums for every node.
    pub fn degrees(&self) -> Vec<u32> {
        (0..self.size).map(|i| self.degree(i)).collect()
    }

    /// Largest row sum, or 0 for an empty matrix.
    pub fn max_degree(&self) -> u32 {
        (0..self.size).map(|i| self.degree(i)).max().unwrap_or(0)
    }

    /// Nodes with a non-zero degree, in ascending order.
    pub fn touched_nodes(&self) -> Vec<usize> {
        (0..self.size).filter(|&i| self.degree(i) > 0).collect()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Iterates over undirected edges `(i, j)` with `i < j`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size)
                .filter(move |&j| self.has_edge(i, j))
                .map(move |j| (i, j))
        })
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[u8] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Iterates over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.size).map(move |i| self.row(i))
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Returns `true` if `m[i][j] == m[j][i]` for all `i, j`.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Largest entry, 0 for an empty matrix.
    pub fn max_entry(&self) -> u8 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Returns `true` if no node has a self-loop.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 0)
    }

    /// Symmetric difference of the two edge sets.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.xor_assign(other)?;
        Ok(out)
    }

    /// In-place symmetric difference. The matrix is left untouched on error.
    pub fn xor_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a = u8::from((*a != 0) ^ (b != 0));
        }
        Ok(())
    }

    /// Intersection of the two edge sets.
    pub fn and(&self, other: &Self) -> Result<Self> {
        self.check_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| u8::from(a != 0 && b != 0))
            .collect();
        Ok(Self {
            data,
            size: self.size,
        })
    }

    /// Returns `true` if the two edge sets share at least one edge.
    pub fn overlaps(&self, other: &Self) -> Result<bool> {
        self.check_size(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .any(|(&a, &b)| a != 0 && b != 0))
    }

    /// Returns a copy with every entry multiplied by `factor`.
    pub fn scaled(&self, factor: u8) -> Self {
        Self {
            data: self.data.iter().map(|&v| v.saturating_mul(factor)).collect(),
            size: self.size,
        }
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.size != other.size {
            return Err(RouteGenError::DimensionMismatch {
                expected: self.size,
                found: other.size,
            });
        }
        Ok(())
    }
}
