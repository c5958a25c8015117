//! Edge matrix over named nodes.

use std::sync::Arc;

use super::{EdgeMatrix, NodeLabels, MAX_EDGE_WEIGHT};
use crate::error::{Result, RouteGenError};

/// A named, undirected graph: an [`EdgeMatrix`] over shared [`NodeLabels`].
///
/// Construction enforces the graph invariants: the matrix matches the label
/// count, is symmetric, has a zero diagonal, and holds no entry above
/// [`MAX_EDGE_WEIGHT`]. Once built, a graph is never
/// mutated; derived graphs (trees, cycles) are new values sharing the labels.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_routegen::graph::{EdgeMatrix, LabeledGraph, NodeLabels};
///
/// let labels = Arc::new(NodeLabels::new(["Hub", "A"]).unwrap());
/// let mut edges = EdgeMatrix::new(2);
/// edges.set_edge(0, 1, 1);
/// let g = LabeledGraph::new("north", labels, edges).unwrap();
/// assert_eq!(g.edge_count(), 1);
/// assert_eq!(g.node_name(1), "A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledGraph {
    name: String,
    labels: Arc<NodeLabels>,
    edges: EdgeMatrix,
}

impl LabeledGraph {
    /// Creates a graph after validating its shape.
    pub fn new(name: impl Into<String>, labels: Arc<NodeLabels>, edges: EdgeMatrix) -> Result<Self> {
        if labels.len() != edges.size() {
            return Err(RouteGenError::DimensionMismatch {
                expected: labels.len(),
                found: edges.size(),
            });
        }
        if !edges.is_symmetric() {
            return Err(RouteGenError::InvalidParameter(
                "adjacency matrix must be symmetric".into(),
            ));
        }
        if !edges.has_zero_diagonal() {
            return Err(RouteGenError::InvalidParameter(
                "adjacency matrix must not contain self-loops".into(),
            ));
        }
        if edges.max_entry() > MAX_EDGE_WEIGHT {
            return Err(RouteGenError::InvalidParameter(format!(
                "adjacency entries must be at most {MAX_EDGE_WEIGHT}, found {}",
                edges.max_entry()
            )));
        }
        Ok(Self {
            name: name.into(),
            labels,
            edges,
        })
    }

    /// Builds a graph over the same labels from edges this crate derived
    /// itself (always symmetric, loop-free, and correctly sized).
    pub(crate) fn derived(&self, name: String, edges: EdgeMatrix) -> Self {
        debug_assert_eq!(edges.size(), self.size());
        debug_assert!(edges.is_symmetric() && edges.has_zero_diagonal());
        Self {
            name,
            labels: Arc::clone(&self.labels),
            edges,
        }
    }

    /// Graph name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared node labels.
    pub fn labels(&self) -> &Arc<NodeLabels> {
        &self.labels
    }

    /// The edge matrix.
    pub fn edges(&self) -> &EdgeMatrix {
        &self.edges
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.edges.size()
    }

    /// Name of node `i`.
    pub fn node_name(&self, i: usize) -> &str {
        self.labels.name(i)
    }

    /// Index of the node called `name`.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.labels.index_of(name)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Cycle rank `|E| - (n - 1)`, assuming the graph is connected.
    pub fn cycle_rank(&self) -> usize {
        (self.edge_count() + 1).saturating_sub(self.size())
    }
}
