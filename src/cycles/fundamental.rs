//! Fundamental cycles of a network.
//!
//! # Algorithm
//!
//! Every graph edge `(u, v)` missing from the spanning tree (a chord) closes
//! exactly one cycle with the tree. With `P(x)` the root-to-`x` tree path,
//!
//! ```text
//! C(u, v) = (P(u) ∪ {(u, v)}) XOR P(v)
//! ```
//!
//! The shared prefix of the two root paths cancels under XOR, leaving the
//! simple cycle through the chord.
//!
//! # Complexity
//!
//! O(n²) per tree-path lookup on the dense matrix, one pair per chord.

use tracing::debug;

use crate::error::{Result, RouteGenError};
use crate::graph::{EdgeMatrix, LabeledGraph, SpanningTree};

/// One fundamental cycle: a chord plus the tree paths to its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct FundamentalCycle {
    index: usize,
    chord: (usize, usize),
    edges: EdgeMatrix,
}

impl FundamentalCycle {
    /// Position of this cycle in its [`CycleSet`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The non-tree edge `(u, v)`, `u < v`, that closes this cycle.
    pub fn chord(&self) -> (usize, usize) {
        self.chord
    }

    /// Cycle edges.
    pub fn edges(&self) -> &EdgeMatrix {
        &self.edges
    }

    /// Returns `true` if the cycle passes through `node`.
    pub fn touches(&self, node: usize) -> bool {
        self.edges.degree(node) > 0
    }

    /// Nodes on the cycle, in ascending order.
    pub fn nodes(&self) -> Vec<usize> {
        self.edges.touched_nodes()
    }
}

/// The fundamental cycles of a (graph, spanning tree) pair.
///
/// Cycles are ordered by chord in row-major order. For a connected graph
/// the set has exactly `|E| - (n - 1)` members.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_routegen::cycles::CycleSet;
/// use u_routegen::graph::{EdgeMatrix, LabeledGraph, NodeLabels, SpanningTree};
///
/// let labels = Arc::new(NodeLabels::new(["Hub", "A", "B"]).unwrap());
/// let mut edges = EdgeMatrix::new(3);
/// edges.set_edge(0, 1, 1);
/// edges.set_edge(1, 2, 1);
/// edges.set_edge(0, 2, 1);
/// let g = LabeledGraph::new("g", labels, edges).unwrap();
/// let tree = SpanningTree::build(&g).unwrap();
///
/// let cycles = CycleSet::derive(&g, &tree).unwrap();
/// assert_eq!(cycles.len(), 1);
/// assert_eq!(cycles.get(0).unwrap().chord(), (0, 2));
/// assert_eq!(cycles.get(0).unwrap().nodes(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CycleSet {
    cycles: Vec<FundamentalCycle>,
    size: usize,
}

impl CycleSet {
    /// Derives one fundamental cycle per non-tree edge of `graph`.
    pub fn derive(graph: &LabeledGraph, tree: &SpanningTree) -> Result<Self> {
        let n = graph.size();
        if tree.size() != n {
            return Err(RouteGenError::DimensionMismatch {
                expected: n,
                found: tree.size(),
            });
        }

        let chords: Vec<(usize, usize)> = graph
            .edges()
            .edges()
            .filter(|&(u, v)| !tree.contains_edge(u, v))
            .collect();
        debug!(graph = graph.name(), chords = chords.len(), "deriving fundamental cycles");

        let mut cycles = Vec::with_capacity(chords.len());
        for (u, v) in chords {
            let mut path_u = tree.path_from_root(u)?;
            path_u.set_edge(u, v, 1);
            let path_v = tree.path_from_root(v)?;
            let edges = path_u.xor(&path_v)?;
            cycles.push(FundamentalCycle {
                index: cycles.len(),
                chord: (u, v),
                edges,
            });
        }

        Ok(Self { cycles, size: n })
    }

    /// Number of cycles (the cycle rank of a connected graph).
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Returns `true` if the graph is a tree.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Node count of the underlying graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns cycle `i`, if any.
    pub fn get(&self, i: usize) -> Option<&FundamentalCycle> {
        self.cycles.get(i)
    }

    /// All cycles in order.
    pub fn as_slice(&self) -> &[FundamentalCycle] {
        &self.cycles
    }

    /// Iterates over the cycles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FundamentalCycle> {
        self.cycles.iter()
    }

    /// Positions of the cycles that pass through `hub`.
    pub fn hub_incident(&self, hub: usize) -> Vec<usize> {
        self.cycles
            .iter()
            .filter(|c| c.touches(hub))
            .map(|c| c.index)
            .collect()
    }
}

impl<'a> IntoIterator for &'a CycleSet {
    type Item = &'a FundamentalCycle;
    type IntoIter = std::slice::Iter<'a, FundamentalCycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.cycles.iter()
    }
}
