//! Depth-first spanning tree.
//!
//! # Algorithm
//!
//! Iterative depth-first traversal from the root (node 0). At each step the
//! node on top of the stack extends the tree to its lowest-indexed unvisited
//! neighbor; a node with no unvisited neighbors is popped. Every traversal
//! edge becomes a tree edge, so the result is fully determined by the graph.
//!
//! # Complexity
//!
//! O(n²) on the dense adjacency matrix.

use std::collections::VecDeque;

use tracing::debug;

use super::{EdgeMatrix, LabeledGraph};
use crate::error::{Result, RouteGenError};

/// Root node of every spanning tree.
pub const ROOT: usize = 0;

/// A spanning tree of a connected [`LabeledGraph`], rooted at [`ROOT`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_routegen::graph::{EdgeMatrix, LabeledGraph, NodeLabels, SpanningTree};
///
/// let labels = Arc::new(NodeLabels::new(["Hub", "A", "B"]).unwrap());
/// let mut edges = EdgeMatrix::new(3);
/// edges.set_edge(0, 1, 1);
/// edges.set_edge(1, 2, 1);
/// edges.set_edge(0, 2, 1);
/// let g = LabeledGraph::new("g", labels, edges).unwrap();
///
/// let tree = SpanningTree::build(&g).unwrap();
/// assert_eq!(tree.edge_count(), 2);
/// assert!(tree.contains_edge(0, 1));
/// assert!(tree.contains_edge(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    tree: LabeledGraph,
}

impl SpanningTree {
    /// Builds the depth-first spanning tree of `graph`.
    ///
    /// Fails with `DisconnectedGraph` if some node is unreachable from the
    /// root; a partial tree is never returned.
    pub fn build(graph: &LabeledGraph) -> Result<Self> {
        let n = graph.size();
        let adjacency = graph.edges();
        let mut tree_edges = EdgeMatrix::new(n);

        if n > 0 {
            let mut visited = vec![false; n];
            visited[ROOT] = true;
            let mut reached = 1;
            let mut stack = vec![ROOT];

            while let Some(&v) = stack.last() {
                match (0..n).find(|&w| adjacency.has_edge(v, w) && !visited[w]) {
                    Some(w) => {
                        tree_edges.set_edge(v, w, 1);
                        visited[w] = true;
                        reached += 1;
                        stack.push(w);
                    }
                    None => {
                        stack.pop();
                    }
                }
            }

            if reached < n {
                return Err(RouteGenError::DisconnectedGraph { reached, total: n });
            }
        }

        debug!(
            graph = graph.name(),
            nodes = n,
            tree_edges = tree_edges.edge_count(),
            "built spanning tree"
        );

        Ok(Self {
            tree: graph.derived(format!("{} spanning tree", graph.name()), tree_edges),
        })
    }

    /// The tree as a graph over the parent's labels.
    pub fn graph(&self) -> &LabeledGraph {
        &self.tree
    }

    /// Tree edges.
    pub fn edges(&self) -> &EdgeMatrix {
        self.tree.edges()
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    /// Number of tree edges (`n - 1` for a non-empty tree).
    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    /// Returns `true` if `{u, v}` is a tree edge.
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.tree.edges().has_edge(u, v)
    }

    /// Edge set of the unique tree path from the root to `target`.
    ///
    /// Found by breadth-first search over tree edges, scanning neighbors in
    /// ascending index order. The path to the root itself is empty.
    pub fn path_from_root(&self, target: usize) -> Result<EdgeMatrix> {
        let n = self.size();
        if target >= n {
            return Err(RouteGenError::InvalidParameter(format!(
                "node {target} is out of range for a tree of size {n}"
            )));
        }
        let mut path = EdgeMatrix::new(n);
        if target == ROOT {
            return Ok(path);
        }

        let edges = self.edges();
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        visited[ROOT] = true;
        let mut queue = VecDeque::from([ROOT]);

        while let Some(v) = queue.pop_front() {
            for w in 0..n {
                if !edges.has_edge(v, w) || visited[w] {
                    continue;
                }
                visited[w] = true;
                parent[w] = Some(v);
                if w == target {
                    let mut node = w;
                    while let Some(p) = parent[node] {
                        path.set_edge(node, p, 1);
                        node = p;
                    }
                    return Ok(path);
                }
                queue.push_back(w);
            }
        }

        Err(RouteGenError::DisconnectedGraph {
            reached: visited.iter().filter(|&&v| v).count(),
            total: n,
        })
    }
}
