//! Delivery network construction.
//!
//! # Adjacency rule
//!
//! - The hub is connected to every other node (a full star).
//! - Every other node is connected to its `k` cheapest neighbors by travel
//!   cost, added symmetrically whether or not the neighbor picked it back.
//!
//! Equal costs are broken by lowest index (see
//! [`TravelMatrix::k_nearest`]), so the adjacency is reproducible.

use std::sync::Arc;

use tracing::{debug, info};

use super::{EdgeMatrix, LabeledGraph, NodeLabels, SpanningTree};
use crate::distance::TravelMatrix;
use crate::error::{Result, RouteGenError};

/// Builds the adjacency of a delivery network from travel costs.
///
/// Fails with `InvalidParameter` if the matrix is empty, the hub is out of
/// range, or `k >= n`.
///
/// # Examples
///
/// ```
/// use u_routegen::distance::TravelMatrix;
/// use u_routegen::graph::build_adjacency;
///
/// let tm = TravelMatrix::from_points(&[(0.0, 0.0), (5.0, 0.0), (6.0, 0.0), (20.0, 0.0)]);
/// let adj = build_adjacency(&tm, 0, 1).unwrap();
/// assert!(adj.has_edge(0, 3)); // hub star
/// assert!(adj.has_edge(1, 2)); // nearest neighbors
/// assert!(adj.has_edge(2, 3)); // 3 picked 2; added symmetrically
/// ```
pub fn build_adjacency(travel: &TravelMatrix, hub: usize, k: usize) -> Result<EdgeMatrix> {
    let n = travel.size();
    if n == 0 {
        return Err(RouteGenError::InvalidParameter(
            "network must contain at least one node".into(),
        ));
    }
    if hub >= n {
        return Err(RouteGenError::InvalidParameter(format!(
            "hub index {hub} is out of range for {n} nodes"
        )));
    }
    if k >= n {
        return Err(RouteGenError::InvalidParameter(format!(
            "minimum neighbor count k = {k} must be smaller than the node count {n}"
        )));
    }

    let mut adjacency = EdgeMatrix::new(n);
    for i in 0..n {
        if i == hub {
            for j in (0..n).filter(|&j| j != hub) {
                adjacency.set_edge(hub, j, 1);
            }
        } else {
            for j in travel.k_nearest(i, k) {
                adjacency.set_edge(i, j, 1);
            }
        }
    }
    Ok(adjacency)
}

/// A region's delivery network: its graph, hub, and spanning tree.
///
/// The graph is built once from an owned travel matrix and frozen; the
/// spanning tree is derived immediately afterwards.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_routegen::distance::TravelMatrix;
/// use u_routegen::graph::{Network, NodeLabels};
///
/// let labels = Arc::new(NodeLabels::new(["Hub", "A", "B", "C"]).unwrap());
/// let tm = TravelMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let net = Network::build("east", labels, &tm, 0, 2).unwrap();
/// assert_eq!(net.tree().edge_count(), 3);
/// assert_eq!(net.hub_name(), "Hub");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    graph: LabeledGraph,
    hub: usize,
    tree: SpanningTree,
}

impl Network {
    /// Builds the adjacency, validates it as a graph, and derives its tree.
    pub fn build(
        name: impl Into<String>,
        labels: Arc<NodeLabels>,
        travel: &TravelMatrix,
        hub: usize,
        k: usize,
    ) -> Result<Self> {
        if labels.len() != travel.size() {
            return Err(RouteGenError::DimensionMismatch {
                expected: labels.len(),
                found: travel.size(),
            });
        }
        let adjacency = build_adjacency(travel, hub, k)?;
        let graph = LabeledGraph::new(name, labels, adjacency)?;
        debug!(
            network = graph.name(),
            nodes = graph.size(),
            edges = graph.edge_count(),
            k,
            "built adjacency"
        );
        Self::from_graph(graph, hub)
    }

    /// Wraps an existing graph, deriving its spanning tree.
    pub fn from_graph(graph: LabeledGraph, hub: usize) -> Result<Self> {
        if hub >= graph.size() {
            return Err(RouteGenError::InvalidParameter(format!(
                "hub index {hub} is out of range for {} nodes",
                graph.size()
            )));
        }
        let tree = SpanningTree::build(&graph)?;
        info!(
            network = graph.name(),
            nodes = graph.size(),
            edges = graph.edge_count(),
            cycle_rank = graph.cycle_rank(),
            "network ready"
        );
        Ok(Self { graph, hub, tree })
    }

    /// Network name.
    pub fn name(&self) -> &str {
        self.graph.name()
    }

    /// The network graph.
    pub fn graph(&self) -> &LabeledGraph {
        &self.graph
    }

    /// Hub (distribution node) index.
    pub fn hub(&self) -> usize {
        self.hub
    }

    /// Hub name.
    pub fn hub_name(&self) -> &str {
        self.graph.node_name(self.hub)
    }

    /// The depth-first spanning tree.
    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.graph.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_node_costs() -> TravelMatrix {
        // Hub=0, A=1, B=2, C=3; A-B and B-C are the nearest pairs.
        TravelMatrix::from_rows(&[
            vec![0.0, 4.0, 4.0, 9.0],
            vec![4.0, 0.0, 1.0, 7.0],
            vec![4.0, 1.0, 0.0, 2.0],
            vec![9.0, 7.0, 2.0, 0.0],
        ])
        .expect("valid")
    }

    fn labels() -> Arc<NodeLabels> {
        Arc::new(NodeLabels::new(["Hub", "A", "B", "C"]).expect("unique"))
    }

    #[test]
    fn test_hub_star_and_k_nearest() {
        let adj = build_adjacency(&four_node_costs(), 0, 1).expect("valid");
        assert!(adj.has_edge(0, 1) && adj.has_edge(0, 2) && adj.has_edge(0, 3));
        // A->B, B->A, C->B
        assert!(adj.has_edge(1, 2));
        assert!(adj.has_edge(2, 3));
        assert!(!adj.has_edge(1, 3));
        assert_eq!(adj.edge_count(), 5);
        assert!(adj.is_symmetric());
        assert!(adj.has_zero_diagonal());
    }

    #[test]
    fn test_min_degree() {
        let tm = TravelMatrix::from_points(&[
            (0.0, 0.0),
            (1.0, 5.0),
            (2.0, -3.0),
            (7.0, 7.0),
            (-4.0, 2.0),
            (9.0, 0.5),
        ]);
        for k in 0..6 {
            let adj = build_adjacency(&tm, 2, k).expect("valid");
            for i in (0..6).filter(|&i| i != 2) {
                assert!(adj.degree(i) as usize >= k, "node {i} below k = {k}");
            }
            assert_eq!(adj.degree(2), 5);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let tm = four_node_costs();
        assert!(matches!(
            build_adjacency(&tm, 0, 4),
            Err(RouteGenError::InvalidParameter(_))
        ));
        assert!(matches!(
            build_adjacency(&tm, 4, 1),
            Err(RouteGenError::InvalidParameter(_))
        ));
        assert!(build_adjacency(&TravelMatrix::new(0), 0, 0).is_err());
    }

    #[test]
    fn test_network_build() {
        let net = Network::build("central", labels(), &four_node_costs(), 0, 2).expect("valid");
        assert_eq!(net.name(), "central");
        assert_eq!(net.hub(), 0);
        assert_eq!(net.graph().edge_count(), 6);
        assert_eq!(net.tree().edge_count(), 3);
        assert_eq!(net.graph().cycle_rank(), 3);
    }

    #[test]
    fn test_network_label_mismatch() {
        let short = Arc::new(NodeLabels::new(["Hub", "A"]).expect("unique"));
        assert!(matches!(
            Network::build("x", short, &four_node_costs(), 0, 1),
            Err(RouteGenError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_non_zero_hub() {
        let net = Network::build("x", labels(), &four_node_costs(), 3, 1).expect("valid");
        assert_eq!(net.hub_name(), "C");
        assert_eq!(net.graph().edges().degree(3), 3);
    }
}
