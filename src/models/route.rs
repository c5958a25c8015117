//! Candidate route type.

use crate::graph::EdgeMatrix;

/// How a route was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// XOR of the listed fundamental cycles (by position in the cycle set).
    Combined {
        /// Selected cycle positions, ascending.
        cycles: Vec<usize>,
    },
    /// Direct hub ↔ node round trip.
    Direct {
        /// The node served.
        node: usize,
    },
}

/// A candidate delivery route: a named edge matrix over the network's nodes.
///
/// Combined routes carry edges valued 1. A direct route carries the single
/// edge `(hub, node)` valued at the round-trip scale (2 by default), so a
/// downstream cost of `Σ(edges ⊙ travel) / 2` prices both alike.
///
/// # Examples
///
/// ```
/// use u_routegen::models::Route;
///
/// let r = Route::direct("west route0", 3, 0, 2, 2);
/// assert_eq!(r.stops(), vec![0, 2]);
/// assert_eq!(r.edges().get(0, 2), 2);
/// assert!(r.visits(2));
/// assert!(!r.visits(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    name: String,
    kind: RouteKind,
    edges: EdgeMatrix,
}

impl Route {
    /// Creates a route merged from fundamental cycles.
    pub fn combined(name: impl Into<String>, cycles: Vec<usize>, edges: EdgeMatrix) -> Self {
        Self {
            name: name.into(),
            kind: RouteKind::Combined { cycles },
            edges,
        }
    }

    /// Creates a direct round trip between `hub` and `node`.
    pub fn direct(name: impl Into<String>, size: usize, hub: usize, node: usize, scale: u8) -> Self {
        let mut edges = EdgeMatrix::new(size);
        edges.set_edge(hub, node, 1);
        Self {
            name: name.into(),
            kind: RouteKind::Direct { node },
            edges: edges.scaled(scale),
        }
    }

    /// Route name, `"<network> route<i>"` for generated routes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the route was produced.
    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    /// Route edges.
    pub fn edges(&self) -> &EdgeMatrix {
        &self.edges
    }

    /// Node count of the underlying network.
    pub fn size(&self) -> usize {
        self.edges.size()
    }

    /// Returns `true` for a direct fallback route.
    pub fn is_direct(&self) -> bool {
        matches!(self.kind, RouteKind::Direct { .. })
    }

    /// Nodes the route passes through (hub included), ascending.
    pub fn stops(&self) -> Vec<usize> {
        self.edges.touched_nodes()
    }

    /// Returns `true` if the route passes through `node`.
    pub fn visits(&self, node: usize) -> bool {
        self.edges.degree(node) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_route() {
        let r = Route::direct("r", 4, 1, 3, 2);
        assert!(r.is_direct());
        assert_eq!(r.kind(), &RouteKind::Direct { node: 3 });
        assert_eq!(r.edges().get(3, 1), 2);
        assert_eq!(r.edges().degree(1), 2);
        assert_eq!(r.edges().edge_count(), 1);
        assert_eq!(r.size(), 4);
    }

    #[test]
    fn test_combined_route() {
        let mut edges = EdgeMatrix::new(3);
        edges.set_edge(0, 1, 1);
        edges.set_edge(1, 2, 1);
        edges.set_edge(0, 2, 1);
        let r = Route::combined("north route0", vec![0], edges);
        assert!(!r.is_direct());
        assert_eq!(r.name(), "north route0");
        assert_eq!(r.stops(), vec![0, 1, 2]);
        assert!(r.visits(1));
    }
}
