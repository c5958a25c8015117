//! Ordered collection of candidate routes.

use super::Route;

/// The candidate routes generated for one network.
///
/// Combined routes come first, then one direct route per non-hub node.
/// Routes are immutable once pushed.
///
/// # Examples
///
/// ```
/// use u_routegen::models::{Route, RouteSet};
///
/// let mut set = RouteSet::new(3, 0);
/// set.push(Route::direct("r0", 3, 0, 1, 2));
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.uncovered(), vec![2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSet {
    routes: Vec<Route>,
    size: usize,
    hub: usize,
}

impl RouteSet {
    /// Creates an empty set for a network of `size` nodes with the given hub.
    pub fn new(size: usize, hub: usize) -> Self {
        Self {
            routes: Vec::new(),
            size,
            hub,
        }
    }

    /// Appends a route.
    pub fn push(&mut self, route: Route) {
        debug_assert_eq!(route.size(), self.size);
        self.routes.push(route);
    }

    /// All routes, in generation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Iterates over the routes.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Node count of the network.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Hub index of the network.
    pub fn hub(&self) -> usize {
        self.hub
    }

    /// Number of routes merged from fundamental cycles.
    pub fn num_combined(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_direct()).count()
    }

    /// Number of direct fallback routes.
    pub fn num_direct(&self) -> usize {
        self.routes.iter().filter(|r| r.is_direct()).count()
    }

    /// Non-hub nodes that no route visits.
    pub fn uncovered(&self) -> Vec<usize> {
        (0..self.size)
            .filter(|&i| i != self.hub && !self.routes.iter().any(|r| r.visits(i)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMatrix;

    #[test]
    fn test_counts() {
        let mut set = RouteSet::new(3, 0);
        assert!(set.is_empty());
        let mut tri = EdgeMatrix::new(3);
        tri.set_edge(0, 1, 1);
        tri.set_edge(1, 2, 1);
        tri.set_edge(0, 2, 1);
        set.push(Route::combined("r0", vec![0], tri));
        set.push(Route::direct("r1", 3, 0, 1, 2));
        set.push(Route::direct("r2", 3, 0, 2, 2));
        assert_eq!(set.len(), 3);
        assert_eq!(set.num_combined(), 1);
        assert_eq!(set.num_direct(), 2);
        assert!(set.uncovered().is_empty());
        assert_eq!(set.iter().map(|r| r.name()).collect::<Vec<_>>(), ["r0", "r1", "r2"]);
    }
}
