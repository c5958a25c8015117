//! Route enumeration over the cycle space.
//!
//! # Algorithm
//!
//! 1. With `m` fundamental cycles, take every binary vector of length
//!    `m - 1`. For each hub-incident cycle at position `p`, insert a forced
//!    `true` at `p`, giving selections that always contain a hub cycle.
//!    Identical selections are kept once, in first-seen order.
//! 2. Fold each selection left to right: the first cycle is taken as is;
//!    every later cycle must share an edge with the accumulated route (AND),
//!    otherwise the selection is dropped, and is then merged by XOR.
//! 3. Keep merged routes that pass [`RouteLimits::admits`].
//! 4. Append one direct hub ↔ node round trip for every non-hub node, so
//!    every node is covered whatever the enumeration found.
//!
//! # Complexity
//!
//! O(h · 2^(m-1)) selections for `h` hub-incident cycles, each folded in
//! O(m · n²). Callers keep regions small enough that `m` stays modest.

use tracing::{debug, info, warn};

use super::RouteLimits;
use crate::cycles::{BitStrings, CycleSet};
use crate::error::{Result, RouteGenError};
use crate::graph::{EdgeMatrix, Network};
use crate::models::{Route, RouteSet};

/// Enumerates candidate routes for one network.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_routegen::cycles::CycleSet;
/// use u_routegen::distance::TravelMatrix;
/// use u_routegen::enumeration::{RouteEnumerator, RouteLimits};
/// use u_routegen::graph::{Network, NodeLabels};
///
/// let labels = Arc::new(NodeLabels::new(["Hub", "A", "B", "C"]).unwrap());
/// let tm = TravelMatrix::from_points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (5.0, 3.0)]);
/// let net = Network::build("demo", labels, &tm, 0, 2).unwrap();
/// let cycles = CycleSet::derive(net.graph(), net.tree()).unwrap();
///
/// let routes = RouteEnumerator::new(&net, &cycles, RouteLimits::default())
///     .unwrap()
///     .enumerate()
///     .unwrap();
/// assert_eq!(routes.num_direct(), 3);
/// assert!(routes.uncovered().is_empty());
/// ```
pub struct RouteEnumerator<'a> {
    network: &'a Network,
    cycles: &'a CycleSet,
    limits: RouteLimits,
}

impl<'a> RouteEnumerator<'a> {
    /// Creates an enumerator; the cycle set must belong to `network` and
    /// the limits must pass [`RouteLimits::validate`].
    pub fn new(network: &'a Network, cycles: &'a CycleSet, limits: RouteLimits) -> Result<Self> {
        limits.validate()?;
        if cycles.size() != network.size() {
            return Err(RouteGenError::DimensionMismatch {
                expected: network.size(),
                found: cycles.size(),
            });
        }
        Ok(Self {
            network,
            cycles,
            limits,
        })
    }

    /// The limits routes are checked against.
    pub fn limits(&self) -> RouteLimits {
        self.limits
    }

    /// Candidate selections over the fundamental cycles.
    ///
    /// Each selection has one entry per cycle and contains at least one
    /// hub-incident cycle. Empty when no cycle passes through the hub.
    pub fn candidates(&self) -> Result<Vec<Vec<bool>>> {
        let out: Vec<_> = self.selections()?.collect();
        debug!(
            network = self.network.name(),
            candidates = out.len(),
            "generated candidate selections"
        );
        Ok(out)
    }

    /// Streams the candidate selections in first-seen order.
    ///
    /// A selection forced at hub position `p` was already produced at an
    /// earlier hub position `q < p` exactly when its bit `q` is set, so
    /// those are skipped instead of remembered.
    fn selections(&self) -> Result<impl Iterator<Item = Vec<bool>>> {
        let hub_cycles = self.cycles.hub_incident(self.network.hub());
        let width = if hub_cycles.is_empty() {
            0
        } else {
            self.cycles.len() - 1
        };
        let base = BitStrings::new(width)?;
        let positions = hub_cycles.clone();
        Ok(positions.into_iter().enumerate().flat_map(move |(k, pos)| {
            let earlier = hub_cycles[..k].to_vec();
            base.clone().filter_map(move |mut selection| {
                selection.insert(pos, true);
                (!earlier.iter().any(|&q| selection[q])).then_some(selection)
            })
        }))
    }

    /// Merges the selected cycles, or returns `None` if some selected cycle
    /// shares no edge with the route accumulated before it.
    pub fn merge(&self, selection: &[bool]) -> Result<Option<EdgeMatrix>> {
        if selection.len() != self.cycles.len() {
            return Err(RouteGenError::DimensionMismatch {
                expected: self.cycles.len(),
                found: selection.len(),
            });
        }
        let mut route = EdgeMatrix::new(self.network.size());
        let mut started = false;
        for cycle in self.cycles.iter().filter(|c| selection[c.index()]) {
            if started && !route.overlaps(cycle.edges())? {
                return Ok(None);
            }
            route.xor_assign(cycle.edges())?;
            started = true;
        }
        Ok(Some(route))
    }

    /// Runs the enumeration and appends the direct fallback routes.
    pub fn enumerate(&self) -> Result<RouteSet> {
        let name = self.network.name();
        let size = self.network.size();
        let hub = self.network.hub();
        let mut routes = RouteSet::new(size, hub);

        if self.cycles.hub_incident(hub).is_empty() {
            warn!(
                network = name,
                cycles = self.cycles.len(),
                "no fundamental cycle passes through the hub; emitting direct routes only"
            );
        }

        let mut selected = 0usize;
        let mut broken = 0usize;
        let mut rejected = 0usize;
        for selection in self.selections()? {
            selected += 1;
            let Some(edges) = self.merge(&selection)? else {
                broken += 1;
                continue;
            };
            if !self.limits.admits(&edges, hub) {
                rejected += 1;
                continue;
            }
            let chosen = selection
                .iter()
                .enumerate()
                .filter_map(|(i, &s)| s.then_some(i))
                .collect();
            routes.push(Route::combined(
                format!("{name} route{}", routes.len()),
                chosen,
                edges,
            ));
        }
        debug!(
            network = name,
            selected,
            broken,
            rejected,
            "filtered candidate selections"
        );

        for node in (0..size).filter(|&i| i != hub) {
            routes.push(Route::direct(
                format!("{name} route{}", routes.len()),
                size,
                hub,
                node,
                self.limits.direct_route_scale(),
            ));
        }

        info!(
            network = name,
            combined = routes.num_combined(),
            direct = routes.num_direct(),
            "enumerated routes"
        );
        Ok(routes)
    }
}
