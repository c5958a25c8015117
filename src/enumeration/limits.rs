//! Route feasibility limits.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteGenError};
use crate::graph::EdgeMatrix;

/// Highest degree a node may have on a route; routes never branch.
pub const MAX_DEGREE: u32 = 2;

/// Bounds a merged cycle must satisfy to become a route.
///
/// Builders do not check their arguments; [`RouteLimits::validate`] does,
/// and both deserialization and [`RouteEnumerator::new`] call it.
///
/// [`RouteEnumerator::new`]: super::RouteEnumerator::new
///
/// # Examples
///
/// ```
/// use u_routegen::enumeration::RouteLimits;
///
/// let limits = RouteLimits::default().with_max_stops(4);
/// assert_eq!(limits.max_stops(), 4);
/// assert_eq!(limits.max_degree(), 2);
/// assert!(limits.validate().is_ok());
/// assert!(limits.with_direct_route_scale(3).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LimitsFile")]
pub struct RouteLimits {
    max_stops: usize,
    direct_route_scale: u8,
}

impl Default for RouteLimits {
    fn default() -> Self {
        Self {
            max_stops: 5,
            direct_route_scale: 2,
        }
    }
}

impl RouteLimits {
    /// Sets the most nodes (hub included) a route may pass through.
    pub fn with_max_stops(mut self, max: usize) -> Self {
        self.max_stops = max;
        self
    }

    /// Sets the edge weight of direct round-trip routes.
    pub fn with_direct_route_scale(mut self, scale: u8) -> Self {
        self.direct_route_scale = scale;
        self
    }

    /// Most nodes a route may pass through.
    pub fn max_stops(&self) -> usize {
        self.max_stops
    }

    /// Highest node degree on a route.
    pub fn max_degree(&self) -> u32 {
        MAX_DEGREE
    }

    /// Edge weight of direct round-trip routes.
    pub fn direct_route_scale(&self) -> u8 {
        self.direct_route_scale
    }

    /// Checks that combined routes are possible and direct routes stay
    /// within edge weights 1 and 2.
    ///
    /// A cycle has at least three nodes, so `max_stops` below 3 leaves
    /// only direct routes. A scale of 0 would empty every direct route.
    pub fn validate(&self) -> Result<()> {
        if self.max_stops < 3 {
            return Err(RouteGenError::InvalidParameter(format!(
                "max_stops must be at least 3, got {}",
                self.max_stops
            )));
        }
        if !(1..=2).contains(&self.direct_route_scale) {
            return Err(RouteGenError::InvalidParameter(format!(
                "direct_route_scale must be 1 or 2, got {}",
                self.direct_route_scale
            )));
        }
        Ok(())
    }

    /// Returns `true` if `edges` is small enough, never branches, and
    /// passes through `hub`.
    pub fn admits(&self, edges: &EdgeMatrix, hub: usize) -> bool {
        let degrees = edges.degrees();
        degrees[hub] != 0
            && degrees.iter().filter(|&&d| d > 0).count() <= self.max_stops
            && degrees.iter().all(|&d| d <= MAX_DEGREE)
    }
}

/// Serialized form of [`RouteLimits`]; missing fields take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct LimitsFile {
    max_stops: usize,
    direct_route_scale: u8,
}

impl Default for LimitsFile {
    fn default() -> Self {
        let limits = RouteLimits::default();
        Self {
            max_stops: limits.max_stops,
            direct_route_scale: limits.direct_route_scale,
        }
    }
}

impl TryFrom<LimitsFile> for RouteLimits {
    type Error = RouteGenError;

    fn try_from(file: LimitsFile) -> Result<Self> {
        let limits = Self {
            max_stops: file.max_stops,
            direct_route_scale: file.direct_route_scale,
        };
        limits.validate()?;
        Ok(limits)
    }
}
