//! Route constraint violations.

/// A type of constraint violation on a priced route.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Total demand on the route exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in its route set.
        route_index: usize,
        /// Demand served by the route.
        demand: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// Route duration (travel + unloading) exceeds the vehicle's maximum.
    MaxDurationExceeded {
        /// Route index.
        route_index: usize,
        /// Actual duration.
        duration: f64,
        /// Maximum allowed duration.
        max_duration: f64,
    },
}

/// A constraint violation on a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }

    /// Index of the offending route.
    pub fn route_index(&self) -> usize {
        match self.kind {
            ViolationType::CapacityExceeded { route_index, .. }
            | ViolationType::MaxDurationExceeded { route_index, .. } => route_index,
        }
    }

    pub(crate) fn at_route(mut self, index: usize) -> Self {
        match &mut self.kind {
            ViolationType::CapacityExceeded { route_index, .. }
            | ViolationType::MaxDurationExceeded { route_index, .. } => *route_index = index,
        }
        self
    }
}
