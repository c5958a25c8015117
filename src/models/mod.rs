//! Domain model types for candidate route generation.
//!
//! Routes as edge matrices over a network's nodes, the ordered route set a
//! network produces, the vehicle used to price routes, and the violations a
//! priced route can carry.

mod route;
mod route_set;
mod vehicle;
mod violation;

pub use route::{Route, RouteKind};
pub use route_set::RouteSet;
pub use vehicle::Vehicle;
pub use violation::{Violation, ViolationType};
