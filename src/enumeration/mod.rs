//! Candidate route enumeration.
//!
//! - [`RouteEnumerator`] — merges fundamental cycles into bounded routes and
//!   adds one direct round trip per node
//! - [`RouteLimits`] — stop, degree, and round-trip scale bounds

mod enumerator;
mod limits;

pub use enumerator::RouteEnumerator;
pub use limits::{RouteLimits, MAX_DEGREE};
