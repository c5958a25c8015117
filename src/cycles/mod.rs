//! Cycle space of a network.
//!
//! - [`CycleSet`] — fundamental cycles derived from a graph and its spanning tree
//! - [`BitStrings`] — all binary selection vectors of a given length

mod bitstrings;
mod fundamental;

pub use bitstrings::{BitStrings, MAX_BITS};
pub use fundamental::{CycleSet, FundamentalCycle};
