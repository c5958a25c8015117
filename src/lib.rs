//! # u-routegen
//!
//! Candidate route generation for set-covering vehicle routing. A region's
//! travel costs become a hub-and-nearest-neighbor network; the network's
//! fundamental cycles are merged into short, non-branching routes through
//! the hub; a direct round trip per node guarantees coverage. The resulting
//! route set is handed to an external optimizer that picks the cheapest
//! covering subset.
//!
//! ## Modules
//!
//! - [`distance`] — Travel-cost matrix
//! - [`graph`] — Edge matrices, labeled graphs, network adjacency, spanning trees
//! - [`cycles`] — Fundamental cycles and selection bitstrings
//! - [`enumeration`] — Route enumeration over the cycle space
//! - [`models`] — Route, route set, vehicle, and violation types
//! - [`evaluation`] — Route pricing and feasibility checking
//! - [`io`] — Travel CSV ingestion and the plain-text route file format
//! - [`pipeline`] — End-to-end generation per region
//! - [`config`] / [`logging`] — Settings and console logging

pub mod config;
pub mod cycles;
pub mod distance;
pub mod enumeration;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod io;
pub mod logging;
pub mod models;
pub mod pipeline;

pub use error::{Result, RouteGenError};
