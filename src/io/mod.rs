//! File formats.
//!
//! - [`read_travel_csv`] — labeled travel-time matrix from CSV
//! - [`write_routes`] / [`read_routes`] — plain-text route matrix blocks

mod routes;
mod travel_csv;

pub use routes::{read_routes, read_routes_file, write_routes, write_routes_file};
pub use travel_csv::{read_travel_csv, read_travel_csv_path};
