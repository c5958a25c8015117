//! Travel-cost matrices.
//!
//! Provides the dense travel-cost matrix that networks are built from.

mod matrix;

pub use matrix::TravelMatrix;
