//! Graphs over named nodes.
//!
//! - [`EdgeMatrix`] — square edge matrix with cycle-space XOR / AND
//! - [`NodeLabels`] — ordered node names with name ↔ index lookup
//! - [`LabeledGraph`] — validated edge matrix over shared labels
//! - [`build_adjacency`] / [`Network`] — hub star plus k-nearest adjacency
//! - [`SpanningTree`] — depth-first spanning tree rooted at node 0

mod edges;
mod labeled;
mod labels;
mod network;
mod spanning_tree;

pub use edges::{EdgeMatrix, MAX_EDGE_WEIGHT};
pub use labeled::LabeledGraph;
pub use labels::NodeLabels;
pub use network::{build_adjacency, Network};
pub use spanning_tree::{SpanningTree, ROOT};
