//! Error types for route generation.

use thiserror::Error;

/// Errors raised while building networks, deriving cycles, or reading and
/// writing route files.
///
/// Construction errors (`InvalidParameter`, `DisconnectedGraph`) abort the
/// whole pipeline for a region; there is no partial result to fall back on.
#[derive(Debug, Error)]
pub enum RouteGenError {
    /// An input value is out of range (k ≥ n, negative cost, bad hub, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A node name lookup missed.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Depth-first traversal from the root could not reach every node.
    #[error("graph is disconnected: reached {reached} of {total} nodes from the root")]
    DisconnectedGraph {
        /// Nodes visited from the root.
        reached: usize,
        /// Total nodes in the graph.
        total: usize,
    },

    /// Two matrices (or a matrix and its labels) disagree on size.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Size required by the receiving side.
        expected: usize,
        /// Size that was supplied.
        found: usize,
    },

    /// A persisted route file could not be parsed.
    #[error("malformed route file at line {line}: {reason}")]
    MalformedRoutes {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_disconnected() {
        let e = RouteGenError::DisconnectedGraph {
            reached: 2,
            total: 5,
        };
        assert_eq!(
            e.to_string(),
            "graph is disconnected: reached 2 of 5 nodes from the root"
        );
    }

    #[test]
    fn test_io_conversion() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(RouteGenError::Io(_))));
    }
}
