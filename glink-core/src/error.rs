//! Error types for glink-core.

use crate::types::NodeId;
use thiserror::Error;

/// Result type alias for glink-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while building, converting or persisting a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node with this id was already added.
    #[error("Duplicate node id: {id}")]
    DuplicateNode {
        /// The id that was added twice.
        id: NodeId,
    },

    /// Node ids are positive; zero is rejected.
    #[error("Invalid node id: {id} (node ids must be positive)")]
    InvalidNodeId {
        /// The rejected id.
        id: NodeId,
    },

    /// An edge references a node that is not in the graph.
    #[error("Unknown node id: {id}")]
    UnknownNode {
        /// The id that could not be resolved.
        id: NodeId,
    },

    /// IO error opening, writing or reading a document file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphError::DuplicateNode { id: 3 };
        assert_eq!(err.to_string(), "Duplicate node id: 3");

        let err = GraphError::InvalidNodeId { id: 0 };
        assert!(err.to_string().contains("must be positive"));

        let err = GraphError::UnknownNode { id: 42 };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
