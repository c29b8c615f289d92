//! Error taxonomy for graph operations.

use crate::storage::NodeId;
use thiserror::Error;

/// Failures surfaced by edge operations, neighbor queries, and the JSON
/// export boundary.
///
/// Membership operations (`add_node`, `delete_node`) never produce a
/// `GraphError`; they report via `bool` because the caller does not need to
/// distinguish why. Edge operations do need to say *which* endpoint was
/// missing, hence the typed variants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphError {
    /// A referenced node identity is absent from the node map.
    #[error("node `{0}` does not exist in graph")]
    NodeNotFound(NodeId),

    /// Both endpoints exist but no edge connects them. Raised only by weight
    /// lookup; `delete_edge` treats a missing edge as a trivial success.
    #[error("no edge from `{source}` to `{target}`")]
    EdgeNotFound {
        /// Edge origin.
        ///
        /// Named `r#source` so thiserror does not infer it as the error
        /// source; it is the same identifier as `source` to callers.
        r#source: NodeId,
        /// Edge destination.
        target: NodeId,
    },

    /// JSON rendering of the graph failed.
    #[error("failed to serialize graph: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_not_found_display() {
        let err = GraphError::NodeNotFound(NodeId::new("ghost"));
        assert_eq!(err.to_string(), "node `ghost` does not exist in graph");
    }

    #[test]
    fn test_edge_not_found_display() {
        let err = GraphError::EdgeNotFound {
            source: NodeId::new("a"),
            target: NodeId::new("b"),
        };
        assert_eq!(err.to_string(), "no edge from `a` to `b`");
    }
}
