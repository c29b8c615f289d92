//! Node identity and node value types.
//!
//! Identity is a canonical string label: two [`NodeId`]s denote the same node
//! exactly when their labels are equal. The label is immutable once created.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Opaque node identity.
///
/// Wraps the canonical label in an `Arc<str>` so identities clone cheaply;
/// defensive-copy query results clone a lot of them. Equality, hashing, and
/// ordering all follow the label.
///
/// # Example
///
/// ```
/// use affinity_graph::NodeId;
///
/// let a = NodeId::new("validate");
/// let b = NodeId::new("validate");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "validate");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Create an identity from a string label.
    #[must_use]
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    /// Canonical string representation of this identity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// A vertex in the graph: exactly one [`NodeId`], nothing else in the minimal
/// core. Identity never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: NodeId,
}

impl Node {
    /// Create a node carrying the given identity.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self { id }
    }

    /// The identity this node was created with.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_equal_labels_equal_identities() {
        assert_eq!(NodeId::new("n1"), NodeId::new("n1"));
        assert_ne!(NodeId::new("n1"), NodeId::new("n2"));
    }

    #[test]
    fn test_identity_as_map_key() {
        let mut map = HashMap::new();
        map.insert(NodeId::new("n1"), 1);
        map.insert(NodeId::new("n1"), 2); // Same label: same key

        assert_eq!(map.len(), 1);
        assert_eq!(map[&NodeId::new("n1")], 2);
    }

    #[test]
    fn test_node_exposes_id_unchanged() {
        let id = NodeId::new("n1");
        let node = Node::new(id.clone());
        assert_eq!(node.id(), &id);
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(NodeId::new("a/b#c").to_string(), "a/b#c");
    }
}
