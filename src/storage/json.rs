//! JSON export boundary.
//!
//! # Format
//!
//! The graph renders as one object keyed by source node label; each value is
//! an object of downstream neighbor label to edge weight:
//!
//! ```text
//! {"a": {"b": 8.0, "c": 2.0}, "b": {"c": 1.0}}
//! ```
//!
//! Nodes with no outgoing edges are omitted. Keys are emitted in sorted
//! order so output is deterministic.

use super::GraphStore;
use crate::error::GraphError;
use std::collections::BTreeMap;

impl GraphStore {
    /// Render the current graph as a JSON string.
    ///
    /// The whole snapshot is taken under a single read-lock acquisition; the
    /// state is walked directly rather than through the public query API, so
    /// the non-reentrant lock is never re-entered.
    ///
    /// # Errors
    ///
    /// [`GraphError::Serialization`] if JSON rendering fails.
    pub fn to_json(&self) -> Result<String, GraphError> {
        let state = self.state.read();

        let mut rendered: BTreeMap<&str, BTreeMap<&str, f64>> = BTreeMap::new();
        for (source, outgoing) in &state.targets {
            if outgoing.is_empty() {
                continue;
            }

            let entry = rendered.entry(source.as_str()).or_default();
            for (target, weight) in outgoing {
                entry.insert(target.as_str(), *weight);
            }
        }

        serde_json::to_string(&rendered).map_err(|e| GraphError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Node, NodeId};
    use super::*;

    fn store_with(labels: &[&str]) -> GraphStore {
        let store = GraphStore::new();
        for label in labels {
            store.add_node(Node::new(NodeId::new(*label)));
        }
        store
    }

    #[test]
    fn test_empty_graph_renders_empty_object() {
        let store = GraphStore::new();
        assert_eq!(store.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_nodes_without_outgoing_edges_are_omitted() {
        let store = store_with(&["a", "b"]);
        store
            .add_edge(&NodeId::new("a"), &NodeId::new("b"), 1.0)
            .unwrap();

        // b has no outgoing edges: no "b" key
        assert_eq!(store.to_json().unwrap(), r#"{"a":{"b":1.0}}"#);
    }

    #[test]
    fn test_inner_keys_are_neighbor_labels() {
        let store = store_with(&["a", "b", "c"]);
        let a = NodeId::new("a");
        store.add_edge(&a, &NodeId::new("b"), 8.0).unwrap();
        store.add_edge(&a, &NodeId::new("c"), 2.0).unwrap();

        assert_eq!(store.to_json().unwrap(), r#"{"a":{"b":8.0,"c":2.0}}"#);
    }

    #[test]
    fn test_output_is_deterministic() {
        let store = store_with(&["z", "m", "a"]);
        let z = NodeId::new("z");
        let m = NodeId::new("m");
        let a = NodeId::new("a");
        store.add_edge(&z, &a, 1.0).unwrap();
        store.add_edge(&m, &a, 2.0).unwrap();
        store.add_edge(&a, &z, 3.0).unwrap();

        // Sorted by source label, regardless of insertion order
        assert_eq!(
            store.to_json().unwrap(),
            r#"{"a":{"z":3.0},"m":{"a":2.0},"z":{"a":1.0}}"#
        );
    }

    #[test]
    fn test_deleted_edges_disappear_from_output() {
        let store = store_with(&["a", "b"]);
        let a = NodeId::new("a");
        let b = NodeId::new("b");
        store.add_edge(&a, &b, 1.0).unwrap();
        store.delete_edge(&a, &b).unwrap();

        assert_eq!(store.to_json().unwrap(), "{}");
    }
}
