//! The locked tri-map graph store.
//!
//! # Layout
//!
//! ```text
//! Graph: a → b (5.0), c → b (2.0)
//!
//! nodes:   {a, b, c}
//! targets: {a: {b: 5.0}, c: {b: 2.0}}   // source → (target → weight)
//! sources: {b: {a: 5.0, c: 2.0}}        // target → (source → weight)
//! ```
//!
//! The two adjacency indices are exact mirror images: an edge (u → v, w)
//! exists iff `targets[u][v] == w` and `sources[v][u] == w`. Every mutation
//! updates both inside the same critical section, so no caller can observe
//! one index without the other.

use super::{Node, NodeId};
use crate::error::GraphError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Hub identity to inner (neighbor identity to weight) map.
type AdjacencyIndex = HashMap<NodeId, HashMap<NodeId, f64>>;

/// The composite state guarded as one unit. Helpers live here, on the
/// unlocked struct, so compound operations reuse an already-held guard
/// instead of re-entering the public API (the lock is not reentrant).
#[derive(Debug, Default)]
pub(super) struct GraphState {
    /// All nodes, keyed by identity.
    pub(super) nodes: HashMap<NodeId, Node>,

    /// Incoming index: target → (source → weight).
    pub(super) sources: AdjacencyIndex,

    /// Outgoing index: source → (target → weight).
    pub(super) targets: AdjacencyIndex,
}

impl GraphState {
    fn ensure_present(&self, id: &NodeId) -> Result<(), GraphError> {
        if self.nodes.contains_key(id) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(id.clone()))
        }
    }

    /// Source is checked before target so the error names the first missing
    /// endpoint.
    fn ensure_endpoints(&self, source: &NodeId, target: &NodeId) -> Result<(), GraphError> {
        self.ensure_present(source)?;
        self.ensure_present(target)
    }

    /// Write the edge into both indices in lockstep. `accumulate` adds onto
    /// an existing weight; otherwise the weight is overwritten.
    fn put_edge(&mut self, source: &NodeId, target: &NodeId, weight: f64, accumulate: bool) {
        let forward = self
            .targets
            .entry(source.clone())
            .or_default()
            .entry(target.clone())
            .or_insert(0.0);
        if accumulate {
            *forward += weight;
        } else {
            *forward = weight;
        }

        let backward = self
            .sources
            .entry(target.clone())
            .or_default()
            .entry(source.clone())
            .or_insert(0.0);
        if accumulate {
            *backward += weight;
        } else {
            *backward = weight;
        }
    }

    /// Resolve the neighbor identities under `hub` in `index` against the
    /// node map, cloning each hit.
    fn resolve_neighbors(&self, index: &AdjacencyIndex, hub: &NodeId) -> HashMap<NodeId, Node> {
        let mut neighbors = HashMap::new();

        if let Some(inner) = index.get(hub) {
            for id in inner.keys() {
                // The delete_node cascade purges half-entries, so every
                // index key resolves while the lock is held. A miss here
                // means the mirror invariant was broken.
                debug_assert!(self.nodes.contains_key(id), "dangling index entry: {id}");
                if let Some(node) = self.nodes.get(id) {
                    neighbors.insert(id.clone(), node.clone());
                }
            }
        }

        neighbors
    }
}

/// Thread-safe weighted digraph store.
///
/// All operations take `&self`; interior mutability is a single
/// `parking_lot::RwLock` over the whole tri-map state. Mutations hold the
/// write guard for their full duration, queries the read guard, so every
/// operation is linearizable with respect to the one lock.
///
/// Query results are defensive copies. Nothing returned from this type
/// aliases guarded state, so callers may hold or iterate results while other
/// threads keep mutating the store.
///
/// # Example
///
/// ```
/// use affinity_graph::{GraphStore, Node, NodeId};
///
/// let store = GraphStore::new();
/// let a = NodeId::new("a");
/// let b = NodeId::new("b");
/// store.add_node(Node::new(a.clone()));
/// store.add_node(Node::new(b.clone()));
///
/// store.add_edge(&a, &b, 5.0).unwrap();
/// store.add_edge(&a, &b, 3.0).unwrap();
/// assert_eq!(store.weight(&a, &b).unwrap(), 8.0);
/// ```
#[derive(Debug, Default)]
pub struct GraphStore {
    pub(super) state: RwLock<GraphState>,
}

impl GraphStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all nodes and edges, returning the store to the empty state.
    /// Idempotent.
    pub fn reset(&self) {
        *self.state.write() = GraphState::default();
    }

    /// Number of distinct nodes currently present. O(1).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.state.read().nodes.len()
    }

    /// Number of directed edges currently present.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.state.read().targets.values().map(HashMap::len).sum()
    }

    /// Whether a node with this identity is present.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.state.read().nodes.contains_key(id)
    }

    /// Look up a node by identity. Absence is `None`, not a fault.
    #[must_use]
    pub fn get_node(&self, id: &NodeId) -> Option<Node> {
        self.state.read().nodes.get(id).cloned()
    }

    /// Every node currently stored, keyed by identity.
    ///
    /// The returned map is a defensive copy taken under the read guard; it is
    /// insulated from subsequent mutation of the store.
    #[must_use]
    pub fn nodes(&self) -> HashMap<NodeId, Node> {
        self.state.read().nodes.clone()
    }

    /// Insert a node keyed by its identity.
    ///
    /// Returns `false` and leaves the existing node untouched when the
    /// identity is already present; `true` when the node was inserted.
    pub fn add_node(&self, node: Node) -> bool {
        let mut state = self.state.write();

        if state.nodes.contains_key(node.id()) {
            return false;
        }

        let id = node.id().clone();
        state.nodes.insert(id, node);
        true
    }

    /// Remove a node and every edge incident to it.
    ///
    /// Returns `false` if the identity is absent. Otherwise drops the node,
    /// its own hub entries in both indices, and the half-entries neighbors
    /// hold for it, all under one write guard so no partial cascade is ever
    /// observable. Returns `true`.
    pub fn delete_node(&self, id: &NodeId) -> bool {
        let mut state = self.state.write();

        if !state.nodes.contains_key(id) {
            return false;
        }

        state.nodes.remove(id);

        // Outgoing edges: own hub, then the reciprocal half-entries.
        state.targets.remove(id);
        for inner in state.targets.values_mut() {
            inner.remove(id);
        }

        // Incoming edges, same shape.
        state.sources.remove(id);
        for inner in state.sources.values_mut() {
            inner.remove(id);
        }

        true
    }

    /// Add weight to the edge from `source` to `target`, creating it if it
    /// does not exist.
    ///
    /// Repeated calls accumulate: weights w1, w2, ... leave the edge at
    /// w1 + w2 + ... (repeated observations reinforce the relationship).
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is absent; the source
    /// endpoint is checked first.
    pub fn add_edge(&self, source: &NodeId, target: &NodeId, weight: f64) -> Result<(), GraphError> {
        let mut state = self.state.write();
        state.ensure_endpoints(source, target)?;
        state.put_edge(source, target, weight, true);
        Ok(())
    }

    /// Set the edge from `source` to `target` to exactly `weight`, discarding
    /// any accumulated value and creating the edge if it did not exist.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is absent; the source
    /// endpoint is checked first.
    pub fn replace_edge(
        &self,
        source: &NodeId,
        target: &NodeId,
        weight: f64,
    ) -> Result<(), GraphError> {
        let mut state = self.state.write();
        state.ensure_endpoints(source, target)?;
        state.put_edge(source, target, weight, false);
        Ok(())
    }

    /// Remove the edge from `source` to `target` from both indices.
    ///
    /// Deleting an edge that does not exist between two present nodes is a
    /// silent no-op, not a fault.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn delete_edge(&self, source: &NodeId, target: &NodeId) -> Result<(), GraphError> {
        let mut state = self.state.write();
        state.ensure_endpoints(source, target)?;

        if let Some(inner) = state.targets.get_mut(source) {
            inner.remove(target);
        }
        if let Some(inner) = state.sources.get_mut(target) {
            inner.remove(source);
        }

        Ok(())
    }

    /// Current weight of the edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if either endpoint is absent (source
    /// checked first); [`GraphError::EdgeNotFound`] if both endpoints exist
    /// but no edge connects them.
    pub fn weight(&self, source: &NodeId, target: &NodeId) -> Result<f64, GraphError> {
        let state = self.state.read();
        state.ensure_endpoints(source, target)?;

        state
            .targets
            .get(source)
            .and_then(|inner| inner.get(target))
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound {
                source: source.clone(),
                target: target.clone(),
            })
    }

    /// Upstream neighbors of `id`: every node with an edge pointing into it,
    /// keyed by identity. Defensive copies.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if `id` is absent.
    pub fn sources_of(&self, id: &NodeId) -> Result<HashMap<NodeId, Node>, GraphError> {
        let state = self.state.read();
        state.ensure_present(id)?;
        Ok(state.resolve_neighbors(&state.sources, id))
    }

    /// Downstream neighbors of `id`: every node reached by one of its
    /// outgoing edges, keyed by identity. Defensive copies.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if `id` is absent.
    pub fn targets_of(&self, id: &NodeId) -> Result<HashMap<NodeId, Node>, GraphError> {
        let state = self.state.read();
        state.ensure_present(id)?;
        Ok(state.resolve_neighbors(&state.targets, id))
    }
}
