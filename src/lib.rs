//! affinity-graph: thread-safe in-memory weighted digraph store
//!
//! # Overview
//!
//! affinity-graph stores a directed, weighted graph behind a single
//! readers-writer lock. Every edge is indexed twice (once by source, once by
//! target) so upstream and downstream neighbor queries are both O(1) map
//! lookups, and the two indices are kept as exact mirror images inside every
//! critical section.
//!
//! Repeated [`GraphStore::add_edge`] calls on the same ordered pair accumulate
//! weight, which models repeated observations reinforcing a relationship;
//! [`GraphStore::replace_edge`] overwrites instead.
//!
//! # Quick Start
//!
//! ```
//! use affinity_graph::{GraphStore, Node, NodeId};
//!
//! # fn example() -> Result<(), affinity_graph::GraphError> {
//! let store = GraphStore::new();
//!
//! let main = NodeId::new("main");
//! let parse = NodeId::new("parse_args");
//! store.add_node(Node::new(main.clone()));
//! store.add_node(Node::new(parse.clone()));
//!
//! store.add_edge(&main, &parse, 1.0)?;   // observed once
//! store.add_edge(&main, &parse, 1.0)?;   // observed again: weight accumulates
//! assert_eq!(store.weight(&main, &parse)?, 2.0);
//!
//! // Export as JSON (source → {target → weight})
//! let json = store.to_json()?;
//! assert_eq!(json, r#"{"main":{"parse_args":2.0}}"#);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Storage**: one composite state struct (node map + both adjacency
//!   indices) guarded by one `parking_lot::RwLock`
//! - **Queries**: always return defensive copies, never live aliases of
//!   guarded state
//! - **Errors**: typed [`GraphError`] taxonomy; membership ops signal via
//!   `bool` instead

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod storage;

// Re-export core types
pub use error::GraphError;
pub use storage::{GraphStore, Node, NodeId};

/// Convenience alias for fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
