//! Graph storage: identity types and the locked tri-map store.

mod json;
mod node;
mod store;

pub use node::{Node, NodeId};
pub use store::GraphStore;
