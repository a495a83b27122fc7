//! Node attribute model and node types

pub mod attrs;
pub mod node;

pub use attrs::{AttributeBag, ColumnSpan, Shadow, GRID_COLUMNS, NEW_NODE_HEIGHT};
pub use node::{ComponentKind, Node, NodeId, NodeRef, UnknownKind};
