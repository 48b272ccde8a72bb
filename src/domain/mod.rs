//! Domain layer: the classification tree and its operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).
//! Operations are inherent methods on [`Node`], spread over one module per concern.

mod codec;
pub mod error;
pub mod graph;
mod mutation;
pub mod node;
mod outline;
mod targets;
mod traversal;

pub use error::{DomainError, DomainResult, ErrorClass, NodeRole};
pub use graph::Graph;
pub use node::{MoveTarget, Node, NodeType, DEFAULT_COLOR, ROOT_ID};
pub use outline::TreeNodeConvert;
pub use traversal::Traversal;
