//! Core abstractions for flowkit
//!
//! This crate provides the node lifecycle contract and the shared state
//! store that concrete nodes operate on. It has no runtime dependencies.

mod error;
mod node;
mod store;
mod value;

pub use error::{FlowError, NodeError};
pub use node::{Node, Validate};
pub use store::{FlowStore, ACTION_KEY, ERROR_ACTION, ERROR_KEY, ERROR_NODE_KEY};
pub use value::{Value, ValueKind};

/// Result type for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;
