//! Document tree types
//!
//!     The tree is stored in an arena: nodes live in a flat vector owned by
//!     [`Document`] and refer to their children through [`NodeId`] handles.
//!     The tokenizer's open-block stack is a transient stack of handles, not
//!     part of the persisted tree, and no node holds a parent pointer.

pub mod node;

pub use node::{Document, Node, NodeId, NodeKind};
