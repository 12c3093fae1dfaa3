//! # Element Tree
//!
//! Arena-backed HTML element tree.
//!
//! Nodes live in a flat `Vec` inside [`Dom`] and reference each other by
//! [`NodeId`]. Children are owned by their parent through the arena; the
//! parent link is a plain `Option<NodeId>` back-reference used only for
//! "ascend to parent" navigation, so no ownership cycles are possible.
//!
//! The tree only grows during a parse: there is no node removal.

pub mod arena;

pub use arena::{Attribute, Dom, ElementData, Node, NodeId, NodeKind};
