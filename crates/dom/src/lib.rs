//! Markup node representation: ordered element/text trees with
//! insertion-ordered attributes and deterministic serialization.
//!
//! Nodes are plain owned data. A finished tree is never mutated by this
//! crate; rendering is a pure function of the tree.

mod escape;
mod node;
mod serialize;

pub use crate::node::{Fragment, Node};
