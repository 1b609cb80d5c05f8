//! Declarative construction of ordered node trees.
//!
//! A [`Session`] turns a sequence of [`Session::emit`] calls into a forest of
//! foreign nodes: each call creates one node through the session's
//! [`NodeFactory`], applies its follower arguments in order, descends into
//! nested declaration blocks with the node as the current attachment point,
//! and attaches the finished node to its parent (or to the root sequence when
//! emitted at the top level).
//!
//! Structure that varies at build time is expressed with combinators rather
//! than imperative branching in the caller: [`when`]/[`either`] decide a
//! follower once, eagerly, at construction; the [`repeat`]/[`each`] family
//! expands finite sources into per-item declarations or follower sequences.
//!
//! The core is vocabulary-agnostic. Node types opt in through
//! [`BuilderNode`]; a concrete markup binding lives in a separate crate.

mod cond;
mod follower;
mod iter;
mod node;
mod session;
mod stack;

#[cfg(test)]
pub(crate) mod test_node;

pub use crate::cond::{either, when, when_lazy};
pub use crate::follower::{
    Arg, AttrValue, Follower, attr, classes, flag, nest, node, node_opt, text, with,
};
pub use crate::iter::{
    Variants, each, each_indexed, each_variant, map_each, map_each_indexed, repeat,
};
pub use crate::node::{BuilderNode, Declare, NodeFactory};
pub use crate::session::{Session, TreeConfig};
