//! HTML vocabulary over the generic tree builder.
//!
//! Binds the builder core to [`dom::Node`]: an element factory (with
//! `name#fragment` identifiers applied as `id` attributes), shorthand
//! attribute followers, style descriptors that contribute class names, and
//! document composition through [`tree::Declare`].
//!
//! The whole declaration surface is re-exported here so callers depend on
//! one crate:
//!
//! ```
//! use markup::{build, each, nest, text};
//!
//! let page = build(|t| {
//!     t.emit("ol", [each(["a", "b"], |t, item| {
//!         t.emit("li", [text(item)]);
//!     })]);
//! });
//! assert_eq!(page.to_string(), "<ol><li>a</li><li>b</li></ol>");
//! ```

mod attrs;
mod document;
mod style;

pub use crate::attrs::{charset, class, code, content, href, id, name, rel, src, title};
pub use crate::document::{HtmlExt, build, create_element, render, session, session_with};
pub use crate::style::{Style, styled};

pub use dom::{Fragment, Node};
pub use tree::{
    Arg, AttrValue, BuilderNode, Declare, Follower, NodeFactory, Session, TreeConfig, Variants,
    attr, classes, each, each_indexed, each_variant, either, flag, map_each, map_each_indexed,
    nest, node, node_opt, repeat, text, when, when_lazy, with,
};
