//! Deterministic serialization of node trees.
//!
//! Grammar:
//! - empty element: `<name/>`
//! - element with children: `<name>child1child2…</name>`, no separators
//! - attribute with value: `name='value'`; presence-only: `name`;
//!   explicit empty value: `name=''`
//! - attributes space-separated, in declaration order
//! - sibling roots concatenate with no separator
//! - text children are literal content (markup characters escaped)
//!
//! Rendering is a pure function of the tree: re-rendering the same nodes
//! yields identical output.

use std::fmt;

use crate::escape;
use crate::node::{Fragment, Node};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.0 {
            write_node(f, node)?;
        }
        Ok(())
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    match node {
        Node::Text { text } => escape::write_text(f, text),
        Node::Element {
            name,
            attributes,
            children,
        } => {
            write!(f, "<{name}")?;
            for (attr_name, value) in attributes {
                write!(f, " {attr_name}")?;
                if let Some(value) = value {
                    f.write_str("='")?;
                    escape::write_attr_value(f, value)?;
                    f.write_str("'")?;
                }
            }
            if children.is_empty() {
                f.write_str("/>")
            } else {
                f.write_str(">")?;
                for child in children {
                    write_node(f, child)?;
                }
                write!(f, "</{name}>")
            }
        }
    }
}
