//! Style descriptors carrying resolved class names.

use dom::Node;
use tree::{Arg, classes};

/// A style handle: the set of class names a styled node receives.
///
/// Stands in for a stylesheet-backed descriptor; the builder only ever sees
/// the class names it resolves to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    names: Vec<String>,
}

impl Style {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    /// Chain an additional class name.
    pub fn and(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn class_names(&self) -> &[String] {
        &self.names
    }
}

/// Pass a style wherever a follower is expected.
///
/// The merge policy unions the style's class names into the node's class
/// set instead of invoking it as a mutator.
pub fn styled<'a>(style: &Style) -> Arg<'a, Node> {
    classes(style.class_names().iter().cloned())
}
