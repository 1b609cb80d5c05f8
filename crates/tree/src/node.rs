//! Seams between the builder core and the foreign node representation.

use crate::session::{Session, TreeConfig};

/// Operations the builder needs from a foreign node.
///
/// The core never inspects node contents; it only appends children and text,
/// sets attributes, and unions class names. Everything else (storage layout,
/// serialization, lookup) belongs to the node crate.
pub trait BuilderNode: Sized {
    /// Append `child` as the last child of this node.
    fn append_child(&mut self, child: Self);

    /// Set attribute `name`. `None` marks a presence-only attribute.
    ///
    /// Repeated calls append entries in call order; serialization preserves
    /// that order.
    fn set_attribute(&mut self, name: &str, value: Option<&str>);

    /// Append a literal text child.
    fn append_text(&mut self, text: &str);

    /// Union `name` into this node's class set (idempotent).
    fn add_class(&mut self, name: &str);
}

/// Produces one foreign node per emission.
///
/// `id` is the identifier split off the emitted name (`"div#app"` yields
/// `("div", Some("app"))`); `config` is the session's ambient context.
pub trait NodeFactory<N> {
    fn create(&mut self, name: &str, id: Option<&str>, config: &TreeConfig) -> N;
}

impl<N, F> NodeFactory<N> for F
where
    F: FnMut(&str, Option<&str>, &TreeConfig) -> N,
{
    fn create(&mut self, name: &str, id: Option<&str>, config: &TreeConfig) -> N {
        self(name, id, config)
    }
}

/// A declaration-capable object: one routine that issues emission calls
/// against the session it is given.
///
/// Implementors are reusable fragments; embedding runs `declare` in a fresh
/// session and adopts the resulting top-level nodes.
pub trait Declare<N: BuilderNode> {
    fn declare(&self, session: &mut Session<N>);
}
