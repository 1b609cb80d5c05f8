//! Session construction, document composition, and element helpers.

use dom::{Fragment, Node};
use tree::{Declare, Session, TreeConfig, attr};

use crate::attrs::{href, rel, src};

/// Node factory for the HTML vocabulary.
///
/// Creates one element per emission; a `name#fragment` identifier becomes
/// the `id` attribute. The ambient config is unused here (plain HTML carries
/// no namespace).
pub fn create_element(name: &str, id: Option<&str>, _config: &TreeConfig) -> Node {
    let mut node = Node::element(name);
    if let Some(id) = id {
        node.push_attribute("id", Some(id.to_string()));
    }
    node
}

/// Fresh builder session over the HTML vocabulary.
pub fn session() -> Session<Node> {
    Session::new(create_element)
}

pub fn session_with(config: TreeConfig) -> Session<Node> {
    Session::with_config(create_element, config)
}

/// Run one builder session over `declare` and return its root sequence.
pub fn build(declare: impl FnOnce(&mut Session<Node>)) -> Fragment {
    let mut session = session();
    declare(&mut session);
    Fragment::from(session.finish())
}

/// Render a declaration-capable document to markup text.
pub fn render(document: &impl Declare<Node>) -> String {
    build(|session| document.declare(session)).to_string()
}

/// Document composition and element helpers, available on any markup
/// session, including inside nested declaration blocks.
pub trait HtmlExt {
    /// Embed another document.
    ///
    /// Its declaration runs to completion in a fresh session with its own
    /// context stack; the resulting top-level nodes are then adopted, in
    /// order, at the current attachment point.
    fn embed(&mut self, document: &dyn Declare<Node>);

    /// Write a stylesheet link tag.
    fn stylesheet(&mut self, uri: &str);

    /// Write a preloaded stylesheet pair that swaps in after load.
    fn stylesheet_async(&mut self, uri: &str);

    /// Write a script tag.
    fn script(&mut self, uri: &str);

    /// Write an async script tag.
    fn script_async(&mut self, uri: &str);

    /// Write a module script tag.
    fn module(&mut self, uri: &str);

    /// Write an async module script tag.
    fn module_async(&mut self, uri: &str);
}

impl HtmlExt for Session<Node> {
    fn embed(&mut self, document: &dyn Declare<Node>) {
        let mut embedded = session();
        document.declare(&mut embedded);
        let roots = embedded.finish();
        log::trace!(target: "markup.embed", "embedding {} top-level nodes", roots.len());
        self.adopt(roots);
    }

    fn stylesheet(&mut self, uri: &str) {
        self.emit("link", [rel("stylesheet"), href(uri)]);
    }

    fn stylesheet_async(&mut self, uri: &str) {
        self.emit("link", [
            rel("preload"),
            href(uri),
            attr("as", "style"),
            attr("fetchpriority", "high"),
        ]);
        self.emit("link", [
            rel("stylesheet"),
            href(uri),
            attr("media", "print"),
            attr("onload", "this.media='all'"),
        ]);
    }

    fn script(&mut self, uri: &str) {
        self.emit("script", [src(uri)]);
    }

    fn script_async(&mut self, uri: &str) {
        self.emit("script", [src(uri), attr("async", true)]);
    }

    fn module(&mut self, uri: &str) {
        self.emit("script", [src(uri), attr("type", "module")]);
    }

    fn module_async(&mut self, uri: &str) {
        self.emit("script", [src(uri), attr("async", true), attr("type", "module")]);
    }
}
