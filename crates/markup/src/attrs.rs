//! Shorthand attribute and content followers.
//!
//! Pure delegations to the core attribute follower with a fixed name; the
//! core's omission rules (absent name or value) apply unchanged.

use std::fmt;

use dom::Node;
use tree::{Arg, AttrValue, attr, with};

/// Shorthand for the charset attribute.
pub fn charset<'a>(encoding: impl AttrValue) -> Arg<'a, Node> {
    attr("charset", encoding)
}

/// Shorthand for the name attribute.
pub fn name<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("name", value)
}

/// Shorthand for the content attribute.
pub fn content<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("content", value)
}

/// Shorthand for the rel attribute.
pub fn rel<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("rel", value)
}

/// Shorthand for the href attribute.
pub fn href<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("href", value)
}

/// Shorthand for the src attribute.
pub fn src<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("src", value)
}

/// Shorthand for the id attribute.
pub fn id<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("id", value)
}

/// Shorthand for the class attribute.
pub fn class<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("class", value)
}

/// Shorthand for the title attribute.
pub fn title<'a>(value: impl AttrValue) -> Arg<'a, Node> {
    attr("title", value)
}

/// Append a `<code>` child containing `text`.
pub fn code<'a>(text: impl fmt::Display) -> Arg<'a, Node> {
    let text = text.to_string();
    with(move |parent: &mut Node| {
        let mut code = Node::element("code");
        code.append(Node::text(text));
        parent.append(code);
    })
}
