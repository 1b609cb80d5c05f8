//! Followers: deferred units of work applied to a freshly created node.
//!
//! Emission arguments are a tagged union ([`Arg`]) dispatched by a single
//! routine in the session: plain followers apply to the new node in argument
//! order, nested declaration blocks descend with the node as the current
//! attachment point, and sequences (produced by the iteration combinators)
//! flatten in place.

use std::fmt;

use crate::node::BuilderNode;
use crate::session::Session;

/// A deferred unit of work applied to a newly created node.
pub enum Follower<'a, N> {
    /// Generic mutator invoked with the node.
    Mutate(Box<dyn FnOnce(&mut N) + 'a>),
    /// Class-name capability: each name is unioned into the node's class set.
    Classes(Vec<String>),
    /// Resolved no-op (failed condition, omitted content).
    Noop,
}

/// One argument to an emission call.
pub enum Arg<'a, N> {
    /// Apply a follower to the emitted node.
    Follower(Follower<'a, N>),
    /// Run a nested declaration block under the emitted node.
    Block(Box<dyn FnOnce(&mut Session<N>) + 'a>),
    /// A sequence of arguments, applied in order.
    Seq(Vec<Arg<'a, N>>),
}

/// Follower merge policy.
///
/// Followers exposing the class-name capability contribute their names to the
/// node's class set (idempotent union); any other follower is invoked
/// directly with the node.
pub(crate) fn merge<N: BuilderNode>(follower: Follower<'_, N>, node: &mut N) {
    match follower {
        Follower::Mutate(apply) => apply(node),
        Follower::Classes(names) => {
            for name in names {
                node.add_class(&name);
            }
        }
        Follower::Noop => {}
    }
}

/// Values usable as attribute names and values.
///
/// `None` models the absent case: an absent name omits the attribute, an
/// absent value yields a presence-only attribute.
pub trait AttrValue {
    fn into_value(self) -> Option<String>;
}

macro_rules! display_attr_value {
    ($($ty:ty),* $(,)?) => {$(
        impl AttrValue for $ty {
            fn into_value(self) -> Option<String> {
                Some(self.to_string())
            }
        }
    )*};
}

display_attr_value!(
    &str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl<T: AttrValue> AttrValue for Option<T> {
    fn into_value(self) -> Option<String> {
        self.and_then(AttrValue::into_value)
    }
}

/// Follower that sets attribute `name` to `value`.
///
/// An absent or empty name omits the attribute entirely; an absent value sets
/// a presence-only attribute; an empty string sets an explicit empty value.
/// The name check runs at application time, not at construction.
pub fn attr<'a, N: BuilderNode + 'a>(name: impl AttrValue, value: impl AttrValue) -> Arg<'a, N> {
    let name = name.into_value();
    let value = value.into_value();
    Arg::Follower(Follower::Mutate(Box::new(move |node: &mut N| {
        let Some(name) = name else { return };
        if name.is_empty() {
            return;
        }
        node.set_attribute(&name, value.as_deref());
    })))
}

/// Follower that sets a presence-only attribute.
pub fn flag<'a, N: BuilderNode + 'a>(name: impl AttrValue) -> Arg<'a, N> {
    attr(name, None::<&str>)
}

/// Follower that appends a literal text child.
pub fn text<'a, N: BuilderNode + 'a>(content: impl fmt::Display) -> Arg<'a, N> {
    let content = content.to_string();
    Arg::Follower(Follower::Mutate(Box::new(move |node: &mut N| {
        node.append_text(&content);
    })))
}

/// Follower that appends a pre-built node as a child.
pub fn node<'a, N: BuilderNode + 'a>(child: N) -> Arg<'a, N> {
    Arg::Follower(Follower::Mutate(Box::new(move |parent: &mut N| {
        parent.append_child(child);
    })))
}

/// Follower that appends a pre-built node when present.
pub fn node_opt<'a, N: BuilderNode + 'a>(child: Option<N>) -> Arg<'a, N> {
    match child {
        Some(child) => node(child),
        None => Arg::Follower(Follower::Noop),
    }
}

/// Custom follower: invoke arbitrary logic with the emitted node.
pub fn with<'a, N, F>(apply: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    F: FnOnce(&mut N) + 'a,
{
    Arg::Follower(Follower::Mutate(Box::new(apply)))
}

/// Follower carrying the class-name capability.
pub fn classes<'a, N, I, S>(names: I) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arg::Follower(Follower::Classes(names.into_iter().map(Into::into).collect()))
}

/// Nested declaration block: runs with the emitted node as the current
/// attachment point, after all followers of the same call have applied.
pub fn nest<'a, N, F>(block: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    F: FnOnce(&mut Session<N>) + 'a,
{
    Arg::Block(Box::new(block))
}
