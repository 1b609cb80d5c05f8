//! Iteration over finite sources.
//!
//! Every combinator snapshots its source eagerly at construction, then
//! produces either one nested declaration per item (`repeat`, `each`,
//! `each_indexed`, `each_variant`) or one follower per item (`map_each`,
//! `map_each_indexed`), in source order. Empty sources yield zero
//! invocations, never an error.

use crate::follower::Arg;
use crate::node::BuilderNode;
use crate::session::Session;

/// Run `body` once per index in `0..count`, each invocation declaring
/// siblings under the emitted node.
pub fn repeat<'a, N, F>(count: usize, body: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    F: FnMut(&mut Session<N>, usize) + 'a,
{
    each(0..count, body)
}

/// Run `body` once per item, in source order.
pub fn each<'a, N, I, F>(items: I, mut body: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    I: IntoIterator,
    I::Item: 'a,
    F: FnMut(&mut Session<N>, I::Item) + 'a,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    Arg::Block(Box::new(move |session: &mut Session<N>| {
        for item in items {
            body(session, item);
        }
    }))
}

/// Run `body` once per item with its zero-based position in the source.
pub fn each_indexed<'a, N, I, F>(items: I, mut body: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    I: IntoIterator,
    I::Item: 'a,
    F: FnMut(&mut Session<N>, usize, I::Item) + 'a,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    Arg::Block(Box::new(move |session: &mut Session<N>| {
        for (index, item) in items.into_iter().enumerate() {
            body(session, index, item);
        }
    }))
}

/// Finite types that enumerate their declared values in declaration order.
pub trait Variants: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];
}

/// Run `body` once per declared value of `T`, in declaration order.
pub fn each_variant<'a, N, T, F>(body: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    T: Variants,
    F: FnMut(&mut Session<N>, T) + 'a,
{
    each(T::VARIANTS.iter().copied(), body)
}

/// Map each item to a follower, yielding a sequence suitable for passing
/// directly among the arguments of a single emission call.
pub fn map_each<'a, N, I, F>(items: I, f: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    I: IntoIterator,
    F: FnMut(I::Item) -> Arg<'a, N>,
{
    Arg::Seq(items.into_iter().map(f).collect())
}

/// Map each item and its zero-based position to a follower.
pub fn map_each_indexed<'a, N, I, F>(items: I, mut f: F) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> Arg<'a, N>,
{
    Arg::Seq(
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| f(index, item))
            .collect(),
    )
}
