//! Conditional inclusion of followers.
//!
//! Conditions resolve exactly once, eagerly, when the combinator is
//! evaluated, before the surrounding emission call executes and before any
//! node exists. The discarded branch is dropped unapplied.

use crate::follower::{Arg, Follower};
use crate::node::BuilderNode;

/// Include `arg` when `condition` holds; otherwise a no-op.
pub fn when<'a, N: BuilderNode + 'a>(condition: bool, arg: Arg<'a, N>) -> Arg<'a, N> {
    if condition {
        arg
    } else {
        Arg::Follower(Follower::Noop)
    }
}

/// Include `arg` when the supplier is present and produces `true`.
///
/// An absent supplier resolves to false, as does a supplier producing no
/// value.
pub fn when_lazy<'a, N, F>(condition: Option<F>, arg: Arg<'a, N>) -> Arg<'a, N>
where
    N: BuilderNode + 'a,
    F: FnOnce() -> Option<bool>,
{
    when(condition.and_then(|resolve| resolve()).unwrap_or(false), arg)
}

/// Apply exactly one of the two arguments.
pub fn either<'a, N: BuilderNode + 'a>(
    condition: bool,
    when_true: Arg<'a, N>,
    when_false: Arg<'a, N>,
) -> Arg<'a, N> {
    if condition { when_true } else { when_false }
}
