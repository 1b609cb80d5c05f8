//! Builder sessions: the emission protocol over an explicit context stack.

use crate::follower::{Arg, merge};
use crate::node::{BuilderNode, NodeFactory};
use crate::stack::ContextStack;

/// Ambient session context handed to the node factory on every creation.
#[derive(Clone, Debug, Default)]
pub struct TreeConfig {
    /// Optional namespace a factory may apply to the nodes it creates.
    pub namespace: Option<String>,
}

/// One tree-building session.
///
/// A session owns its context stack and its root sequence; neither is shared.
/// It begins empty, accumulates top-level nodes through [`Session::emit`] and
/// [`Session::adopt`], and ends when [`Session::finish`] returns the roots.
pub struct Session<N> {
    factory: Box<dyn NodeFactory<N>>,
    config: TreeConfig,
    stack: ContextStack<N>,
    root: Vec<N>,
}

impl<N: BuilderNode> Session<N> {
    pub fn new(factory: impl NodeFactory<N> + 'static) -> Self {
        Self::with_config(factory, TreeConfig::default())
    }

    pub fn with_config(factory: impl NodeFactory<N> + 'static, config: TreeConfig) -> Self {
        Self {
            factory: Box::new(factory),
            config,
            stack: ContextStack::new(),
            root: Vec::new(),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Run one whole session: invoke `declare`, then finish.
    pub fn build(
        factory: impl NodeFactory<N> + 'static,
        declare: impl FnOnce(&mut Self),
    ) -> Vec<N> {
        let mut session = Self::new(factory);
        declare(&mut session);
        session.finish()
    }

    /// Emit one node.
    ///
    /// The node is created through the factory, followers apply in argument
    /// order (sequences flatten in place), then nested blocks run in argument
    /// order with the node as the current attachment point. The completed
    /// node attaches as the last child of the enclosing node, or to the root
    /// sequence at the top level. No argument is evaluated twice.
    pub fn emit<'a>(&mut self, name: &str, args: impl IntoIterator<Item = Arg<'a, N>>)
    where
        N: 'a,
    {
        let (tag, id) = split_name(name);
        let mut node = self.factory.create(tag, id, &self.config);
        log::trace!(target: "tree.emit", "emit <{tag}> at depth {}", self.stack.depth());

        let mut blocks: Vec<Box<dyn FnOnce(&mut Session<N>) + 'a>> = Vec::new();
        for arg in args {
            Self::dispatch(arg, &mut node, &mut blocks);
        }

        let depth = self.stack.depth();
        self.stack.push(node);
        for block in blocks {
            block(self);
            debug_assert_eq!(
                self.stack.depth(),
                depth + 1,
                "nested block must restore stack depth"
            );
        }
        let node = self.stack.pop().expect("context stack holds the emitted node");
        self.attach(node);
    }

    /// Single dispatch over the argument union: followers apply immediately,
    /// blocks queue so they always run after every follower of the call.
    fn dispatch<'a>(
        arg: Arg<'a, N>,
        node: &mut N,
        blocks: &mut Vec<Box<dyn FnOnce(&mut Session<N>) + 'a>>,
    ) {
        match arg {
            Arg::Follower(follower) => merge(follower, node),
            Arg::Block(block) => blocks.push(block),
            Arg::Seq(args) => {
                for arg in args {
                    Self::dispatch(arg, node, blocks);
                }
            }
        }
    }

    /// Append pre-built nodes at the current attachment point, in order.
    pub fn adopt(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.attach(node);
        }
    }

    fn attach(&mut self, node: N) {
        match self.stack.last_mut() {
            Some(parent) => parent.append_child(node),
            None => self.root.push(node),
        }
    }

    /// End the session and hand the root sequence to the caller.
    pub fn finish(self) -> Vec<N> {
        debug_assert!(self.stack.is_empty(), "session finished with unclosed nodes");
        log::debug!(
            target: "tree.session",
            "session finished: {} root nodes, max depth {}",
            self.root.len(),
            self.stack.max_depth()
        );
        self.root
    }
}

fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.split_once('#') {
        Some((tag, id)) if !tag.is_empty() => (tag, (!id.is_empty()).then_some(id)),
        _ => (name, None),
    }
}
