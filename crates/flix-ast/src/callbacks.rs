//! A listener assembled from closures keyed by node kind.
//!
//! Useful when a pass only cares about a handful of kinds and wants to keep
//! its state in one place instead of writing a listener type.
//!
//! ```
//! use std::ops::ControlFlow;
//! use flix_ast::callbacks::Callbacks;
//! use flix_ast::walk::{advance, walk};
//! use flix_ast::{NodeKind, Root};
//!
//! let root = Root::new(Default::default(), vec![], vec![]);
//! let mut roots = Callbacks::<usize, ()>::new(0).on_enter(NodeKind::Root, |count, _| {
//!     *count += 1;
//!     advance()
//! });
//! let _ = walk(&root, &mut roots);
//! assert_eq!(roots.into_state(), 1);
//! ```

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::node::{ErrorNode, Node, NodeKind, Terminal};
use crate::walk::{Listener, WalkAction, advance};

type EnterFn<'ast, S, B> = Box<dyn FnMut(&mut S, Node<'ast>) -> ControlFlow<B, WalkAction> + 'ast>;
type ExitFn<'ast, S, B> = Box<dyn FnMut(&mut S, Node<'ast>) -> ControlFlow<B> + 'ast>;
type TerminalFn<'ast, S, B> = Box<dyn FnMut(&mut S, Terminal<'ast>) -> ControlFlow<B> + 'ast>;
type ErrorFn<'ast, S, B> = Box<dyn FnMut(&mut S, &'ast ErrorNode) -> ControlFlow<B> + 'ast>;

/// Sparse table of handlers sharing a single state `S`.
///
/// At most one enter and one exit handler per kind; registering again
/// replaces the previous handler. Kinds without a handler are walked
/// through.
pub struct Callbacks<'ast, S, B = ()> {
    state: S,
    enter: HashMap<NodeKind, EnterFn<'ast, S, B>>,
    exit: HashMap<NodeKind, ExitFn<'ast, S, B>>,
    enter_every: Option<EnterFn<'ast, S, B>>,
    exit_every: Option<ExitFn<'ast, S, B>>,
    terminal: Option<TerminalFn<'ast, S, B>>,
    error: Option<ErrorFn<'ast, S, B>>,
}

impl<'ast, S, B> Callbacks<'ast, S, B> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            enter: HashMap::new(),
            exit: HashMap::new(),
            enter_every: None,
            exit_every: None,
            terminal: None,
            error: None,
        }
    }

    pub fn on_enter(
        mut self,
        kind: NodeKind,
        handler: impl FnMut(&mut S, Node<'ast>) -> ControlFlow<B, WalkAction> + 'ast,
    ) -> Self {
        self.enter.insert(kind, Box::new(handler));
        self
    }

    pub fn on_exit(
        mut self,
        kind: NodeKind,
        handler: impl FnMut(&mut S, Node<'ast>) -> ControlFlow<B> + 'ast,
    ) -> Self {
        self.exit.insert(kind, Box::new(handler));
        self
    }

    /// Runs before the kind-specific enter handler of every node.
    pub fn on_enter_every(
        mut self,
        handler: impl FnMut(&mut S, Node<'ast>) -> ControlFlow<B, WalkAction> + 'ast,
    ) -> Self {
        self.enter_every = Some(Box::new(handler));
        self
    }

    /// Runs after the kind-specific exit handler of every node.
    pub fn on_exit_every(
        mut self,
        handler: impl FnMut(&mut S, Node<'ast>) -> ControlFlow<B> + 'ast,
    ) -> Self {
        self.exit_every = Some(Box::new(handler));
        self
    }

    pub fn on_terminal(
        mut self,
        handler: impl FnMut(&mut S, Terminal<'ast>) -> ControlFlow<B> + 'ast,
    ) -> Self {
        self.terminal = Some(Box::new(handler));
        self
    }

    pub fn on_error(
        mut self,
        handler: impl FnMut(&mut S, &'ast ErrorNode) -> ControlFlow<B> + 'ast,
    ) -> Self {
        self.error = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<'ast, S, B> Listener<'ast, B> for Callbacks<'ast, S, B> {
    fn enter_every_node(&mut self, node: Node<'ast>) -> ControlFlow<B, WalkAction> {
        let every = match &mut self.enter_every {
            Some(handler) => handler(&mut self.state, node)?,
            None => WalkAction::Advance,
        };
        let own = match self.enter.get_mut(&node.kind()) {
            Some(handler) => handler(&mut self.state, node)?,
            None => WalkAction::Advance,
        };
        if every == WalkAction::Skip || own == WalkAction::Skip {
            ControlFlow::Continue(WalkAction::Skip)
        } else {
            advance()
        }
    }

    fn exit_every_node(&mut self, node: Node<'ast>) -> ControlFlow<B> {
        let own = match self.exit.get_mut(&node.kind()) {
            Some(handler) => handler(&mut self.state, node),
            None => ControlFlow::Continue(()),
        };
        let every = match &mut self.exit_every {
            Some(handler) => handler(&mut self.state, node),
            None => ControlFlow::Continue(()),
        };
        match own {
            ControlFlow::Break(b) => ControlFlow::Break(b),
            ControlFlow::Continue(()) => every,
        }
    }

    fn visit_terminal(&mut self, terminal: Terminal<'ast>) -> ControlFlow<B> {
        match &mut self.terminal {
            Some(handler) => handler(&mut self.state, terminal),
            None => ControlFlow::Continue(()),
        }
    }

    fn visit_error_node(&mut self, error: &'ast ErrorNode) -> ControlFlow<B> {
        match &mut self.error {
            Some(handler) => handler(&mut self.state, error),
            None => ControlFlow::Continue(()),
        }
    }
}
