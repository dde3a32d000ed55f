//! Listener-based traversal of syntax trees.
//!
//! [`walk`] visits a tree depth-first, left to right, and reports each node
//! to a [`Listener`] on the way down (enter) and on the way up (exit).
//! Terminals are reported between child nodes in source order; error
//! placeholders are reported once and never descended into.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use flix_ast::walk::{walk, Listener, WalkAction};
//! use flix_ast::{Expr, ExprKind, Root};
//!
//! #[derive(Default)]
//! struct CountIfs(usize);
//!
//! impl<'ast> Listener<'ast> for CountIfs {
//!     fn enter_expr(&mut self, expr: &'ast Expr) -> ControlFlow<(), WalkAction> {
//!         if matches!(*expr.kind, ExprKind::IfThenElse { .. }) {
//!             self.0 += 1;
//!         }
//!         ControlFlow::Continue(WalkAction::Advance)
//!     }
//! }
//!
//! let root = Root::new(Default::default(), vec![], vec![]);
//! let mut counter = CountIfs::default();
//! let _ = walk(&root, &mut counter);
//! assert_eq!(counter.0, 0);
//! ```

use std::ops::ControlFlow;

use tracing::trace;

use crate::decl::{
    Annotation, Argument, Attribute, Case, ContextBound, Decl, Import, Index, Root, TypeParam,
};
use crate::expr::{Expr, KeyValue, MatchRule, SwitchRule};
use crate::literal::Literal;
use crate::node::{Child, ErrorNode, Node, Terminal};
use crate::pattern::{Pattern, PatternKeyValue};
use crate::predicate::Predicate;
use crate::types::Type;

/// Controls whether to descend into children during a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
    /// Continue walking and descend into the node's children.
    Advance,
    /// Skip the node's children. Its exit callbacks still run.
    Skip,
}

impl WalkAction {
    fn and(self, other: WalkAction) -> WalkAction {
        match (self, other) {
            (WalkAction::Advance, WalkAction::Advance) => WalkAction::Advance,
            _ => WalkAction::Skip,
        }
    }
}

/// Shorthand for the result that keeps a walk descending.
pub const fn advance<B>() -> ControlFlow<B, WalkAction> {
    ControlFlow::Continue(WalkAction::Advance)
}

/// Callbacks invoked by [`walk`].
///
/// Every method defaults to doing nothing, so implementors override only the
/// hooks they care about. `B` is the value a listener can break out of the
/// walk with.
///
/// For each node the walker calls, in order: [`enter_every_node`], the
/// node's own `enter_*` hook, the children, the node's own `exit_*` hook,
/// then [`exit_every_node`]. A break from [`enter_every_node`] suppresses
/// both of the node's own hooks; [`exit_every_node`] still runs for it.
///
/// [`enter_every_node`]: Listener::enter_every_node
/// [`exit_every_node`]: Listener::exit_every_node
pub trait Listener<'ast, B = ()> {
    /// Called before the node-specific enter hook of every node.
    fn enter_every_node(&mut self, _node: Node<'ast>) -> ControlFlow<B, WalkAction> {
        advance()
    }

    /// Called after the node-specific exit hook of every node.
    fn exit_every_node(&mut self, _node: Node<'ast>) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    /// Called for names and operator tokens, in source order.
    fn visit_terminal(&mut self, _terminal: Terminal<'ast>) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    /// Called for error placeholders instead of enter and exit.
    fn visit_error_node(&mut self, _error: &'ast ErrorNode) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    // =========================================================================
    // Compilation unit
    // =========================================================================

    fn enter_root(&mut self, _root: &'ast Root) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_root(&mut self, _root: &'ast Root) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_import(&mut self, _import: &'ast Import) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_import(&mut self, _import: &'ast Import) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn enter_decl(&mut self, _decl: &'ast Decl) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_decl(&mut self, _decl: &'ast Decl) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_annotation(&mut self, _annotation: &'ast Annotation) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_annotation(&mut self, _annotation: &'ast Annotation) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_argument(&mut self, _argument: &'ast Argument) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_argument(&mut self, _argument: &'ast Argument) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_attribute(&mut self, _attribute: &'ast Attribute) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_attribute(&mut self, _attribute: &'ast Attribute) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_index(&mut self, _index: &'ast Index) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_index(&mut self, _index: &'ast Index) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_case(&mut self, _case: &'ast Case) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_case(&mut self, _case: &'ast Case) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_type_param(&mut self, _param: &'ast TypeParam) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_type_param(&mut self, _param: &'ast TypeParam) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_context_bound(&mut self, _bound: &'ast ContextBound) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_context_bound(&mut self, _bound: &'ast ContextBound) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Not called for literal expressions; those go to [`enter_literal`].
    ///
    /// [`enter_literal`]: Listener::enter_literal
    fn enter_expr(&mut self, _expr: &'ast Expr) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_expr(&mut self, _expr: &'ast Expr) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_match_rule(&mut self, _rule: &'ast MatchRule) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_match_rule(&mut self, _rule: &'ast MatchRule) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_switch_rule(&mut self, _rule: &'ast SwitchRule) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_switch_rule(&mut self, _rule: &'ast SwitchRule) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_key_value(&mut self, _entry: &'ast KeyValue) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_key_value(&mut self, _entry: &'ast KeyValue) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    // =========================================================================
    // Patterns, types, predicates, literals
    // =========================================================================

    fn enter_pattern(&mut self, _pattern: &'ast Pattern) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_pattern(&mut self, _pattern: &'ast Pattern) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_pattern_key_value(
        &mut self,
        _entry: &'ast PatternKeyValue,
    ) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_pattern_key_value(&mut self, _entry: &'ast PatternKeyValue) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_type(&mut self, _ty: &'ast Type) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_type(&mut self, _ty: &'ast Type) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_predicate(&mut self, _predicate: &'ast Predicate) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_predicate(&mut self, _predicate: &'ast Predicate) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }

    fn enter_literal(&mut self, _literal: &'ast Literal) -> ControlFlow<B, WalkAction> {
        advance()
    }

    fn exit_literal(&mut self, _literal: &'ast Literal) -> ControlFlow<B> {
        ControlFlow::Continue(())
    }
}

/// Pending work. `Exit` is pushed before a node's children so it pops after
/// them. `own` records whether the node's own `enter_*` hook ran, so a break
/// from `enter_every_node` never produces an unmatched `exit_*`.
enum Frame<'ast> {
    Visit(Child<'ast>),
    Exit { node: Node<'ast>, own: bool },
}

/// Walk `tree` depth-first, reporting to `listener`.
///
/// The walk runs off an explicit stack, so tree depth is bounded by memory
/// rather than by the call stack.
///
/// When a callback returns `Break(b)`, no further nodes are entered. Exit
/// callbacks still run, innermost first, for every node that was entered
/// and not yet exited, and the first `b` is returned. Break values from
/// those exit callbacks are ignored.
pub fn walk<'ast, B, L>(tree: impl Into<Child<'ast>>, listener: &mut L) -> ControlFlow<B>
where
    L: Listener<'ast, B> + ?Sized,
{
    let tree = tree.into();
    trace!(span = %tree.span(), "walk started");

    let mut stack = vec![Frame::Visit(tree)];
    while let Some(frame) = stack.pop() {
        let flow = match frame {
            Frame::Visit(Child::Terminal(terminal)) => listener.visit_terminal(terminal),
            Frame::Visit(Child::Error(error)) => listener.visit_error_node(error),
            Frame::Visit(Child::Node(node)) => {
                let entered = match listener.enter_every_node(node) {
                    ControlFlow::Continue(every) => {
                        stack.push(Frame::Exit { node, own: true });
                        match enter(listener, node) {
                            ControlFlow::Continue(own) => ControlFlow::Continue(every.and(own)),
                            ControlFlow::Break(b) => ControlFlow::Break(b),
                        }
                    }
                    ControlFlow::Break(b) => {
                        stack.push(Frame::Exit { node, own: false });
                        ControlFlow::Break(b)
                    }
                };
                match entered {
                    ControlFlow::Continue(WalkAction::Advance) => {
                        let mark = stack.len();
                        node.for_each_child(|child| stack.push(Frame::Visit(child)));
                        stack[mark..].reverse();
                        ControlFlow::Continue(())
                    }
                    ControlFlow::Continue(WalkAction::Skip) => ControlFlow::Continue(()),
                    ControlFlow::Break(b) => ControlFlow::Break(b),
                }
            }
            Frame::Exit { node, own } => exit(listener, node, own),
        };

        if let ControlFlow::Break(b) = flow {
            let mut unwound = 0usize;
            while let Some(frame) = stack.pop() {
                if let Frame::Exit { node, own } = frame {
                    let _ = exit(listener, node, own);
                    unwound += 1;
                }
            }
            trace!(unwound, "walk cancelled");
            return ControlFlow::Break(b);
        }
    }

    trace!("walk finished");
    ControlFlow::Continue(())
}

/// Run the node's own `enter_*` hook.
fn enter<'ast, B, L>(listener: &mut L, node: Node<'ast>) -> ControlFlow<B, WalkAction>
where
    L: Listener<'ast, B> + ?Sized,
{
    match node {
        Node::Root(root) => listener.enter_root(root),
        Node::Import(import) => listener.enter_import(import),
        Node::Decl(decl) => listener.enter_decl(decl),
        Node::Annotation(annotation) => listener.enter_annotation(annotation),
        Node::Argument(argument) => listener.enter_argument(argument),
        Node::Attribute(attribute) => listener.enter_attribute(attribute),
        Node::Index(index) => listener.enter_index(index),
        Node::Case(case) => listener.enter_case(case),
        Node::TypeParam(param) => listener.enter_type_param(param),
        Node::ContextBound(bound) => listener.enter_context_bound(bound),
        Node::Expr(expr) => listener.enter_expr(expr),
        Node::MatchRule(rule) => listener.enter_match_rule(rule),
        Node::SwitchRule(rule) => listener.enter_switch_rule(rule),
        Node::KeyValue(entry) => listener.enter_key_value(entry),
        Node::Pattern(pattern) => listener.enter_pattern(pattern),
        Node::PatternKeyValue(entry) => listener.enter_pattern_key_value(entry),
        Node::Type(ty) => listener.enter_type(ty),
        Node::Predicate(predicate) => listener.enter_predicate(predicate),
        Node::Literal(literal) => listener.enter_literal(literal),
    }
}

/// Run the node's own `exit_*` hook when `own` is set, then
/// `exit_every_node`.
fn exit<'ast, B, L>(listener: &mut L, node: Node<'ast>, own: bool) -> ControlFlow<B>
where
    L: Listener<'ast, B> + ?Sized,
{
    if !own {
        return listener.exit_every_node(node);
    }
    let own = match node {
        Node::Root(root) => listener.exit_root(root),
        Node::Import(import) => listener.exit_import(import),
        Node::Decl(decl) => listener.exit_decl(decl),
        Node::Annotation(annotation) => listener.exit_annotation(annotation),
        Node::Argument(argument) => listener.exit_argument(argument),
        Node::Attribute(attribute) => listener.exit_attribute(attribute),
        Node::Index(index) => listener.exit_index(index),
        Node::Case(case) => listener.exit_case(case),
        Node::TypeParam(param) => listener.exit_type_param(param),
        Node::ContextBound(bound) => listener.exit_context_bound(bound),
        Node::Expr(expr) => listener.exit_expr(expr),
        Node::MatchRule(rule) => listener.exit_match_rule(rule),
        Node::SwitchRule(rule) => listener.exit_switch_rule(rule),
        Node::KeyValue(entry) => listener.exit_key_value(entry),
        Node::Pattern(pattern) => listener.exit_pattern(pattern),
        Node::PatternKeyValue(entry) => listener.exit_pattern_key_value(entry),
        Node::Type(ty) => listener.exit_type(ty),
        Node::Predicate(predicate) => listener.exit_predicate(predicate),
        Node::Literal(literal) => listener.exit_literal(literal),
    };
    let every = listener.exit_every_node(node);
    match own {
        ControlFlow::Break(b) => ControlFlow::Break(b),
        ControlFlow::Continue(()) => every,
    }
}
