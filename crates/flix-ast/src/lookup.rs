//! AST node lookup utilities.
//!
//! Provides utilities for finding nodes by predicate or by byte offset,
//! enabling reverse lookup from source positions to AST nodes.

use std::ops::ControlFlow;

use crate::node::{Child, Node};
use crate::walk::{Listener, WalkAction, advance, walk};

struct FindFirst<P> {
    predicate: P,
}

impl<'ast, P> Listener<'ast, Node<'ast>> for FindFirst<P>
where
    P: FnMut(Node<'ast>) -> bool,
{
    fn enter_every_node(&mut self, node: Node<'ast>) -> ControlFlow<Node<'ast>, WalkAction> {
        if (self.predicate)(node) {
            ControlFlow::Break(node)
        } else {
            advance()
        }
    }
}

/// Find the first node, in walk order, satisfying `predicate`.
///
/// The walk stops at the first match.
pub fn find_first<'ast>(
    tree: impl Into<Child<'ast>>,
    predicate: impl FnMut(Node<'ast>) -> bool,
) -> Option<Node<'ast>> {
    match walk(tree, &mut FindFirst { predicate }) {
        ControlFlow::Break(node) => Some(node),
        ControlFlow::Continue(()) => None,
    }
}

struct Enclosing<'ast> {
    offset: usize,
    found: Vec<Node<'ast>>,
}

impl<'ast> Listener<'ast> for Enclosing<'ast> {
    fn enter_every_node(&mut self, node: Node<'ast>) -> ControlFlow<(), WalkAction> {
        if node.span().contains(self.offset) {
            self.found.push(node);
            advance()
        } else {
            ControlFlow::Continue(WalkAction::Skip)
        }
    }
}

/// Find all nodes whose span contains `offset`, from innermost to outermost.
///
/// Subtrees that do not contain the offset are skipped.
pub fn nodes_at<'ast>(tree: impl Into<Child<'ast>>, offset: usize) -> Vec<Node<'ast>> {
    let mut enclosing = Enclosing {
        offset,
        found: Vec::new(),
    };
    let _ = walk(tree, &mut enclosing);
    enclosing.found.reverse();
    enclosing.found
}

/// Find the innermost node whose span contains `offset`.
pub fn node_at<'ast>(tree: impl Into<Child<'ast>>, offset: usize) -> Option<Node<'ast>> {
    nodes_at(tree, offset).into_iter().next()
}

#[cfg(test)]
mod tests {
    use flix_core::Span;

    use super::*;
    use crate::expr::{Expr, ExprKind};
    use crate::literal::Literal;
    use crate::name::{Ident, QName};
    use crate::node::NodeKind;

    /// `f(x, 42)`
    fn call() -> Expr {
        let x = Expr::var(QName::simple(Ident::new(Span::new(2, 3), "x").unwrap()));
        let f = Expr::var(QName::simple(Ident::new(Span::new(0, 1), "f").unwrap()));
        let answer = Expr::literal(Literal::from_lexeme(Span::new(5, 7), "42").unwrap());
        Expr::new(
            Span::new(0, 8),
            ExprKind::Apply {
                func: f,
                args: vec![x, answer],
            },
        )
    }

    #[test]
    fn test_find_first_stops_at_match() {
        let expr = call();
        let found = find_first(&expr, |node| node.kind() == NodeKind::ExprVar).unwrap();
        assert_eq!(found.span(), Span::new(0, 1));

        assert!(find_first(&expr, |node| node.kind() == NodeKind::ExprMatch).is_none());
    }

    #[test]
    fn test_nodes_at_innermost_first() {
        let expr = call();
        let kinds: Vec<_> = nodes_at(&expr, 6).iter().map(|node| node.kind()).collect();
        assert_eq!(kinds, [NodeKind::LitInt, NodeKind::ExprApply]);

        assert_eq!(
            node_at(&expr, 6).map(|node| node.span()),
            Some(Span::new(5, 7))
        );
        assert!(nodes_at(&expr, 20).is_empty());
    }
}
