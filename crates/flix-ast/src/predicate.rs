//! Datalog predicates appearing in fact heads and rule bodies.

use flix_core::Span;
use serde::Serialize;

use crate::error::debug_check_span;
use crate::expr::Expr;
use crate::name::{Ident, QName};
use crate::node::ErrorNode;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Predicate {
    pub span: Span,
    pub kind: PredicateKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PredicateKind {
    /// `true`
    True,
    /// `false`
    False,
    /// `Name(t1, ..., tn)`: a relational atom or a filter function.
    /// Which one is decided once names are resolved.
    Ambiguous { name: QName, terms: Vec<Expr> },
    /// `x := e`
    Equal { var: Ident, value: Expr },
    /// `x != y`
    NotEqual { lhs: Ident, rhs: Ident },
    /// `x <- e`: binds `x` to each element generated by `e`.
    Loop { var: Ident, source: Expr },
    Error(ErrorNode),
}

impl Predicate {
    pub fn new(span: Span, kind: PredicateKind) -> Self {
        Self {
            span: debug_check_span(span),
            kind,
        }
    }

    pub fn atom(span: Span, name: QName, terms: Vec<Expr>) -> Self {
        Self::new(span, PredicateKind::Ambiguous { name, terms })
    }

    pub fn error(error: ErrorNode) -> Self {
        Self::new(error.span, PredicateKind::Error(error))
    }

    /// Name of the relation or filter this predicate refers to, if any.
    pub fn relation_name(&self) -> Option<&QName> {
        match &self.kind {
            PredicateKind::Ambiguous { name, .. } => Some(name),
            _ => None,
        }
    }
}
