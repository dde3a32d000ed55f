//! Errors raised while constructing AST nodes.
//!
//! A shape error is fatal to the node being built. The producer (usually the
//! parser) reports it and substitutes an [`ErrorNode`](crate::ErrorNode) in
//! place of the rejected node.

use derive_more::{Display, Error};
use flix_core::{CompilationPhase, Diagnostic, Span};

pub type ShapeResult<T> = Result<T, ShapeError>;

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    #[display("identifier must not be empty")]
    EmptyIdent,

    #[display("invalid identifier `{text}`")]
    InvalidIdent { text: String },

    #[display("{what} requires at least one element")]
    EmptySequence { what: &'static str },

    #[display("{what} expects {expected} children, found {found}")]
    ArityMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[display("{what} is not allowed in {context}")]
    Misplaced {
        what: &'static str,
        context: &'static str,
    },

    #[display("invalid literal `{lexeme}`: {reason}")]
    InvalidLiteral { lexeme: String, reason: &'static str },

    #[display("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },

    #[display("span {span} ends before it starts")]
    InvalidSpan { span: Span },
}

impl ShapeError {
    /// Convert into a diagnostic anchored at the span of the rejected node.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        Diagnostic::error(CompilationPhase::AstConstruction, span, self.to_string())
    }
}

/// Span check for composite nodes, asserted in debug builds only.
pub(crate) fn debug_check_span(span: Span) -> Span {
    debug_assert!(span.is_well_formed(), "inverted span {span}");
    span
}

/// Reject spans whose end precedes their start.
pub(crate) fn check_span(span: Span) -> ShapeResult<Span> {
    if span.is_well_formed() {
        Ok(span)
    } else {
        Err(ShapeError::InvalidSpan { span })
    }
}
