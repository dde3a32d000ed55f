//! Pattern types for the AST.
//!
//! Patterns appear in match rules and let-match bindings:
//! - `case Some(x) => ...`
//! - `let (a, b) = pair in ...`
//! - `case @{ k -> v, rest... } => ...`

use flix_core::Span;
use serde::Serialize;

use crate::error::debug_check_span;
use crate::literal::Literal;
use crate::name::{Ident, QName};
use crate::node::ErrorNode;

/// A pattern in the AST.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    pub span: Span,
    pub kind: Box<PatternKind>,
}

impl Pattern {
    pub fn new(span: Span, kind: PatternKind) -> Self {
        Self {
            span: debug_check_span(span),
            kind: Box::new(kind),
        }
    }

    pub fn wildcard(span: Span) -> Self {
        Self::new(span, PatternKind::Wildcard)
    }

    pub fn var(ident: Ident) -> Self {
        Self::new(ident.span(), PatternKind::Var(ident))
    }

    pub fn literal(literal: Literal) -> Self {
        Self::new(literal.span, PatternKind::Literal(literal))
    }

    /// Build a parenthesized pattern: `()` and `(a, b, ...)` become tuples,
    /// while `(p)` is `p` itself.
    pub fn tuple(span: Span, elements: Vec<Pattern>) -> Self {
        match <[Pattern; 1]>::try_from(elements) {
            Ok([only]) => only,
            Err(elements) => Self::new(span, PatternKind::Tuple(elements)),
        }
    }

    /// A placeholder for a pattern the parser could not recover.
    pub fn error(error: ErrorNode) -> Self {
        Self::new(error.span, PatternKind::Error(error))
    }
}

/// The different kinds of patterns.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PatternKind {
    /// `_`
    Wildcard,

    /// Binds the matched value: `x`
    Var(Ident),

    /// `42`, `true`. Traversed as the literal node itself.
    Literal(Literal),

    /// Enum case: `Color.Red`, `Some(x)`, `Shape/Circle(r)`
    Tag {
        enum_name: Option<QName>,
        tag: Ident,
        pattern: Option<Pattern>,
    },

    /// `()`, `(a, b)`. Never exactly one element; see [`Pattern::tuple`].
    Tuple(Vec<Pattern>),

    /// `Nil`
    Nil,

    /// `None`
    OptionNone,

    /// `x :: xs`
    Cons { head: Pattern, tail: Pattern },

    /// `#[a, b, rest...]`
    Vector {
        elements: Vec<Pattern>,
        rest: Option<Pattern>,
    },

    /// `#{a, b, rest...}`
    Set {
        elements: Vec<Pattern>,
        rest: Option<Pattern>,
    },

    /// `@{k -> v, rest...}`
    Map {
        entries: Vec<PatternKeyValue>,
        rest: Option<Pattern>,
    },

    /// Error pattern (for error recovery).
    Error(ErrorNode),
}

/// A `key -> value` entry of a map pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PatternKeyValue {
    pub span: Span,
    pub key: Pattern,
    pub value: Pattern,
}

impl PatternKeyValue {
    pub fn new(key: Pattern, value: Pattern) -> Self {
        Self {
            span: key.span.cover(value.span),
            key,
            value,
        }
    }
}

impl Pattern {
    /// Names bound by this pattern, left to right.
    pub fn bound_vars(&self) -> Vec<&Ident> {
        let mut vars = Vec::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars<'a>(&'a self, vars: &mut Vec<&'a Ident>) {
        match &*self.kind {
            PatternKind::Var(ident) => vars.push(ident),
            PatternKind::Tag { pattern, .. } => {
                if let Some(pattern) = pattern {
                    pattern.collect_vars(vars);
                }
            }
            PatternKind::Tuple(elements) => {
                for element in elements {
                    element.collect_vars(vars);
                }
            }
            PatternKind::Cons { head, tail } => {
                head.collect_vars(vars);
                tail.collect_vars(vars);
            }
            PatternKind::Vector { elements, rest } | PatternKind::Set { elements, rest } => {
                for element in elements {
                    element.collect_vars(vars);
                }
                if let Some(rest) = rest {
                    rest.collect_vars(vars);
                }
            }
            PatternKind::Map { entries, rest } => {
                for entry in entries {
                    entry.key.collect_vars(vars);
                    entry.value.collect_vars(vars);
                }
                if let Some(rest) = rest {
                    rest.collect_vars(vars);
                }
            }
            PatternKind::Wildcard
            | PatternKind::Literal(_)
            | PatternKind::Nil
            | PatternKind::OptionNone
            | PatternKind::Error(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(text: &str, start: usize) -> Ident {
        Ident::new(Span::new(start, start + text.len()), text).unwrap()
    }

    #[test]
    fn test_bound_vars_in_order() {
        // (x, Some(y) :: rest)
        let some_y = Pattern::new(
            Span::new(4, 11),
            PatternKind::Tag {
                enum_name: None,
                tag: ident("Some", 4),
                pattern: Some(Pattern::var(ident("y", 9))),
            },
        );
        let cons = Pattern::new(
            Span::new(4, 19),
            PatternKind::Cons {
                head: some_y,
                tail: Pattern::var(ident("rest", 15)),
            },
        );
        let tuple = Pattern::new(
            Span::new(0, 20),
            PatternKind::Tuple(vec![Pattern::var(ident("x", 1)), cons]),
        );

        let names: Vec<_> = tuple.bound_vars().iter().map(|v| v.as_str()).collect();
        assert_eq!(names, ["x", "y", "rest"]);
    }

    #[test]
    fn test_key_value_span_covers_both_sides() {
        let entry = PatternKeyValue::new(
            Pattern::var(ident("k", 2)),
            Pattern::wildcard(Span::new(7, 8)),
        );
        assert_eq!(entry.span, Span::new(2, 8));
    }
}
