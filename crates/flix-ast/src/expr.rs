//! Expression types for the AST.

use flix_core::Span;
use serde::Serialize;

use crate::decl::Argument;
use crate::error::debug_check_span;
use crate::literal::Literal;
use crate::name::{Ident, QName};
use crate::node::ErrorNode;
use crate::non_empty::NonEmpty;
use crate::ops::{BinaryOp, Operator, UnaryOp};
use crate::pattern::Pattern;
use crate::types::Type;

/// An expression in the AST.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Expr {
    pub span: Span,
    pub kind: Box<ExprKind>,
}

impl Expr {
    pub fn new(span: Span, kind: ExprKind) -> Self {
        Self {
            span: debug_check_span(span),
            kind: Box::new(kind),
        }
    }

    pub fn literal(literal: Literal) -> Self {
        Self::new(literal.span, ExprKind::Primary(literal))
    }

    pub fn var(name: QName) -> Self {
        Self::new(name.span, ExprKind::Var(name))
    }

    /// Build a parenthesized expression: `()` and `(a, b, ...)` become
    /// tuples, while `(e)` is `e` itself.
    pub fn tuple(span: Span, elements: Vec<Expr>) -> Self {
        match <[Expr; 1]>::try_from(elements) {
            Ok([only]) => only,
            Err(elements) => Self::new(span, ExprKind::Tuple(elements)),
        }
    }

    /// `lhs op rhs`, spanning both operands.
    pub fn binary(lhs: Expr, op: Operator<BinaryOp>, rhs: Expr) -> Self {
        Self::new(lhs.span.cover(rhs.span), ExprKind::Binary { lhs, op, rhs })
    }

    /// A placeholder for an expression the parser could not recover.
    pub fn error(error: ErrorNode) -> Self {
        Self::new(error.span, ExprKind::Error(error))
    }

    pub fn is_error(&self) -> bool {
        matches!(*self.kind, ExprKind::Error(_))
    }
}

/// Expression kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ExprKind {
    /// A literal in expression position. Traversed as the literal node itself.
    Primary(Literal),

    // =========================================================================
    // Binding and control flow
    // =========================================================================
    /// `let pattern = value; body`
    LetMatch {
        pattern: Pattern,
        value: Expr,
        body: Expr,
    },

    /// `if (cond) then_branch else else_branch`
    IfThenElse {
        cond: Expr,
        then_branch: Expr,
        else_branch: Expr,
    },

    /// `match scrutinee with { case p => e ... }`
    Match {
        scrutinee: Expr,
        rules: NonEmpty<MatchRule>,
    },

    /// `switch { case cond => e ... }`
    Switch { rules: NonEmpty<SwitchRule> },

    /// Function application: `f(x, y)`
    Apply { func: Expr, args: Vec<Expr> },

    // =========================================================================
    // Names and constructors
    // =========================================================================
    /// Variable or definition reference: `x`, `List/map`
    Var(QName),

    /// Enum case construction: `Red`, `Color.Red`, `Some(1)`
    Tag {
        enum_name: Option<QName>,
        tag: Ident,
        arg: Option<Expr>,
    },

    /// `()`, `(a, b)`. Never exactly one element; see [`Expr::tuple`].
    Tuple(Vec<Expr>),

    /// `_`
    Wild,

    /// `Nil`
    Nil,

    /// `None`
    OptionNone,

    /// `Some(e)`
    OptionSome(Expr),

    /// `head :: tail`
    Cons { head: Expr, tail: Expr },

    /// `#[a, b, c]`
    Vector(Vec<Expr>),

    /// `#{a, b, c}`
    Set(Vec<Expr>),

    /// `@{k -> v, ...}`
    Map(Vec<KeyValue>),

    // =========================================================================
    // Lambdas and quantifiers
    // =========================================================================
    /// `x -> body`
    UnaryLambda { param: Ident, body: Expr },

    /// `(x, y) -> body`
    Lambda { params: NonEmpty<Ident>, body: Expr },

    /// `∃(x: Int). body`
    Existential {
        params: NonEmpty<Argument>,
        body: Expr,
    },

    /// `∀(x: Int). body`
    Universal {
        params: NonEmpty<Argument>,
        body: Expr,
    },

    // =========================================================================
    // Operators
    // =========================================================================
    /// `-x`, `!b`
    Unary {
        op: Operator<UnaryOp>,
        operand: Expr,
    },

    /// `a + b`, `a && b`, `a ⊔ b`. The node kind follows the operator class.
    Binary {
        lhs: Expr,
        op: Operator<BinaryOp>,
        rhs: Expr,
    },

    /// Backtick application: ``a `f` b``
    Infix { lhs: Expr, func: QName, rhs: Expr },

    /// `e: Type`
    Ascribe { expr: Expr, ty: Type },

    /// Error expression (for error recovery).
    Error(ErrorNode),
}

/// `case pattern => body` inside a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MatchRule {
    pub span: Span,
    pub pattern: Pattern,
    pub body: Expr,
}

impl MatchRule {
    pub fn new(pattern: Pattern, body: Expr) -> Self {
        Self {
            span: pattern.span.cover(body.span),
            pattern,
            body,
        }
    }
}

/// `case cond => body` inside a switch.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SwitchRule {
    pub span: Span,
    pub cond: Expr,
    pub body: Expr,
}

impl SwitchRule {
    pub fn new(cond: Expr, body: Expr) -> Self {
        Self {
            span: cond.span.cover(body.span),
            cond,
            body,
        }
    }
}

/// `key -> value` entry of a map literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct KeyValue {
    pub span: Span,
    pub key: Expr,
    pub value: Expr,
}

impl KeyValue {
    pub fn new(key: Expr, value: Expr) -> Self {
        Self {
            span: key.span.cover(value.span),
            key,
            value,
        }
    }
}
