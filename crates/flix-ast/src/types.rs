//! Type expressions as written in source code.
//!
//! These are syntactic types only; nothing here is resolved or checked.

use flix_core::Span;
use serde::Serialize;

use crate::error::debug_check_span;
use crate::name::QName;
use crate::node::ErrorNode;
use crate::non_empty::NonEmpty;

/// A type annotation in the AST.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Type {
    pub span: Span,
    pub kind: Box<TypeKind>,
}

/// Kinds of type annotations in source code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TypeKind {
    /// A named type or type variable: `Int`, `a`, `Core/Parity`
    Ref(QName),
    /// A type constructor applied to arguments: `Option[Int]`, `Map[k, v]`
    Parametric { base: QName, args: NonEmpty<Type> },
    /// `()`
    Unit,
    /// `(Int)`
    Singleton(Type),
    /// `(Int, Bool, Str)`: a first element and at least one more.
    Tuple { first: Type, rest: NonEmpty<Type> },
    /// Function type: `(Int, Int) -> Bool`
    Lambda { params: Vec<Type>, ret: Type },
    /// Error in parsing
    Error(ErrorNode),
}

impl Type {
    pub fn new(span: Span, kind: TypeKind) -> Self {
        Self {
            span: debug_check_span(span),
            kind: Box::new(kind),
        }
    }

    pub fn named(name: QName) -> Self {
        Self::new(name.span, TypeKind::Ref(name))
    }

    /// Build a parenthesized type, choosing the unit, singleton or tuple
    /// form from the number of elements.
    pub fn tuple(span: Span, elements: Vec<Type>) -> Self {
        let mut elements = elements.into_iter();
        let kind = match (elements.next(), elements.next()) {
            (None, _) => TypeKind::Unit,
            (Some(only), None) => TypeKind::Singleton(only),
            (Some(first), Some(second)) => {
                let mut rest = NonEmpty::singleton(second);
                for element in elements {
                    rest.push(element);
                }
                TypeKind::Tuple { first, rest }
            }
        };
        Self::new(span, kind)
    }

    pub fn error(error: ErrorNode) -> Self {
        Self::new(error.span, TypeKind::Error(error))
    }
}

impl TypeKind {
    /// Elements of a parenthesized type, empty for non-tuple kinds.
    pub fn tuple_elements(&self) -> Vec<&Type> {
        match self {
            TypeKind::Singleton(only) => vec![only],
            TypeKind::Tuple { first, rest } => std::iter::once(first).chain(rest.iter()).collect(),
            _ => Vec::new(),
        }
    }
}
