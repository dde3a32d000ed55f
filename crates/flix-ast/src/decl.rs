//! Declaration types for the AST.
//!
//! A compilation unit ([`Root`]) holds imports followed by declarations.
//! Declarations cover the functional side (definitions, signatures, enums,
//! classes) and the Datalog side (relations, lattices, indexes, facts,
//! rules).

use flix_core::Span;
use serde::Serialize;

use crate::error::{ShapeError, ShapeResult, debug_check_span};
use crate::expr::Expr;
use crate::name::{Ident, NName, QName};
use crate::node::ErrorNode;
use crate::non_empty::NonEmpty;
use crate::predicate::Predicate;
use crate::types::Type;

// ============================================================================
// Compilation unit
// ============================================================================

/// The root of a compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Root {
    pub span: Span,
    pub imports: Vec<Import>,
    pub decls: Vec<Decl>,
}

impl Root {
    pub fn new(span: Span, imports: Vec<Import>, decls: Vec<Decl>) -> Self {
        Self {
            span: debug_check_span(span),
            imports,
            decls,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Import {
    pub span: Span,
    pub kind: ImportKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ImportKind {
    /// `import a.b/_`
    Wildcard { namespace: NName },
    /// `import a.b/f`
    Definition { namespace: NName, name: Ident },
    /// `import a.b`
    Namespace { namespace: NName },
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Decl {
    /// `namespace a.b { ... }`
    Namespace(NamespaceDecl),
    /// `enum Color { case Red, case Green }`
    Enum(EnumDecl),
    /// `rel Edge(x: Int, y: Int)`
    Relation(TableDecl),
    /// `lat Dist(x: Int, d: Int)`; the last attribute carries the lattice value.
    Lattice(TableDecl),
    /// `index Edge({x}, {x, y})`
    Index(IndexDecl),
    /// `def f(x: Int): Int` without a body.
    Signature(SignatureDecl),
    /// `external def f(x: Int): Int`
    External(SignatureDecl),
    /// `def f(x: Int): Int = body`
    Function(FunctionDecl),
    /// `law l(x: Int): Bool = body`
    Law(FunctionDecl),
    /// `class Eq[a] { ... }`
    Class(ClassDecl),
    /// `Edge(1, 2).`
    Fact(FactDecl),
    /// `Path(x, z) :- Edge(x, y), Path(y, z).`
    Rule(RuleDecl),
    /// `let Parity<> = (Bot, Top, leq, lub, glb)`
    LetLattice(LetLatticeDecl),
    /// Error recovery placeholder.
    Error(ErrorNode),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Namespace(d) => d.span,
            Decl::Enum(d) => d.span,
            Decl::Relation(d) | Decl::Lattice(d) => d.span,
            Decl::Index(d) => d.span,
            Decl::Signature(d) | Decl::External(d) => d.span,
            Decl::Function(d) | Decl::Law(d) => d.span,
            Decl::Class(d) => d.span,
            Decl::Fact(d) => d.span,
            Decl::Rule(d) => d.span,
            Decl::LetLattice(d) => d.span,
            Decl::Error(e) => e.span,
        }
    }

    /// The name this declaration introduces, if it introduces one.
    pub fn name(&self) -> Option<&Ident> {
        match self {
            Decl::Enum(d) => Some(&d.name),
            Decl::Relation(d) | Decl::Lattice(d) => Some(&d.name),
            Decl::Signature(d) | Decl::External(d) => Some(&d.name),
            Decl::Function(d) | Decl::Law(d) => Some(&d.name),
            Decl::Class(d) => Some(&d.name),
            Decl::Namespace(_)
            | Decl::Index(_)
            | Decl::Fact(_)
            | Decl::Rule(_)
            | Decl::LetLattice(_)
            | Decl::Error(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NamespaceDecl {
    pub span: Span,
    pub name: NName,
    pub decls: Vec<Decl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EnumDecl {
    pub span: Span,
    pub annotations: Vec<Annotation>,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub cases: NonEmpty<Case>,
}

/// Relation or lattice declaration. Both share the attribute shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TableDecl {
    pub span: Span,
    pub annotations: Vec<Annotation>,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub attributes: NonEmpty<Attribute>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct IndexDecl {
    pub span: Span,
    /// The relation or lattice being indexed.
    pub name: QName,
    pub indexes: NonEmpty<Index>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SignatureDecl {
    pub span: Span,
    pub annotations: Vec<Annotation>,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub args: Vec<Argument>,
    pub ret: Type,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FunctionDecl {
    pub span: Span,
    pub annotations: Vec<Annotation>,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub args: Vec<Argument>,
    pub ret: Type,
    pub body: Expr,
}

/// Type class declaration.
///
/// Members are restricted to signatures, functions and laws; the only way to
/// build one is [`ClassDecl::new`], which enforces that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ClassDecl {
    pub span: Span,
    pub name: Ident,
    pub params: NonEmpty<Type>,
    pub bounds: Vec<ContextBound>,
    members: Vec<Decl>,
}

impl ClassDecl {
    pub fn new(
        span: Span,
        name: Ident,
        params: NonEmpty<Type>,
        bounds: Vec<ContextBound>,
        members: Vec<Decl>,
    ) -> ShapeResult<Self> {
        for member in &members {
            match member {
                Decl::Signature(_) | Decl::Function(_) | Decl::Law(_) | Decl::Error(_) => {}
                Decl::Namespace(_) => return Err(misplaced("namespace")),
                Decl::Enum(_) => return Err(misplaced("enum")),
                Decl::Relation(_) | Decl::Lattice(_) => return Err(misplaced("table")),
                Decl::Index(_) => return Err(misplaced("index")),
                Decl::External(_) => return Err(misplaced("external")),
                Decl::Class(_) => return Err(misplaced("class")),
                Decl::Fact(_) | Decl::Rule(_) => return Err(misplaced("constraint")),
                Decl::LetLattice(_) => return Err(misplaced("lattice definition")),
            }
        }
        Ok(Self {
            span,
            name,
            params,
            bounds,
            members,
        })
    }

    pub fn members(&self) -> &[Decl] {
        &self.members
    }
}

fn misplaced(what: &'static str) -> ShapeError {
    ShapeError::Misplaced {
        what,
        context: "class body",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FactDecl {
    pub span: Span,
    pub head: Predicate,
}

/// `head :- body.` The body is an ordered, non-empty conjunction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RuleDecl {
    pub span: Span,
    pub head: Predicate,
    pub body: NonEmpty<Predicate>,
}

impl RuleDecl {
    pub fn new(span: Span, head: Predicate, body: Vec<Predicate>) -> ShapeResult<Self> {
        Ok(Self {
            span,
            head,
            body: NonEmpty::new("rule body", body)?,
        })
    }
}

/// The five operations defining a custom lattice over `ty`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LetLatticeDecl {
    pub span: Span,
    pub ty: Type,
    pub bot: Expr,
    pub top: Expr,
    pub leq: Expr,
    pub lub: Expr,
    pub glb: Expr,
}

impl LetLatticeDecl {
    /// Build from the element list written in source, which must name
    /// bottom, top, order, join and meet in that order.
    pub fn from_elms(span: Span, ty: Type, elms: Vec<Expr>) -> ShapeResult<Self> {
        let found = elms.len();
        let Ok([bot, top, leq, lub, glb]) = <[Expr; 5]>::try_from(elms) else {
            return Err(ShapeError::ArityMismatch {
                what: "lattice definition",
                expected: 5,
                found,
            });
        };
        Ok(Self {
            span,
            ty,
            bot,
            top,
            leq,
            lub,
            glb,
        })
    }
}

// ============================================================================
// Declaration parts
// ============================================================================

/// `@test`, `@benchmark`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Annotation {
    pub span: Span,
    pub name: Ident,
}

/// `x: Int` in a parameter list or quantifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Argument {
    pub span: Span,
    pub name: Ident,
    pub ty: Type,
}

/// `x: Int` in a relation or lattice declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    pub span: Span,
    pub name: Ident,
    pub ty: Type,
}

/// `{x, y}` inside an index declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Index {
    pub span: Span,
    pub attributes: NonEmpty<Ident>,
}

/// `case Circle(Int)`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Case {
    pub span: Span,
    pub name: Ident,
    pub ty: Option<Type>,
}

/// `a` or `a: Eq`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeParam {
    pub span: Span,
    pub name: Ident,
    pub bound: Option<QName>,
}

/// `Eq[a]` in a class context: `class Ord[a] <= Eq[a]`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ContextBound {
    pub span: Span,
    pub class: QName,
    pub args: NonEmpty<Type>,
}
