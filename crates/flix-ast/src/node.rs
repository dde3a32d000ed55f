//! Node kinds and borrowed views over the tree.
//!
//! [`Node`] is a cheap, copyable reference to any node of a syntax tree.
//! It is what listeners receive and what the walker keeps on its stack.
//! [`Child`] is one entry of a node's child sequence: a node, a terminal,
//! or an error placeholder.

use std::fmt::{self, Formatter};

use derive_more::Display;
use flix_core::{CompilationPhase, Diagnostic, Span};
use serde::Serialize;

use crate::decl::{
    Annotation, Argument, Attribute, Case, ContextBound, Decl, Import, ImportKind, Index, Root,
    TypeParam,
};
use crate::error::ShapeError;
use crate::expr::{Expr, ExprKind, KeyValue, MatchRule, SwitchRule};
use crate::literal::{Literal, LiteralKind};
use crate::name::{Ident, NName, QName};
use crate::ops::BinaryOp;
use crate::pattern::{Pattern, PatternKeyValue, PatternKind};
use crate::predicate::{Predicate, PredicateKind};
use crate::types::{Type, TypeKind};

// ============================================================================
// Error placeholders
// ============================================================================

/// Stands in for a piece of source the parser could not turn into a node.
///
/// Error nodes are never entered: the walker reports them through
/// `visit_error_node` and does not look inside.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorNode {
    pub span: Span,
    pub message: String,
}

impl ErrorNode {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Placeholder for a node whose construction was rejected.
    pub fn from_shape_error(span: Span, error: &ShapeError) -> Self {
        Self::new(span, error.to_string())
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(CompilationPhase::Parsing, self.span, self.message.clone())
    }
}

// ============================================================================
// Kinds
// ============================================================================

/// Broad grouping of node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize)]
pub enum Category {
    #[display("unit")]
    Unit,
    #[display("import")]
    Import,
    #[display("declaration")]
    Declaration,
    #[display("expression")]
    Expression,
    #[display("pattern")]
    Pattern,
    #[display("type")]
    Type,
    #[display("predicate")]
    Predicate,
    #[display("literal")]
    Literal,
    #[display("error")]
    Error,
}

macro_rules! node_kinds {
    ($($variant:ident => $category:ident, $name:literal;)+) => {
        /// The closed set of node kinds.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum NodeKind {
            $($variant,)+
        }

        impl NodeKind {
            /// Every kind, error placeholders included, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)+];

            pub const fn category(self) -> Category {
                match self {
                    $(NodeKind::$variant => Category::$category,)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name,)+
                }
            }
        }
    };
}

node_kinds! {
    Root => Unit, "root";

    ImportWildcard => Import, "import-wildcard";
    ImportDefinition => Import, "import-definition";
    ImportNamespace => Import, "import-namespace";

    DeclNamespace => Declaration, "decl-namespace";
    DeclEnum => Declaration, "decl-enum";
    DeclRelation => Declaration, "decl-relation";
    DeclLattice => Declaration, "decl-lattice";
    DeclIndex => Declaration, "decl-index";
    DeclSignature => Declaration, "decl-signature";
    DeclExternal => Declaration, "decl-external";
    DeclFunction => Declaration, "decl-function";
    DeclLaw => Declaration, "decl-law";
    DeclClass => Declaration, "decl-class";
    DeclFact => Declaration, "decl-fact";
    DeclRule => Declaration, "decl-rule";
    DeclLetLattice => Declaration, "decl-let-lattice";
    Annotation => Declaration, "annotation";
    Argument => Declaration, "argument";
    Attribute => Declaration, "attribute";
    Index => Declaration, "index";
    Case => Declaration, "case";
    TypeParam => Declaration, "type-param";
    ContextBound => Declaration, "context-bound";

    ExprLetMatch => Expression, "expr-let-match";
    ExprIfThenElse => Expression, "expr-if-then-else";
    ExprMatch => Expression, "expr-match";
    MatchRule => Expression, "match-rule";
    ExprSwitch => Expression, "expr-switch";
    SwitchRule => Expression, "switch-rule";
    ExprApply => Expression, "expr-apply";
    ExprVar => Expression, "expr-var";
    ExprTag => Expression, "expr-tag";
    ExprTuple => Expression, "expr-tuple";
    KeyValue => Expression, "key-value";
    ExprWild => Expression, "expr-wild";
    ExprNil => Expression, "expr-nil";
    ExprNone => Expression, "expr-none";
    ExprSome => Expression, "expr-some";
    ExprCons => Expression, "expr-cons";
    ExprVector => Expression, "expr-vector";
    ExprSet => Expression, "expr-set";
    ExprMap => Expression, "expr-map";
    ExprUnaryLambda => Expression, "expr-unary-lambda";
    ExprLambda => Expression, "expr-lambda";
    ExprExistential => Expression, "expr-existential";
    ExprUniversal => Expression, "expr-universal";
    ExprUnary => Expression, "expr-unary";
    ExprLogical => Expression, "expr-logical";
    ExprComparison => Expression, "expr-comparison";
    ExprAdditive => Expression, "expr-additive";
    ExprMultiplicative => Expression, "expr-multiplicative";
    ExprExtended => Expression, "expr-extended";
    ExprInfix => Expression, "expr-infix";
    ExprAscribe => Expression, "expr-ascribe";

    PatWildcard => Pattern, "pat-wildcard";
    PatVar => Pattern, "pat-var";
    PatTag => Pattern, "pat-tag";
    PatTuple => Pattern, "pat-tuple";
    PatNil => Pattern, "pat-nil";
    PatNone => Pattern, "pat-none";
    PatCons => Pattern, "pat-cons";
    PatVector => Pattern, "pat-vector";
    PatSet => Pattern, "pat-set";
    PatMap => Pattern, "pat-map";
    PatKeyValue => Pattern, "pat-key-value";

    TypeRef => Type, "type-ref";
    TypeParametric => Type, "type-parametric";
    TypeUnit => Type, "type-unit";
    TypeSingleton => Type, "type-singleton";
    TypeTuple => Type, "type-tuple";
    TypeLambda => Type, "type-lambda";

    PredTrue => Predicate, "pred-true";
    PredFalse => Predicate, "pred-false";
    PredAmbiguous => Predicate, "pred-ambiguous";
    PredEqual => Predicate, "pred-equal";
    PredNotEqual => Predicate, "pred-not-equal";
    PredLoop => Predicate, "pred-loop";

    LitBool => Literal, "lit-bool";
    LitInt8 => Literal, "lit-int8";
    LitInt16 => Literal, "lit-int16";
    LitInt32 => Literal, "lit-int32";
    LitInt64 => Literal, "lit-int64";
    LitInt => Literal, "lit-int";
    LitBigInt => Literal, "lit-bigint";
    LitFloat32 => Literal, "lit-float32";
    LitFloat64 => Literal, "lit-float64";
    LitFloat => Literal, "lit-float";

    Error => Error, "error";
}

impl NodeKind {
    /// Kinds a well-formed tree can contain; excludes [`NodeKind::Error`].
    pub fn syntactic() -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(|kind| *kind != NodeKind::Error)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LiteralKind> for NodeKind {
    fn from(kind: LiteralKind) -> Self {
        match kind {
            LiteralKind::Bool => NodeKind::LitBool,
            LiteralKind::Int8 => NodeKind::LitInt8,
            LiteralKind::Int16 => NodeKind::LitInt16,
            LiteralKind::Int32 => NodeKind::LitInt32,
            LiteralKind::Int64 => NodeKind::LitInt64,
            LiteralKind::IntDefault => NodeKind::LitInt,
            LiteralKind::BigInt => NodeKind::LitBigInt,
            LiteralKind::Float32 => NodeKind::LitFloat32,
            LiteralKind::Float64 => NodeKind::LitFloat64,
            LiteralKind::FloatDefault => NodeKind::LitFloat,
        }
    }
}

// ============================================================================
// Borrowed views
// ============================================================================

/// A reference to any node of a syntax tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node<'ast> {
    Root(&'ast Root),
    Import(&'ast Import),
    Decl(&'ast Decl),
    Annotation(&'ast Annotation),
    Argument(&'ast Argument),
    Attribute(&'ast Attribute),
    Index(&'ast Index),
    Case(&'ast Case),
    TypeParam(&'ast TypeParam),
    ContextBound(&'ast ContextBound),
    Expr(&'ast Expr),
    MatchRule(&'ast MatchRule),
    SwitchRule(&'ast SwitchRule),
    KeyValue(&'ast KeyValue),
    Pattern(&'ast Pattern),
    PatternKeyValue(&'ast PatternKeyValue),
    Type(&'ast Type),
    Predicate(&'ast Predicate),
    Literal(&'ast Literal),
}

/// Leaf payload reported between a node's child nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal<'ast> {
    Ident(&'ast Ident),
    NName(&'ast NName),
    QName(&'ast QName),
    Operator { symbol: &'static str, span: Span },
}

impl Terminal<'_> {
    pub fn span(self) -> Span {
        match self {
            Terminal::Ident(ident) => ident.span(),
            Terminal::NName(name) => name.span,
            Terminal::QName(name) => name.span,
            Terminal::Operator { span, .. } => span,
        }
    }
}

impl fmt::Display for Terminal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Ident(ident) => write!(f, "{ident}"),
            Terminal::NName(name) => write!(f, "{name}"),
            Terminal::QName(name) => write!(f, "{name}"),
            Terminal::Operator { symbol, .. } => f.write_str(symbol),
        }
    }
}

/// One entry of a node's child sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Child<'ast> {
    Node(Node<'ast>),
    Terminal(Terminal<'ast>),
    Error(&'ast ErrorNode),
}

impl Child<'_> {
    pub fn span(self) -> Span {
        match self {
            Child::Node(node) => node.span(),
            Child::Terminal(terminal) => terminal.span(),
            Child::Error(error) => error.span,
        }
    }
}

impl<'ast> From<Node<'ast>> for Child<'ast> {
    /// Normalizes wrappers: literal expressions and patterns become the
    /// literal node, error variants become error children.
    fn from(node: Node<'ast>) -> Self {
        match node {
            Node::Decl(decl) => decl.into(),
            Node::Expr(expr) => expr.into(),
            Node::Pattern(pattern) => pattern.into(),
            Node::Type(ty) => ty.into(),
            Node::Predicate(predicate) => predicate.into(),
            other => Child::Node(other),
        }
    }
}

impl<'ast> From<&'ast Decl> for Child<'ast> {
    fn from(decl: &'ast Decl) -> Self {
        match decl {
            Decl::Error(error) => Child::Error(error),
            _ => Child::Node(Node::Decl(decl)),
        }
    }
}

impl<'ast> From<&'ast Expr> for Child<'ast> {
    fn from(expr: &'ast Expr) -> Self {
        match &*expr.kind {
            ExprKind::Primary(literal) => Child::Node(Node::Literal(literal)),
            ExprKind::Error(error) => Child::Error(error),
            _ => Child::Node(Node::Expr(expr)),
        }
    }
}

impl<'ast> From<&'ast Pattern> for Child<'ast> {
    fn from(pattern: &'ast Pattern) -> Self {
        match &*pattern.kind {
            PatternKind::Literal(literal) => Child::Node(Node::Literal(literal)),
            PatternKind::Error(error) => Child::Error(error),
            _ => Child::Node(Node::Pattern(pattern)),
        }
    }
}

impl<'ast> From<&'ast Type> for Child<'ast> {
    fn from(ty: &'ast Type) -> Self {
        match &*ty.kind {
            TypeKind::Error(error) => Child::Error(error),
            _ => Child::Node(Node::Type(ty)),
        }
    }
}

impl<'ast> From<&'ast Predicate> for Child<'ast> {
    fn from(predicate: &'ast Predicate) -> Self {
        match &predicate.kind {
            PredicateKind::Error(error) => Child::Error(error),
            _ => Child::Node(Node::Predicate(predicate)),
        }
    }
}

macro_rules! plain_child {
    ($($ty:ident),+ $(,)?) => {
        $(impl<'ast> From<&'ast $ty> for Child<'ast> {
            fn from(node: &'ast $ty) -> Self {
                Child::Node(Node::$ty(node))
            }
        })+
    };
}

plain_child!(
    Root,
    Import,
    Annotation,
    Argument,
    Attribute,
    Index,
    Case,
    TypeParam,
    ContextBound,
    MatchRule,
    SwitchRule,
    KeyValue,
    PatternKeyValue,
    Literal,
);

impl<'ast> From<&'ast Ident> for Child<'ast> {
    fn from(ident: &'ast Ident) -> Self {
        Child::Terminal(Terminal::Ident(ident))
    }
}

impl<'ast> From<&'ast NName> for Child<'ast> {
    fn from(name: &'ast NName) -> Self {
        Child::Terminal(Terminal::NName(name))
    }
}

impl<'ast> From<&'ast QName> for Child<'ast> {
    fn from(name: &'ast QName) -> Self {
        Child::Terminal(Terminal::QName(name))
    }
}

impl<'ast> Node<'ast> {
    pub fn kind(self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Import(import) => match import.kind {
                ImportKind::Wildcard { .. } => NodeKind::ImportWildcard,
                ImportKind::Definition { .. } => NodeKind::ImportDefinition,
                ImportKind::Namespace { .. } => NodeKind::ImportNamespace,
            },
            Node::Decl(decl) => decl_kind(decl),
            Node::Annotation(_) => NodeKind::Annotation,
            Node::Argument(_) => NodeKind::Argument,
            Node::Attribute(_) => NodeKind::Attribute,
            Node::Index(_) => NodeKind::Index,
            Node::Case(_) => NodeKind::Case,
            Node::TypeParam(_) => NodeKind::TypeParam,
            Node::ContextBound(_) => NodeKind::ContextBound,
            Node::Expr(expr) => expr_kind(expr),
            Node::MatchRule(_) => NodeKind::MatchRule,
            Node::SwitchRule(_) => NodeKind::SwitchRule,
            Node::KeyValue(_) => NodeKind::KeyValue,
            Node::Pattern(pattern) => pattern_kind(pattern),
            Node::PatternKeyValue(_) => NodeKind::PatKeyValue,
            Node::Type(ty) => type_kind(ty),
            Node::Predicate(predicate) => predicate_kind(predicate),
            Node::Literal(literal) => literal.kind().into(),
        }
    }

    pub fn category(self) -> Category {
        self.kind().category()
    }

    pub fn span(self) -> Span {
        match self {
            Node::Root(root) => root.span,
            Node::Import(import) => import.span,
            Node::Decl(decl) => decl.span(),
            Node::Annotation(annotation) => annotation.span,
            Node::Argument(argument) => argument.span,
            Node::Attribute(attribute) => attribute.span,
            Node::Index(index) => index.span,
            Node::Case(case) => case.span,
            Node::TypeParam(param) => param.span,
            Node::ContextBound(bound) => bound.span,
            Node::Expr(expr) => expr.span,
            Node::MatchRule(rule) => rule.span,
            Node::SwitchRule(rule) => rule.span,
            Node::KeyValue(entry) => entry.span,
            Node::Pattern(pattern) => pattern.span,
            Node::PatternKeyValue(entry) => entry.span,
            Node::Type(ty) => ty.span,
            Node::Predicate(predicate) => predicate.span,
            Node::Literal(literal) => literal.span,
        }
    }

    /// Feed the node's children to `f` in source order.
    ///
    /// Wrapper nodes are normalized as in `Child::from`, so a literal
    /// expression shows up as a literal child.
    pub fn for_each_child(self, mut f: impl FnMut(Child<'ast>)) {
        let f = &mut f;
        match self {
            Node::Root(root) => {
                each(f, &root.imports);
                each(f, &root.decls);
            }
            Node::Import(import) => match &import.kind {
                ImportKind::Wildcard { namespace } | ImportKind::Namespace { namespace } => {
                    f(namespace.into());
                }
                ImportKind::Definition { namespace, name } => {
                    f(namespace.into());
                    f(name.into());
                }
            },
            Node::Decl(decl) => decl_children(decl, f),
            Node::Annotation(annotation) => f((&annotation.name).into()),
            Node::Argument(argument) => {
                f((&argument.name).into());
                f((&argument.ty).into());
            }
            Node::Attribute(attribute) => {
                f((&attribute.name).into());
                f((&attribute.ty).into());
            }
            Node::Index(index) => each(f, &index.attributes),
            Node::Case(case) => {
                f((&case.name).into());
                if let Some(ty) = &case.ty {
                    f(ty.into());
                }
            }
            Node::TypeParam(param) => {
                f((&param.name).into());
                if let Some(bound) = &param.bound {
                    f(bound.into());
                }
            }
            Node::ContextBound(bound) => {
                f((&bound.class).into());
                each(f, &bound.args);
            }
            Node::Expr(expr) => expr_children(expr, f),
            Node::MatchRule(rule) => {
                f((&rule.pattern).into());
                f((&rule.body).into());
            }
            Node::SwitchRule(rule) => {
                f((&rule.cond).into());
                f((&rule.body).into());
            }
            Node::KeyValue(entry) => {
                f((&entry.key).into());
                f((&entry.value).into());
            }
            Node::Pattern(pattern) => pattern_children(pattern, f),
            Node::PatternKeyValue(entry) => {
                f((&entry.key).into());
                f((&entry.value).into());
            }
            Node::Type(ty) => type_children(ty, f),
            Node::Predicate(predicate) => predicate_children(predicate, f),
            Node::Literal(_) => {}
        }
    }

    /// The node's children in source order.
    pub fn children(self) -> Vec<Child<'ast>> {
        let mut children = Vec::new();
        self.for_each_child(|child| children.push(child));
        children
    }
}

fn decl_kind(decl: &Decl) -> NodeKind {
    match decl {
        Decl::Namespace(_) => NodeKind::DeclNamespace,
        Decl::Enum(_) => NodeKind::DeclEnum,
        Decl::Relation(_) => NodeKind::DeclRelation,
        Decl::Lattice(_) => NodeKind::DeclLattice,
        Decl::Index(_) => NodeKind::DeclIndex,
        Decl::Signature(_) => NodeKind::DeclSignature,
        Decl::External(_) => NodeKind::DeclExternal,
        Decl::Function(_) => NodeKind::DeclFunction,
        Decl::Law(_) => NodeKind::DeclLaw,
        Decl::Class(_) => NodeKind::DeclClass,
        Decl::Fact(_) => NodeKind::DeclFact,
        Decl::Rule(_) => NodeKind::DeclRule,
        Decl::LetLattice(_) => NodeKind::DeclLetLattice,
        Decl::Error(_) => NodeKind::Error,
    }
}

fn expr_kind(expr: &Expr) -> NodeKind {
    match &*expr.kind {
        ExprKind::Primary(literal) => literal.kind().into(),
        ExprKind::LetMatch { .. } => NodeKind::ExprLetMatch,
        ExprKind::IfThenElse { .. } => NodeKind::ExprIfThenElse,
        ExprKind::Match { .. } => NodeKind::ExprMatch,
        ExprKind::Switch { .. } => NodeKind::ExprSwitch,
        ExprKind::Apply { .. } => NodeKind::ExprApply,
        ExprKind::Var(_) => NodeKind::ExprVar,
        ExprKind::Tag { .. } => NodeKind::ExprTag,
        ExprKind::Tuple(_) => NodeKind::ExprTuple,
        ExprKind::Wild => NodeKind::ExprWild,
        ExprKind::Nil => NodeKind::ExprNil,
        ExprKind::OptionNone => NodeKind::ExprNone,
        ExprKind::OptionSome(_) => NodeKind::ExprSome,
        ExprKind::Cons { .. } => NodeKind::ExprCons,
        ExprKind::Vector(_) => NodeKind::ExprVector,
        ExprKind::Set(_) => NodeKind::ExprSet,
        ExprKind::Map(_) => NodeKind::ExprMap,
        ExprKind::UnaryLambda { .. } => NodeKind::ExprUnaryLambda,
        ExprKind::Lambda { .. } => NodeKind::ExprLambda,
        ExprKind::Existential { .. } => NodeKind::ExprExistential,
        ExprKind::Universal { .. } => NodeKind::ExprUniversal,
        ExprKind::Unary { .. } => NodeKind::ExprUnary,
        ExprKind::Binary { op, .. } => match op.op {
            BinaryOp::Logical(_) => NodeKind::ExprLogical,
            BinaryOp::Comparison(_) => NodeKind::ExprComparison,
            BinaryOp::Additive(_) => NodeKind::ExprAdditive,
            BinaryOp::Multiplicative(_) => NodeKind::ExprMultiplicative,
            BinaryOp::Extended(_) => NodeKind::ExprExtended,
        },
        ExprKind::Infix { .. } => NodeKind::ExprInfix,
        ExprKind::Ascribe { .. } => NodeKind::ExprAscribe,
        ExprKind::Error(_) => NodeKind::Error,
    }
}

fn pattern_kind(pattern: &Pattern) -> NodeKind {
    match &*pattern.kind {
        PatternKind::Wildcard => NodeKind::PatWildcard,
        PatternKind::Var(_) => NodeKind::PatVar,
        PatternKind::Literal(literal) => literal.kind().into(),
        PatternKind::Tag { .. } => NodeKind::PatTag,
        PatternKind::Tuple(_) => NodeKind::PatTuple,
        PatternKind::Nil => NodeKind::PatNil,
        PatternKind::OptionNone => NodeKind::PatNone,
        PatternKind::Cons { .. } => NodeKind::PatCons,
        PatternKind::Vector { .. } => NodeKind::PatVector,
        PatternKind::Set { .. } => NodeKind::PatSet,
        PatternKind::Map { .. } => NodeKind::PatMap,
        PatternKind::Error(_) => NodeKind::Error,
    }
}

fn type_kind(ty: &Type) -> NodeKind {
    match &*ty.kind {
        TypeKind::Ref(_) => NodeKind::TypeRef,
        TypeKind::Parametric { .. } => NodeKind::TypeParametric,
        TypeKind::Unit => NodeKind::TypeUnit,
        TypeKind::Singleton(_) => NodeKind::TypeSingleton,
        TypeKind::Tuple { .. } => NodeKind::TypeTuple,
        TypeKind::Lambda { .. } => NodeKind::TypeLambda,
        TypeKind::Error(_) => NodeKind::Error,
    }
}

fn predicate_kind(predicate: &Predicate) -> NodeKind {
    match &predicate.kind {
        PredicateKind::True => NodeKind::PredTrue,
        PredicateKind::False => NodeKind::PredFalse,
        PredicateKind::Ambiguous { .. } => NodeKind::PredAmbiguous,
        PredicateKind::Equal { .. } => NodeKind::PredEqual,
        PredicateKind::NotEqual { .. } => NodeKind::PredNotEqual,
        PredicateKind::Loop { .. } => NodeKind::PredLoop,
        PredicateKind::Error(_) => NodeKind::Error,
    }
}

// ============================================================================
// Child enumeration
// ============================================================================

fn each<'ast, T, F>(f: &mut F, items: impl IntoIterator<Item = &'ast T>)
where
    T: 'ast,
    &'ast T: Into<Child<'ast>>,
    F: FnMut(Child<'ast>),
{
    for item in items {
        f(item.into());
    }
}

fn operator<'ast>(symbol: &'static str, span: Span) -> Child<'ast> {
    Child::Terminal(Terminal::Operator { symbol, span })
}

fn decl_children<'ast>(decl: &'ast Decl, f: &mut impl FnMut(Child<'ast>)) {
    match decl {
        Decl::Namespace(d) => {
            f((&d.name).into());
            each(f, &d.decls);
        }
        Decl::Enum(d) => {
            each(f, &d.annotations);
            f((&d.name).into());
            each(f, &d.type_params);
            each(f, &d.cases);
        }
        Decl::Relation(d) | Decl::Lattice(d) => {
            each(f, &d.annotations);
            f((&d.name).into());
            each(f, &d.type_params);
            each(f, &d.attributes);
        }
        Decl::Index(d) => {
            f((&d.name).into());
            each(f, &d.indexes);
        }
        Decl::Signature(d) | Decl::External(d) => {
            each(f, &d.annotations);
            f((&d.name).into());
            each(f, &d.type_params);
            each(f, &d.args);
            f((&d.ret).into());
        }
        Decl::Function(d) | Decl::Law(d) => {
            each(f, &d.annotations);
            f((&d.name).into());
            each(f, &d.type_params);
            each(f, &d.args);
            f((&d.ret).into());
            f((&d.body).into());
        }
        Decl::Class(d) => {
            f((&d.name).into());
            each(f, &d.params);
            each(f, &d.bounds);
            each(f, d.members());
        }
        Decl::Fact(d) => f((&d.head).into()),
        Decl::Rule(d) => {
            f((&d.head).into());
            each(f, &d.body);
        }
        Decl::LetLattice(d) => {
            f((&d.ty).into());
            for op in [&d.bot, &d.top, &d.leq, &d.lub, &d.glb] {
                f(op.into());
            }
        }
        Decl::Error(_) => {}
    }
}

fn expr_children<'ast>(expr: &'ast Expr, f: &mut impl FnMut(Child<'ast>)) {
    match &*expr.kind {
        ExprKind::Primary(_)
        | ExprKind::Wild
        | ExprKind::Nil
        | ExprKind::OptionNone
        | ExprKind::Error(_) => {}
        ExprKind::LetMatch {
            pattern,
            value,
            body,
        } => {
            f(pattern.into());
            f(value.into());
            f(body.into());
        }
        ExprKind::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => {
            f(cond.into());
            f(then_branch.into());
            f(else_branch.into());
        }
        ExprKind::Match { scrutinee, rules } => {
            f(scrutinee.into());
            each(f, rules);
        }
        ExprKind::Switch { rules } => each(f, rules),
        ExprKind::Apply { func, args } => {
            f(func.into());
            each(f, args);
        }
        ExprKind::Var(name) => f(name.into()),
        ExprKind::Tag {
            enum_name,
            tag,
            arg,
        } => {
            if let Some(enum_name) = enum_name {
                f(enum_name.into());
            }
            f(tag.into());
            if let Some(arg) = arg {
                f(arg.into());
            }
        }
        ExprKind::Tuple(elements) | ExprKind::Vector(elements) | ExprKind::Set(elements) => {
            each(f, elements)
        }
        ExprKind::OptionSome(inner) => f(inner.into()),
        ExprKind::Cons { head, tail } => {
            f(head.into());
            f(tail.into());
        }
        ExprKind::Map(entries) => each(f, entries),
        ExprKind::UnaryLambda { param, body } => {
            f(param.into());
            f(body.into());
        }
        ExprKind::Lambda { params, body } => {
            each(f, params);
            f(body.into());
        }
        ExprKind::Existential { params, body } | ExprKind::Universal { params, body } => {
            each(f, params);
            f(body.into());
        }
        ExprKind::Unary { op, operand } => {
            f(operator(op.op.symbol(), op.span));
            f(operand.into());
        }
        ExprKind::Binary { lhs, op, rhs } => {
            f(lhs.into());
            f(operator(op.op.symbol(), op.span));
            f(rhs.into());
        }
        ExprKind::Infix { lhs, func, rhs } => {
            f(lhs.into());
            f(func.into());
            f(rhs.into());
        }
        ExprKind::Ascribe { expr, ty } => {
            f(expr.into());
            f(ty.into());
        }
    }
}

fn pattern_children<'ast>(pattern: &'ast Pattern, f: &mut impl FnMut(Child<'ast>)) {
    match &*pattern.kind {
        PatternKind::Wildcard
        | PatternKind::Literal(_)
        | PatternKind::Nil
        | PatternKind::OptionNone
        | PatternKind::Error(_) => {}
        PatternKind::Var(ident) => f(ident.into()),
        PatternKind::Tag {
            enum_name,
            tag,
            pattern,
        } => {
            if let Some(enum_name) = enum_name {
                f(enum_name.into());
            }
            f(tag.into());
            if let Some(pattern) = pattern {
                f(pattern.into());
            }
        }
        PatternKind::Tuple(elements) => each(f, elements),
        PatternKind::Cons { head, tail } => {
            f(head.into());
            f(tail.into());
        }
        PatternKind::Vector { elements, rest } | PatternKind::Set { elements, rest } => {
            each(f, elements);
            if let Some(rest) = rest {
                f(rest.into());
            }
        }
        PatternKind::Map { entries, rest } => {
            each(f, entries);
            if let Some(rest) = rest {
                f(rest.into());
            }
        }
    }
}

fn type_children<'ast>(ty: &'ast Type, f: &mut impl FnMut(Child<'ast>)) {
    match &*ty.kind {
        TypeKind::Unit | TypeKind::Error(_) => {}
        TypeKind::Ref(name) => f(name.into()),
        TypeKind::Parametric { base, args } => {
            f(base.into());
            each(f, args);
        }
        TypeKind::Singleton(inner) => f(inner.into()),
        TypeKind::Tuple { first, rest } => {
            f(first.into());
            each(f, rest);
        }
        TypeKind::Lambda { params, ret } => {
            each(f, params);
            f(ret.into());
        }
    }
}

fn predicate_children<'ast>(predicate: &'ast Predicate, f: &mut impl FnMut(Child<'ast>)) {
    match &predicate.kind {
        PredicateKind::True | PredicateKind::False | PredicateKind::Error(_) => {}
        PredicateKind::Ambiguous { name, terms } => {
            f(name.into());
            each(f, terms);
        }
        PredicateKind::Equal { var, value } => {
            f(var.into());
            f(value.into());
        }
        PredicateKind::NotEqual { lhs, rhs } => {
            f(lhs.into());
            f(rhs.into());
        }
        PredicateKind::Loop { var, source } => {
            f(var.into());
            f(source.into());
        }
    }
}
