//! Child-sequence shapes per node kind.
//!
//! A [`Shape`] is an ordered list of slots, each naming the class of child it
//! holds and how many of them. Construction already rules out most
//! violations through the node types; the shape table makes the contract
//! explicit so consumers and tests can check a child sequence directly.

use std::fmt::{self, Formatter};

use derive_more::Display;

use crate::node::{Child, Node, NodeKind, Terminal};

/// How many children a slot holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Arity {
    #[display("")]
    One,
    #[display("?")]
    Optional,
    #[display("*")]
    Many,
    #[display("+")]
    NonEmpty,
}

impl Arity {
    const fn bounds(self) -> (usize, usize) {
        match self {
            Arity::One => (1, 1),
            Arity::Optional => (0, 1),
            Arity::Many => (0, usize::MAX),
            Arity::NonEmpty => (1, usize::MAX),
        }
    }
}

/// What a slot accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ChildClass {
    #[display("ident")]
    Ident,
    #[display("nname")]
    NName,
    #[display("qname")]
    QName,
    #[display("operator")]
    Operator,
    #[display("import")]
    Import,
    #[display("decl")]
    Decl,
    #[display("annotation")]
    Annotation,
    #[display("argument")]
    Argument,
    #[display("attribute")]
    Attribute,
    #[display("index")]
    Index,
    #[display("case")]
    Case,
    #[display("type-param")]
    TypeParam,
    #[display("context-bound")]
    ContextBound,
    #[display("expr")]
    Expr,
    #[display("match-rule")]
    MatchRule,
    #[display("switch-rule")]
    SwitchRule,
    #[display("key-value")]
    KeyValue,
    #[display("pattern")]
    Pattern,
    #[display("pat-key-value")]
    PatternKeyValue,
    #[display("type")]
    Type,
    #[display("predicate")]
    Predicate,
}

impl ChildClass {
    /// Whether `child` may fill a slot of this class.
    ///
    /// Literals fill expression and pattern slots. Error placeholders fill
    /// any slot of a recoverable class.
    pub fn accepts(self, child: &Child<'_>) -> bool {
        match (self, child) {
            (ChildClass::Ident, Child::Terminal(Terminal::Ident(_)))
            | (ChildClass::NName, Child::Terminal(Terminal::NName(_)))
            | (ChildClass::QName, Child::Terminal(Terminal::QName(_)))
            | (ChildClass::Operator, Child::Terminal(Terminal::Operator { .. })) => true,
            (
                ChildClass::Decl
                | ChildClass::Expr
                | ChildClass::Pattern
                | ChildClass::Type
                | ChildClass::Predicate,
                Child::Error(_),
            ) => true,
            (ChildClass::Expr | ChildClass::Pattern, Child::Node(Node::Literal(_))) => true,
            (class, Child::Node(node)) => node_class(*node) == Some(class),
            _ => false,
        }
    }
}

fn node_class(node: Node<'_>) -> Option<ChildClass> {
    let class = match node {
        Node::Root(_) | Node::Literal(_) => return None,
        Node::Import(_) => ChildClass::Import,
        Node::Decl(_) => ChildClass::Decl,
        Node::Annotation(_) => ChildClass::Annotation,
        Node::Argument(_) => ChildClass::Argument,
        Node::Attribute(_) => ChildClass::Attribute,
        Node::Index(_) => ChildClass::Index,
        Node::Case(_) => ChildClass::Case,
        Node::TypeParam(_) => ChildClass::TypeParam,
        Node::ContextBound(_) => ChildClass::ContextBound,
        Node::Expr(_) => ChildClass::Expr,
        Node::MatchRule(_) => ChildClass::MatchRule,
        Node::SwitchRule(_) => ChildClass::SwitchRule,
        Node::KeyValue(_) => ChildClass::KeyValue,
        Node::Pattern(_) => ChildClass::Pattern,
        Node::PatternKeyValue(_) => ChildClass::PatternKeyValue,
        Node::Type(_) => ChildClass::Type,
        Node::Predicate(_) => ChildClass::Predicate,
    };
    Some(class)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    pub name: &'static str,
    pub class: ChildClass,
    pub arity: Arity,
}

/// The admissible child sequence of a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    slots: &'static [Slot],
}

macro_rules! shape {
    ($($name:ident: $class:ident $arity:ident),* $(,)?) => {
        Shape {
            slots: &[$(Slot {
                name: stringify!($name),
                class: ChildClass::$class,
                arity: Arity::$arity,
            }),*],
        }
    };
}

impl Shape {
    pub fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    pub fn is_leaf(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check whether `children` can be split across the slots in order.
    pub fn admits(&self, children: &[Child<'_>]) -> bool {
        fill(self.slots, children)
    }
}

fn fill(slots: &[Slot], children: &[Child<'_>]) -> bool {
    let Some((slot, rest)) = slots.split_first() else {
        return children.is_empty();
    };
    let (min, max) = slot.arity.bounds();
    let available = children
        .iter()
        .take_while(|child| slot.class.accepts(child))
        .count()
        .min(max);
    if available < min {
        return false;
    }
    // Greedy first, backing off for later slots of the same class.
    (min..=available)
        .rev()
        .any(|taken| fill(rest, &children[taken..]))
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}{}", slot.name, slot.class, slot.arity)?;
        }
        Ok(())
    }
}

impl NodeKind {
    pub fn shape(self) -> Shape {
        match self {
            NodeKind::Root => shape!(imports: Import Many, decls: Decl Many),

            NodeKind::ImportWildcard | NodeKind::ImportNamespace => shape!(namespace: NName One),
            NodeKind::ImportDefinition => shape!(namespace: NName One, name: Ident One),

            NodeKind::DeclNamespace => shape!(name: NName One, decls: Decl Many),
            NodeKind::DeclEnum => shape!(
                annotations: Annotation Many,
                name: Ident One,
                type_params: TypeParam Many,
                cases: Case NonEmpty,
            ),
            NodeKind::DeclRelation | NodeKind::DeclLattice => shape!(
                annotations: Annotation Many,
                name: Ident One,
                type_params: TypeParam Many,
                attributes: Attribute NonEmpty,
            ),
            NodeKind::DeclIndex => shape!(name: QName One, indexes: Index NonEmpty),
            NodeKind::DeclSignature | NodeKind::DeclExternal => shape!(
                annotations: Annotation Many,
                name: Ident One,
                type_params: TypeParam Many,
                args: Argument Many,
                ret: Type One,
            ),
            NodeKind::DeclFunction | NodeKind::DeclLaw => shape!(
                annotations: Annotation Many,
                name: Ident One,
                type_params: TypeParam Many,
                args: Argument Many,
                ret: Type One,
                body: Expr One,
            ),
            NodeKind::DeclClass => shape!(
                name: Ident One,
                params: Type NonEmpty,
                bounds: ContextBound Many,
                members: Decl Many,
            ),
            NodeKind::DeclFact => shape!(head: Predicate One),
            NodeKind::DeclRule => shape!(head: Predicate One, body: Predicate NonEmpty),
            NodeKind::DeclLetLattice => shape!(
                ty: Type One,
                bot: Expr One,
                top: Expr One,
                leq: Expr One,
                lub: Expr One,
                glb: Expr One,
            ),
            NodeKind::Annotation => shape!(name: Ident One),
            NodeKind::Argument | NodeKind::Attribute => shape!(name: Ident One, ty: Type One),
            NodeKind::Index => shape!(attributes: Ident NonEmpty),
            NodeKind::Case => shape!(name: Ident One, ty: Type Optional),
            NodeKind::TypeParam => shape!(name: Ident One, bound: QName Optional),
            NodeKind::ContextBound => shape!(class: QName One, args: Type NonEmpty),

            NodeKind::ExprLetMatch => shape!(pattern: Pattern One, value: Expr One, body: Expr One),
            NodeKind::ExprIfThenElse => {
                shape!(cond: Expr One, then_branch: Expr One, else_branch: Expr One)
            }
            NodeKind::ExprMatch => shape!(scrutinee: Expr One, rules: MatchRule NonEmpty),
            NodeKind::MatchRule => shape!(pattern: Pattern One, body: Expr One),
            NodeKind::ExprSwitch => shape!(rules: SwitchRule NonEmpty),
            NodeKind::SwitchRule => shape!(cond: Expr One, body: Expr One),
            NodeKind::ExprApply => shape!(func: Expr One, args: Expr Many),
            NodeKind::ExprVar => shape!(name: QName One),
            NodeKind::ExprTag => shape!(enum_name: QName Optional, tag: Ident One, arg: Expr Optional),
            NodeKind::ExprTuple | NodeKind::ExprVector | NodeKind::ExprSet => {
                shape!(elements: Expr Many)
            }
            NodeKind::KeyValue => shape!(key: Expr One, value: Expr One),
            NodeKind::ExprSome => shape!(value: Expr One),
            NodeKind::ExprCons => shape!(head: Expr One, tail: Expr One),
            NodeKind::ExprMap => shape!(entries: KeyValue Many),
            NodeKind::ExprUnaryLambda => shape!(param: Ident One, body: Expr One),
            NodeKind::ExprLambda => shape!(params: Ident NonEmpty, body: Expr One),
            NodeKind::ExprExistential | NodeKind::ExprUniversal => {
                shape!(params: Argument NonEmpty, body: Expr One)
            }
            NodeKind::ExprUnary => shape!(op: Operator One, operand: Expr One),
            NodeKind::ExprLogical
            | NodeKind::ExprComparison
            | NodeKind::ExprAdditive
            | NodeKind::ExprMultiplicative
            | NodeKind::ExprExtended => shape!(lhs: Expr One, op: Operator One, rhs: Expr One),
            NodeKind::ExprInfix => shape!(lhs: Expr One, func: QName One, rhs: Expr One),
            NodeKind::ExprAscribe => shape!(expr: Expr One, ty: Type One),

            NodeKind::PatVar => shape!(name: Ident One),
            NodeKind::PatTag => {
                shape!(enum_name: QName Optional, tag: Ident One, pattern: Pattern Optional)
            }
            NodeKind::PatTuple => shape!(elements: Pattern Many),
            NodeKind::PatCons => shape!(head: Pattern One, tail: Pattern One),
            NodeKind::PatVector | NodeKind::PatSet => {
                shape!(elements: Pattern Many, rest: Pattern Optional)
            }
            NodeKind::PatMap => shape!(entries: PatternKeyValue Many, rest: Pattern Optional),
            NodeKind::PatKeyValue => shape!(key: Pattern One, value: Pattern One),

            NodeKind::TypeRef => shape!(name: QName One),
            NodeKind::TypeParametric => shape!(base: QName One, args: Type NonEmpty),
            NodeKind::TypeSingleton => shape!(elem: Type One),
            NodeKind::TypeTuple => shape!(first: Type One, rest: Type NonEmpty),
            NodeKind::TypeLambda => shape!(params: Type Many, ret: Type One),

            NodeKind::PredAmbiguous => shape!(name: QName One, terms: Expr Many),
            NodeKind::PredEqual => shape!(var: Ident One, value: Expr One),
            NodeKind::PredNotEqual => shape!(lhs: Ident One, rhs: Ident One),
            NodeKind::PredLoop => shape!(var: Ident One, source: Expr One),

            NodeKind::ExprWild
            | NodeKind::ExprNil
            | NodeKind::ExprNone
            | NodeKind::PatWildcard
            | NodeKind::PatNil
            | NodeKind::PatNone
            | NodeKind::TypeUnit
            | NodeKind::PredTrue
            | NodeKind::PredFalse
            | NodeKind::LitBool
            | NodeKind::LitInt8
            | NodeKind::LitInt16
            | NodeKind::LitInt32
            | NodeKind::LitInt64
            | NodeKind::LitInt
            | NodeKind::LitBigInt
            | NodeKind::LitFloat32
            | NodeKind::LitFloat64
            | NodeKind::LitFloat
            | NodeKind::Error => shape!(),
        }
    }
}

impl Node<'_> {
    /// Whether this node's actual children fit its kind's shape.
    pub fn has_valid_shape(self) -> bool {
        let children = self.children();
        match self.kind() {
            // `(e)` is the element itself, never a one-element tuple.
            NodeKind::ExprTuple | NodeKind::PatTuple if children.len() == 1 => false,
            kind => kind.shape().admits(&children),
        }
    }
}

#[cfg(test)]
mod tests {
    use flix_core::Span;

    use super::*;
    use crate::expr::{Expr, ExprKind};
    use crate::literal::Literal;
    use crate::name::{Ident, QName};
    use crate::node::ErrorNode;

    fn name(text: &str) -> QName {
        QName::simple(Ident::new(Span::new(0, text.len()), text).unwrap())
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(
            NodeKind::ExprTag.shape().to_string(),
            "enum_name: qname?, tag: ident, arg: expr?"
        );
        assert_eq!(
            NodeKind::DeclRule.shape().to_string(),
            "head: predicate, body: predicate+"
        );
        assert!(NodeKind::LitFloat.shape().is_leaf());
    }

    #[test]
    fn test_if_then_else_needs_three_expressions() {
        let x = Expr::var(name("x"));
        let y = Expr::var(name("y"));
        let shape = NodeKind::ExprIfThenElse.shape();

        let two = [Child::from(&x), Child::from(&y)];
        assert!(!shape.admits(&two));

        let three = [Child::from(&x), Child::from(&y), Child::from(&x)];
        assert!(shape.admits(&three));
    }

    #[test]
    fn test_literals_and_errors_fill_expression_slots() {
        let one = Expr::literal(Literal::from_lexeme(Span::new(0, 1), "1").unwrap());
        let broken = Expr::error(ErrorNode::new(Span::new(2, 3), "expected expression"));
        let children = [Child::from(&one), Child::from(&broken)];
        assert!(NodeKind::ExprCons.shape().admits(&children));
        assert!(!NodeKind::ExprVar.shape().admits(&children));
    }

    #[test]
    fn test_optional_rest_backtracks() {
        // #[a, b] with an optional rest pattern: both splits are admissible.
        let shape = NodeKind::PatVector.shape();
        let a = crate::pattern::Pattern::wildcard(Span::new(2, 3));
        let b = crate::pattern::Pattern::wildcard(Span::new(5, 6));
        assert!(shape.admits(&[Child::from(&a), Child::from(&b)]));
        assert!(shape.admits(&[]));

        let tuple = Expr::new(Span::new(0, 2), ExprKind::Tuple(vec![]));
        assert!(!shape.admits(&[Child::from(&tuple)]));
    }

    #[test]
    fn test_built_node_has_valid_shape() {
        let apply = Expr::new(
            Span::new(0, 7),
            ExprKind::Apply {
                func: Expr::var(name("f")),
                args: vec![Expr::var(name("x")), Expr::var(name("y"))],
            },
        );
        assert!(Node::Expr(&apply).has_valid_shape());
    }

    #[test]
    fn test_one_element_tuple_is_misshapen() {
        let x = Expr::var(name("x"));
        let raw = Expr::new(Span::new(0, 3), ExprKind::Tuple(vec![x.clone()]));
        assert!(!Node::Expr(&raw).has_valid_shape());
        assert!(Node::Expr(&Expr::tuple(Span::new(0, 3), vec![x])).has_valid_shape());

        let p = crate::pattern::Pattern::wildcard(Span::new(1, 2));
        let raw = crate::pattern::Pattern::new(
            Span::new(0, 3),
            crate::pattern::PatternKind::Tuple(vec![p.clone()]),
        );
        assert!(!Node::Pattern(&raw).has_valid_shape());
        assert_eq!(crate::pattern::Pattern::tuple(Span::new(0, 3), vec![p.clone()]), p);
    }
}
