//! Tree builders and a tracing listener shared by the integration tests.
#![allow(dead_code)]

use std::ops::ControlFlow;

use flix_ast::*;
use flix_core::Span;

pub fn sp() -> Span {
    Span::default()
}

pub fn ident(text: &str) -> Ident {
    Ident::new(sp(), text).unwrap()
}

/// Parse `a.b/c` style names.
pub fn qname(text: &str) -> QName {
    match text.rsplit_once('/') {
        Some((namespace, name)) => QName::new(sp(), Some(nname(namespace)), ident(name)).unwrap(),
        None => QName::simple(ident(text)),
    }
}

pub fn nname(text: &str) -> NName {
    NName::new(sp(), text.split('.').map(ident).collect()).unwrap()
}

pub fn var(text: &str) -> Expr {
    Expr::var(qname(text))
}

pub fn lit(lexeme: &str) -> Literal {
    Literal::from_lexeme(sp(), lexeme).unwrap()
}

pub fn num(lexeme: &str) -> Expr {
    Expr::literal(lit(lexeme))
}

pub fn expr(kind: ExprKind) -> Expr {
    Expr::new(sp(), kind)
}

pub fn pat(kind: PatternKind) -> Pattern {
    Pattern::new(sp(), kind)
}

pub fn named(text: &str) -> Type {
    Type::named(qname(text))
}

pub fn atom(name: &str, terms: Vec<Expr>) -> Predicate {
    Predicate::atom(sp(), qname(name), terms)
}

pub fn pred(kind: PredicateKind) -> Predicate {
    Predicate::new(sp(), kind)
}

pub fn binary(lhs: Expr, op: impl Into<BinaryOp>, rhs: Expr) -> Expr {
    Expr::binary(lhs, Operator::new(op.into(), sp()), rhs)
}

pub fn attribute(name: &str, ty: &str) -> Attribute {
    Attribute {
        span: sp(),
        name: ident(name),
        ty: named(ty),
    }
}

pub fn argument(name: &str, ty: &str) -> Argument {
    Argument {
        span: sp(),
        name: ident(name),
        ty: named(ty),
    }
}

pub fn relation(name: &str, attributes: Vec<Attribute>) -> Decl {
    Decl::Relation(TableDecl {
        span: sp(),
        annotations: vec![],
        name: ident(name),
        type_params: vec![],
        attributes: NonEmpty::new("relation attributes", attributes).unwrap(),
    })
}

pub fn rule(head: Predicate, body: Vec<Predicate>) -> Decl {
    Decl::Rule(RuleDecl::new(sp(), head, body).unwrap())
}

/// `if (x) Some(1i32) else y`
pub fn if_then_else() -> Expr {
    expr(ExprKind::IfThenElse {
        cond: var("x"),
        then_branch: expr(ExprKind::Tag {
            enum_name: None,
            tag: ident("Some"),
            arg: Some(num("1i32")),
        }),
        else_branch: var("y"),
    })
}

/// ```text
/// rel R(x: Int, y: Int)
/// R(x, y) :- S(x), T(y), x != y.
/// ```
pub fn relation_and_rule() -> Root {
    let head = atom("R", vec![var("x"), var("y")]);
    let body = vec![
        atom("S", vec![var("x")]),
        atom("T", vec![var("y")]),
        pred(PredicateKind::NotEqual {
            lhs: ident("x"),
            rhs: ident("y"),
        }),
    ];
    Root::new(
        sp(),
        vec![],
        vec![
            relation("R", vec![attribute("x", "Int"), attribute("y", "Int")]),
            rule(head, body),
        ],
    )
}

/// Records every callback as an indented line.
#[derive(Default)]
pub struct Trace {
    pub lines: Vec<String>,
    depth: usize,
}

impl Trace {
    fn push(&mut self, line: String) {
        self.lines.push(format!("{}{line}", "  ".repeat(self.depth)));
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl<'ast> Listener<'ast> for Trace {
    fn enter_every_node(&mut self, node: Node<'ast>) -> ControlFlow<(), WalkAction> {
        self.push(format!("enter {}", node.kind()));
        self.depth += 1;
        ControlFlow::Continue(WalkAction::Advance)
    }

    fn exit_every_node(&mut self, node: Node<'ast>) -> ControlFlow<()> {
        self.depth -= 1;
        self.push(format!("exit {}", node.kind()));
        ControlFlow::Continue(())
    }

    fn visit_terminal(&mut self, terminal: Terminal<'ast>) -> ControlFlow<()> {
        self.push(format!("terminal {terminal}"));
        ControlFlow::Continue(())
    }

    fn visit_error_node(&mut self, error: &'ast ErrorNode) -> ControlFlow<()> {
        self.push(format!("error {}", error.message));
        ControlFlow::Continue(())
    }
}

pub fn trace<'a>(tree: impl Into<Child<'a>>) -> String {
    let mut trace = Trace::default();
    let _ = walk(tree, &mut trace);
    trace.render()
}

/// A unit containing every syntactic node kind at least once.
pub fn kitchen_sink() -> Root {
    let imports = vec![
        Import {
            span: sp(),
            kind: ImportKind::Wildcard {
                namespace: nname("Core.List"),
            },
        },
        Import {
            span: sp(),
            kind: ImportKind::Definition {
                namespace: nname("Core.List"),
                name: ident("map"),
            },
        },
        Import {
            span: sp(),
            kind: ImportKind::Namespace {
                namespace: nname("Core.Option"),
            },
        },
    ];

    let color = Decl::Enum(EnumDecl {
        span: sp(),
        annotations: vec![Annotation {
            span: sp(),
            name: ident("test"),
        }],
        name: ident("Shape"),
        type_params: vec![TypeParam {
            span: sp(),
            name: ident("a"),
            bound: Some(qname("Eq")),
        }],
        cases: NonEmpty::new(
            "enum cases",
            vec![
                Case {
                    span: sp(),
                    name: ident("Empty"),
                    ty: None,
                },
                Case {
                    span: sp(),
                    name: ident("Circle"),
                    ty: Some(named("Int")),
                },
            ],
        )
        .unwrap(),
    });

    let lattice = Decl::Lattice(TableDecl {
        span: sp(),
        annotations: vec![],
        name: ident("Dist"),
        type_params: vec![],
        attributes: NonEmpty::new("lattice attributes", vec![attribute("x", "Int"), attribute("d", "Parity")])
            .unwrap(),
    });

    let index = Decl::Index(IndexDecl {
        span: sp(),
        name: qname("Edge"),
        indexes: NonEmpty::singleton(Index {
            span: sp(),
            attributes: NonEmpty::new("index", vec![ident("x"), ident("y")]).unwrap(),
        }),
    });

    let signature = SignatureDecl {
        span: sp(),
        annotations: vec![],
        name: ident("eq"),
        type_params: vec![],
        args: vec![argument("x", "a"), argument("y", "a")],
        ret: named("Bool"),
    };

    let law = Decl::Law(FunctionDecl {
        span: sp(),
        annotations: vec![],
        name: ident("reflexive"),
        type_params: vec![],
        args: vec![],
        ret: named("Bool"),
        body: expr(ExprKind::Universal {
            params: NonEmpty::singleton(argument("x", "a")),
            body: binary(var("x"), ComparisonOp::Equal, var("x")),
        }),
    });

    let class = Decl::Class(
        ClassDecl::new(
            sp(),
            ident("Ord"),
            NonEmpty::singleton(named("a")),
            vec![ContextBound {
                span: sp(),
                class: qname("Eq"),
                args: NonEmpty::singleton(named("a")),
            }],
            vec![Decl::Signature(signature.clone()), law],
        )
        .unwrap(),
    );

    let namespace = Decl::Namespace(NamespaceDecl {
        span: sp(),
        name: nname("Geometry"),
        decls: vec![color, class],
    });

    let function = Decl::Function(FunctionDecl {
        span: sp(),
        annotations: vec![],
        name: ident("main"),
        type_params: vec![],
        args: vec![argument("xs", "List")],
        ret: Type::new(
            sp(),
            TypeKind::Lambda {
                params: vec![Type::tuple(sp(), vec![])],
                ret: Type::new(
                    sp(),
                    TypeKind::Parametric {
                        base: qname("Option"),
                        args: NonEmpty::singleton(Type::tuple(sp(), vec![named("Int")])),
                    },
                ),
            },
        ),
        body: function_body(),
    });

    let fact = Decl::Fact(FactDecl {
        span: sp(),
        head: atom("Edge", vec![num("1"), num("2")]),
    });

    let rule = rule(
        atom("Path", vec![var("x"), var("z")]),
        vec![
            pred(PredicateKind::True),
            pred(PredicateKind::False),
            atom("Edge", vec![var("x"), var("y")]),
            pred(PredicateKind::Equal {
                var: ident("z"),
                value: num("3"),
            }),
            pred(PredicateKind::NotEqual {
                lhs: ident("x"),
                rhs: ident("z"),
            }),
            pred(PredicateKind::Loop {
                var: ident("y"),
                source: var("ys"),
            }),
        ],
    );

    let let_lattice = Decl::LetLattice(
        LetLatticeDecl::from_elms(
            sp(),
            Type::tuple(sp(), vec![named("Int"), named("Bool")]),
            vec![var("bot"), var("top"), var("leq"), var("lub"), var("glb")],
        )
        .unwrap(),
    );

    let decls = vec![
        namespace,
        relation("Edge", vec![attribute("x", "Int"), attribute("y", "Int")]),
        lattice,
        index,
        Decl::Signature(signature.clone()),
        Decl::External(signature),
        function,
        fact,
        rule,
        let_lattice,
    ];

    Root::new(sp(), imports, decls)
}

fn function_body() -> Expr {
    let literals = [
        "true", "1i8", "1i16", "1i32", "1i64", "1", "1ii", "1.0f32", "1.0f64", "1.0",
    ]
    .into_iter()
    .map(num)
    .collect();

    let patterns = vec![
        pat(PatternKind::Wildcard),
        Pattern::var(ident("p")),
        Pattern::literal(lit("0")),
        pat(PatternKind::Tag {
            enum_name: Some(qname("Shape")),
            tag: ident("Circle"),
            pattern: Some(pat(PatternKind::Tuple(vec![
                pat(PatternKind::Nil),
                pat(PatternKind::OptionNone),
            ]))),
        }),
        pat(PatternKind::Cons {
            head: Pattern::var(ident("h")),
            tail: Pattern::var(ident("t")),
        }),
        pat(PatternKind::Vector {
            elements: vec![Pattern::var(ident("a"))],
            rest: Some(Pattern::var(ident("rest"))),
        }),
        pat(PatternKind::Set {
            elements: vec![],
            rest: None,
        }),
        pat(PatternKind::Map {
            entries: vec![PatternKeyValue::new(
                Pattern::literal(lit("1")),
                Pattern::var(ident("v")),
            )],
            rest: None,
        }),
    ];
    let rules = patterns
        .into_iter()
        .map(|pattern| MatchRule::new(pattern, expr(ExprKind::Wild)))
        .collect();

    let operators = expr(ExprKind::Tuple(vec![
        expr(ExprKind::Unary {
            op: Operator::new(UnaryOp::LogicalNot, sp()),
            operand: var("b"),
        }),
        binary(var("a"), LogicalOp::And, var("b")),
        binary(var("a"), ComparisonOp::Less, var("b")),
        binary(var("a"), AdditiveOp::Plus, var("b")),
        binary(var("a"), MultiplicativeOp::Times, var("b")),
        binary(var("a"), ExtendedOp::Lub, var("b")),
        expr(ExprKind::Infix {
            lhs: var("a"),
            func: qname("Core/max"),
            rhs: var("b"),
        }),
        expr(ExprKind::Ascribe {
            expr: var("a"),
            ty: named("Int"),
        }),
    ]));

    let collections = expr(ExprKind::Apply {
        func: var("f"),
        args: vec![
            expr(ExprKind::Nil),
            expr(ExprKind::OptionNone),
            expr(ExprKind::OptionSome(num("1"))),
            expr(ExprKind::Cons {
                head: num("1"),
                tail: expr(ExprKind::Nil),
            }),
            expr(ExprKind::Vector(literals)),
            expr(ExprKind::Set(vec![])),
            expr(ExprKind::Map(vec![KeyValue::new(num("1"), num("2"))])),
            expr(ExprKind::Tag {
                enum_name: None,
                tag: ident("Red"),
                arg: None,
            }),
        ],
    });

    let lambdas = expr(ExprKind::Tuple(vec![
        expr(ExprKind::UnaryLambda {
            param: ident("x"),
            body: var("x"),
        }),
        expr(ExprKind::Lambda {
            params: NonEmpty::new("lambda parameters", vec![ident("x"), ident("y")]).unwrap(),
            body: var("y"),
        }),
        expr(ExprKind::Existential {
            params: NonEmpty::singleton(argument("x", "Int")),
            body: var("x"),
        }),
    ]));

    let switch = expr(ExprKind::Switch {
        rules: NonEmpty::singleton(SwitchRule::new(var("c"), lambdas)),
    });

    let matched = expr(ExprKind::Match {
        scrutinee: collections,
        rules: NonEmpty::new("match rules", rules).unwrap(),
    });

    expr(ExprKind::LetMatch {
        pattern: Pattern::var(ident("r")),
        value: operators,
        body: expr(ExprKind::IfThenElse {
            cond: var("c"),
            then_branch: matched,
            else_branch: switch,
        }),
    })
}
