mod common;

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use flix_ast::callbacks::Callbacks;
use flix_ast::lookup::find_first;
use flix_ast::walk::advance;
use flix_ast::*;

use common::*;

#[derive(Default)]
struct Census {
    kinds: BTreeSet<NodeKind>,
    entered: usize,
    exited: usize,
    misshapen: Vec<NodeKind>,
}

impl<'ast> Listener<'ast> for Census {
    fn enter_every_node(&mut self, node: Node<'ast>) -> ControlFlow<(), WalkAction> {
        self.entered += 1;
        self.kinds.insert(node.kind());
        if !node.has_valid_shape() {
            self.misshapen.push(node.kind());
        }
        advance()
    }

    fn exit_every_node(&mut self, _node: Node<'ast>) -> ControlFlow<()> {
        self.exited += 1;
        ControlFlow::Continue(())
    }
}

#[test]
fn test_kitchen_sink_covers_every_kind() {
    let root = kitchen_sink();
    let mut census = Census::default();
    assert!(walk(&root, &mut census).is_continue());

    let missing: Vec<_> = NodeKind::syntactic()
        .filter(|kind| !census.kinds.contains(kind))
        .collect();
    assert!(missing.is_empty(), "missing kinds: {missing:?}");
    assert_eq!(census.kinds.len(), 88);
    assert!(!census.kinds.contains(&NodeKind::Error));
    assert_eq!(census.entered, census.exited);
}

#[test]
fn test_every_node_matches_its_shape() {
    let root = kitchen_sink();
    let mut census = Census::default();
    let _ = walk(&root, &mut census);
    assert!(
        census.misshapen.is_empty(),
        "misshapen: {:?}",
        census.misshapen
    );
}

#[test]
fn test_categories_partition_kinds() {
    let per_category = |category| {
        NodeKind::syntactic()
            .filter(|kind| kind.category() == category)
            .count()
    };
    assert_eq!(per_category(Category::Unit), 1);
    assert_eq!(per_category(Category::Import), 3);
    assert_eq!(per_category(Category::Declaration), 20);
    assert_eq!(per_category(Category::Expression), 31);
    assert_eq!(per_category(Category::Pattern), 11);
    assert_eq!(per_category(Category::Type), 6);
    assert_eq!(per_category(Category::Predicate), 6);
    assert_eq!(per_category(Category::Literal), 10);
}

#[test]
fn test_callbacks_count_matches_listener() {
    let root = kitchen_sink();
    let mut census = Census::default();
    let _ = walk(&root, &mut census);

    let mut table = Callbacks::<usize, ()>::new(0).on_enter_every(|count, _| {
        *count += 1;
        advance()
    });
    let _ = walk(&root, &mut table);
    assert_eq!(table.into_state(), census.entered);
}

#[test]
fn test_find_first_reaches_nested_namespace() {
    let root = kitchen_sink();
    let law = find_first(&root, |node| node.kind() == NodeKind::DeclLaw).unwrap();
    let Node::Decl(Decl::Law(law)) = law else {
        panic!("expected a law, got {law:?}");
    };
    assert_eq!(law.name.as_str(), "reflexive");
}
