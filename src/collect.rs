//! Listeners that summarize a compilation unit.

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use flix_ast::walk::advance;
use flix_ast::{Decl, ErrorNode, Listener, Node, NodeKind, WalkAction};
use flix_core::{Diagnostic, Span};

/// A named declaration and where it lives.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// Fully qualified name: `Core.List/map`, or `Geometry/Ord.eq` for a
    /// class member.
    pub name: String,
    pub kind: NodeKind,
    pub span: Span,
}

/// Collects named declarations, qualifying them by enclosing namespaces
/// and classes.
///
/// Only declaration structure is walked; bodies are skipped.
#[derive(Default)]
pub struct DeclarationCollector {
    namespaces: Vec<String>,
    class: Option<String>,
    pub declarations: Vec<Declaration>,
}

impl DeclarationCollector {
    fn qualify(&self, name: &str) -> String {
        let member = match &self.class {
            Some(class) => format!("{class}.{name}"),
            None => name.to_owned(),
        };
        if self.namespaces.is_empty() {
            member
        } else {
            format!("{}/{member}", self.namespaces.join("."))
        }
    }
}

impl<'ast> Listener<'ast> for DeclarationCollector {
    fn enter_decl(&mut self, decl: &'ast Decl) -> ControlFlow<(), WalkAction> {
        if let Some(name) = decl.name() {
            self.declarations.push(Declaration {
                name: self.qualify(name.as_str()),
                kind: Node::Decl(decl).kind(),
                span: decl.span(),
            });
        }
        match decl {
            Decl::Namespace(namespace) => {
                self.namespaces.push(namespace.name.to_string());
                advance()
            }
            Decl::Class(class) => {
                self.class = Some(class.name.to_string());
                advance()
            }
            _ => ControlFlow::Continue(WalkAction::Skip),
        }
    }

    fn exit_decl(&mut self, decl: &'ast Decl) -> ControlFlow<()> {
        match decl {
            Decl::Namespace(_) => {
                self.namespaces.pop();
            }
            Decl::Class(_) => self.class = None,
            _ => {}
        }
        ControlFlow::Continue(())
    }
}

/// Turns every error placeholder into a diagnostic, in source order.
#[derive(Default)]
pub struct ErrorCollector {
    pub diagnostics: Vec<Diagnostic>,
}

impl<'ast> Listener<'ast> for ErrorCollector {
    fn visit_error_node(&mut self, error: &'ast ErrorNode) -> ControlFlow<()> {
        self.diagnostics.push(error.to_diagnostic());
        ControlFlow::Continue(())
    }
}

/// Counts nodes per kind.
#[derive(Default)]
pub struct KindCensus {
    pub counts: BTreeMap<NodeKind, usize>,
}

impl<'ast> Listener<'ast> for KindCensus {
    fn enter_every_node(&mut self, node: Node<'ast>) -> ControlFlow<(), WalkAction> {
        *self.counts.entry(node.kind()).or_default() += 1;
        advance()
    }
}
