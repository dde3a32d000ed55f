//! Abstract Syntax Tree (AST) types for Flix, and a listener protocol for
//! walking them.
//!
//! ## Node catalog
//!
//! Flix mixes a functional expression language with Datalog. The tree
//! reflects both halves:
//!
//! - [`Decl`]: definitions, signatures, enums, classes, and the logic side
//!   (relations, lattices, indexes, facts, rules, lattice definitions)
//! - [`Expr`], [`Pattern`], [`Type`]: the functional language
//! - [`Predicate`]: atoms and constraints in fact heads and rule bodies
//! - [`Literal`]: lossless literal tokens
//!
//! Every node carries its own [`Span`](flix_core::Span). Nodes own their
//! children, so a tree is immutable, acyclic and freely shareable across
//! threads once built.
//!
//! ## Construction
//!
//! Structural rules are enforced when nodes are built: fixed arities by
//! struct fields, non-empty sequences by [`NonEmpty`], and the rest by
//! checked constructors returning [`ShapeError`]. A parser that recovers
//! from a syntax error puts an [`ErrorNode`] where the node would have been.
//!
//! ## Traversal
//!
//! [`walk`](walk::walk) drives a [`Listener`](walk::Listener) over a tree
//! with deterministic enter/exit ordering, terminal and error-node visits,
//! per-node skipping and early cancellation. [`Callbacks`](callbacks::Callbacks)
//! builds a listener from closures keyed by [`NodeKind`].

pub mod callbacks;
mod decl;
pub mod error;
mod expr;
mod literal;
pub mod lookup;
mod name;
mod node;
mod non_empty;
mod ops;
mod pattern;
mod predicate;
pub mod shape;
mod types;
pub mod walk;

// Re-export core types
pub use decl::*;
pub use error::{ShapeError, ShapeResult};
pub use expr::*;
pub use literal::{Literal, LiteralKind};
pub use name::{Ident, NName, QName};
pub use node::{Category, Child, ErrorNode, Node, NodeKind, Terminal};
pub use non_empty::NonEmpty;
pub use ops::*;
pub use pattern::*;
pub use predicate::*;
pub use shape::{Arity, ChildClass, Shape, Slot};
pub use types::*;
pub use walk::{Listener, WalkAction, walk};
