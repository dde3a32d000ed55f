//! Incremental queries over Flix syntax trees.
//!
//! Parsed units are registered with a [`FlixDatabase`]; the queries in
//! [`queries`] walk their trees with the listener protocol from `flix_ast`
//! and are recomputed only when a unit's tree changes.

pub mod collect;
pub mod database;
pub mod queries;

pub use collect::Declaration;
pub use database::{CompilationUnit, FlixDatabase};
pub use queries::{declarations, declared_names, kind_census, syntax_errors};
