//! Tracked queries over compilation units.
//!
//! Each query walks the unit's tree once and is cached by Salsa until the
//! tree changes.

use flix_ast::{NodeKind, walk};
use flix_core::Diagnostic;
use tracing::debug;

use crate::collect::{Declaration, DeclarationCollector, ErrorCollector, KindCensus};
use crate::database::CompilationUnit;

/// Named declarations of the unit, in source order.
#[salsa::tracked]
pub fn declarations(db: &dyn salsa::Database, unit: CompilationUnit) -> Vec<Declaration> {
    let mut collector = DeclarationCollector::default();
    let _ = walk(unit.root(db), &mut collector);
    debug!(
        path = %unit.path(db).display(),
        count = collector.declarations.len(),
        "collected declarations"
    );
    collector.declarations
}

/// Qualified names of the unit's declarations.
#[salsa::tracked]
pub fn declared_names(db: &dyn salsa::Database, unit: CompilationUnit) -> Vec<String> {
    declarations(db, unit)
        .into_iter()
        .map(|declaration| declaration.name)
        .collect()
}

/// Diagnostics for the syntax errors the parser recovered from.
#[salsa::tracked]
pub fn syntax_errors(db: &dyn salsa::Database, unit: CompilationUnit) -> Vec<Diagnostic> {
    let mut collector = ErrorCollector::default();
    let _ = walk(unit.root(db), &mut collector);
    if !collector.diagnostics.is_empty() {
        debug!(
            path = %unit.path(db).display(),
            errors = collector.diagnostics.len(),
            "unit has syntax errors"
        );
    }
    collector.diagnostics
}

/// Node counts per kind, ordered by kind. Kinds that do not occur are
/// omitted.
#[salsa::tracked]
pub fn kind_census(db: &dyn salsa::Database, unit: CompilationUnit) -> Vec<(NodeKind, usize)> {
    let mut census = KindCensus::default();
    let _ = walk(unit.root(db), &mut census);
    census.counts.into_iter().collect()
}
