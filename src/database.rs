use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use flix_ast::Root;
use salsa::Setter;
use tracing::debug;

/// A parsed source file: its path and the syntax tree the parser built.
#[salsa::input(debug)]
pub struct CompilationUnit {
    #[returns(ref)]
    pub path: PathBuf,
    #[returns(ref)]
    pub root: Root,
}

#[derive(Default, Clone)]
#[salsa::db]
pub struct FlixDatabase {
    storage: salsa::Storage<Self>,
    units: Arc<DashMap<PathBuf, CompilationUnit>>,
}

#[salsa::db]
impl salsa::Database for FlixDatabase {}

impl FlixDatabase {
    /// Register the tree for `path`.
    ///
    /// Reopening a path updates the existing unit in place, so queries that
    /// did not depend on the tree keep their cached results.
    pub fn open_unit(&mut self, path: impl Into<PathBuf>, root: Root) -> CompilationUnit {
        let path = path.into();
        let existing = self.units.get(&path).map(|entry| *entry);
        match existing {
            Some(unit) => {
                debug!(path = %path.display(), "updating compilation unit");
                unit.set_root(self).to(root);
                unit
            }
            None => {
                debug!(path = %path.display(), "opening compilation unit");
                let unit = CompilationUnit::new(self, path.clone(), root);
                self.units.insert(path, unit);
                unit
            }
        }
    }

    pub fn unit(&self, path: &Path) -> Option<CompilationUnit> {
        self.units.get(path).map(|entry| *entry)
    }

    /// Forget the unit for `path`. Its tree is dropped with the database.
    pub fn close_unit(&self, path: &Path) -> Option<CompilationUnit> {
        debug!(path = %path.display(), "closing compilation unit");
        self.units.remove(path).map(|(_, unit)| unit)
    }

    /// Open units, ordered by path.
    pub fn units(&self) -> Vec<CompilationUnit> {
        let mut units: Vec<_> = self
            .units
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        units.sort_by(|a, b| a.0.cmp(&b.0));
        units.into_iter().map(|(_, unit)| unit).collect()
    }
}
