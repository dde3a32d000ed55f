//! Flix compiler utilities shared by every front-end crate.
pub mod diagnostic;
pub mod span;

pub use diagnostic::{CompilationPhase, Diagnostic, DiagnosticSeverity};
pub use span::Span;
