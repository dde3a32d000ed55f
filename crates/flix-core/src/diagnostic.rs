//! Diagnostic records emitted while building and checking syntax trees.
//!
//! The core only produces the records; rendering them against source text is
//! left to the compiler driver.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::span::Span;

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub severity: DiagnosticSeverity,
    pub phase: CompilationPhase,
}

impl Diagnostic {
    pub fn error(phase: CompilationPhase, span: Span, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            severity: DiagnosticSeverity::Error,
            phase,
        }
    }

    pub fn warning(phase: CompilationPhase, span: Span, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span,
            severity: DiagnosticSeverity::Warning,
            phase,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.phase, self.span, self.message
        )
    }
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    #[display("ERROR")]
    Error,
    #[display("WARNING")]
    Warning,
}

/// Compilation phase where a diagnostic was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CompilationPhase {
    /// Recovered syntax errors reported by the external parser.
    #[display("parsing")]
    Parsing,
    /// Shape violations rejected while constructing AST nodes.
    #[display("ast-construction")]
    AstConstruction,
    /// Findings of listeners walking a finished tree.
    #[display("traversal")]
    Traversal,
}
