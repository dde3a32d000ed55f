//! Identifiers and qualified names.
//!
//! Names are leaf payload, not nodes: the walker reports them through
//! `visit_terminal` instead of entering them.

use std::fmt::{self, Display, Formatter};

use flix_core::Span;
use serde::Serialize;

use crate::error::{ShapeError, ShapeResult, check_span};
use crate::non_empty::NonEmpty;

/// A validated identifier token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Ident {
    span: Span,
    text: String,
}

impl Ident {
    /// Create an identifier, rejecting empty or malformed text.
    ///
    /// Identifiers start with a letter or `_` and continue with letters,
    /// digits, `_` or `'`. Separators (`.`, `/`) belong to [`NName`] and
    /// [`QName`], never to a single identifier.
    pub fn new(span: Span, text: impl Into<String>) -> ShapeResult<Self> {
        let text = text.into();
        let span = check_span(span)?;
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Err(ShapeError::EmptyIdent);
        };
        let valid = (first.is_alphabetic() || first == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '\'');
        if !valid {
            return Err(ShapeError::InvalidIdent { text });
        }
        Ok(Self { span, text })
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A namespace name: `Core.Collections`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NName {
    pub span: Span,
    pub parts: NonEmpty<Ident>,
}

impl NName {
    pub fn new(span: Span, parts: Vec<Ident>) -> ShapeResult<Self> {
        Ok(Self {
            span: check_span(span)?,
            parts: NonEmpty::new("namespace name", parts)?,
        })
    }

    /// A single-segment namespace spanning its identifier.
    pub fn single(ident: Ident) -> Self {
        Self {
            span: ident.span(),
            parts: NonEmpty::singleton(ident),
        }
    }
}

impl Display for NName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(part.as_str())?;
        }
        Ok(())
    }
}

/// A possibly namespace-qualified name: `Core.Collections/size` or `size`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct QName {
    pub span: Span,
    pub namespace: Option<NName>,
    pub ident: Ident,
}

impl QName {
    pub fn new(span: Span, namespace: Option<NName>, ident: Ident) -> ShapeResult<Self> {
        Ok(Self {
            span: check_span(span)?,
            namespace,
            ident,
        })
    }

    /// An unqualified name spanning its identifier.
    pub fn simple(ident: Ident) -> Self {
        Self {
            span: ident.span(),
            namespace: None,
            ident,
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.namespace.is_some()
    }
}

impl Display for QName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{namespace}/")?;
        }
        f.write_str(self.ident.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(text: &str) -> Ident {
        Ident::new(Span::new(0, text.len()), text).unwrap()
    }

    #[test]
    fn test_ident_validation() {
        assert!(Ident::new(Span::new(0, 3), "foo").is_ok());
        assert!(Ident::new(Span::new(0, 2), "x'").is_ok());
        assert!(Ident::new(Span::new(0, 4), "_tmp").is_ok());
        assert_eq!(
            Ident::new(Span::new(0, 0), ""),
            Err(ShapeError::EmptyIdent)
        );
        assert_eq!(
            Ident::new(Span::new(0, 3), "a.b"),
            Err(ShapeError::InvalidIdent {
                text: "a.b".to_owned()
            })
        );
        assert!(Ident::new(Span::new(0, 2), "1x").is_err());
    }

    #[test]
    fn test_ident_rejects_inverted_span() {
        assert!(matches!(
            Ident::new(Span::new(4, 1), "x"),
            Err(ShapeError::InvalidSpan { .. })
        ));
    }

    #[test]
    fn test_nname_requires_parts() {
        assert_eq!(
            NName::new(Span::new(0, 0), Vec::new()),
            Err(ShapeError::EmptySequence {
                what: "namespace name"
            })
        );
    }

    #[test]
    fn test_qname_display() {
        let ns = NName::new(Span::new(0, 16), vec![ident("Core"), ident("Collections")]).unwrap();
        let name = QName::new(Span::new(0, 21), Some(ns), ident("size")).unwrap();
        assert_eq!(name.to_string(), "Core.Collections/size");
        assert!(name.is_qualified());
        assert_eq!(QName::simple(ident("x")).to_string(), "x");
    }
}
