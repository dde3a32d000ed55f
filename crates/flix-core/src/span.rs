//! Source location types for tracking positions in source files.

use serde::{Deserialize, Serialize};

/// A span of source code, represented as byte offsets.
///
/// Spans are opaque to the syntax core: they are attached to every node at
/// construction time and only read back by diagnostics and lookups.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `offset`.
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    /// Whether `start <= end`.
    pub const fn is_well_formed(self) -> bool {
        self.start <= self.end
    }

    /// Whether the byte `offset` lies inside this span.
    ///
    /// The end offset is inclusive so that a cursor placed right after the
    /// last character of a node still hits it.
    pub const fn contains(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Create a span that covers both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_cover() {
        let a = Span::new(4, 9);
        let b = Span::new(1, 6);
        assert_eq!(a.cover(b), Span::new(1, 9));
        assert_eq!(b.cover(a), Span::new(1, 9));
    }

    #[test]
    fn test_span_contains_is_end_inclusive() {
        let span = Span::new(3, 7);
        assert!(span.contains(3));
        assert!(span.contains(7));
        assert!(!span.contains(2));
        assert!(!span.contains(8));
    }

    #[test]
    fn test_span_well_formed() {
        assert!(Span::point(5).is_well_formed());
        assert!(Span::point(5).is_empty());
        assert!(!Span::new(6, 5).is_well_formed());
        assert_eq!(Span::new(2, 10).len(), 8);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(12, 20).to_string(), "12..20");
    }

    #[test]
    fn test_span_serializes_as_offsets() {
        insta::assert_json_snapshot!(Span::new(3, 7), @r#"
        {
          "start": 3,
          "end": 7
        }
        "#);
    }
}
