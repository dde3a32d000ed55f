//! Literal values.
//!
//! Numeric literals are stored as their lexical parts, never converted to a
//! machine number: the width of `IntDefault`/`FloatDefault` literals is only
//! decided by a later phase, and big integers have no fixed width at all.

use std::fmt::{self, Display, Formatter};

use flix_core::Span;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::error::{ShapeError, ShapeResult, check_span};

/// The literal kinds of the grammar, one per distinct lexical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum LiteralKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    /// An integer without suffix; width resolved later.
    IntDefault,
    /// Arbitrary precision integer, suffix `ii`.
    BigInt,
    Float32,
    Float64,
    /// A float without suffix; width resolved later.
    FloatDefault,
}

impl LiteralKind {
    pub const ALL: [LiteralKind; 10] = [
        LiteralKind::Bool,
        LiteralKind::Int8,
        LiteralKind::Int16,
        LiteralKind::Int32,
        LiteralKind::Int64,
        LiteralKind::IntDefault,
        LiteralKind::BigInt,
        LiteralKind::Float32,
        LiteralKind::Float64,
        LiteralKind::FloatDefault,
    ];

    /// The suffix that selects this kind in source, empty for the defaults.
    pub const fn suffix(self) -> &'static str {
        match self {
            LiteralKind::Int8 => "i8",
            LiteralKind::Int16 => "i16",
            LiteralKind::Int32 => "i32",
            LiteralKind::Int64 => "i64",
            LiteralKind::BigInt => "ii",
            LiteralKind::Float32 => "f32",
            LiteralKind::Float64 => "f64",
            LiteralKind::Bool | LiteralKind::IntDefault | LiteralKind::FloatDefault => "",
        }
    }

    pub const fn is_integral(self) -> bool {
        matches!(
            self,
            LiteralKind::Int8
                | LiteralKind::Int16
                | LiteralKind::Int32
                | LiteralKind::Int64
                | LiteralKind::IntDefault
                | LiteralKind::BigInt
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(
            self,
            LiteralKind::Float32 | LiteralKind::Float64 | LiteralKind::FloatDefault
        )
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let kind = match suffix {
            "i8" => LiteralKind::Int8,
            "i16" => LiteralKind::Int16,
            "i32" => LiteralKind::Int32,
            "i64" => LiteralKind::Int64,
            "ii" => LiteralKind::BigInt,
            "f32" => LiteralKind::Float32,
            "f64" => LiteralKind::Float64,
            _ => return None,
        };
        Some(kind)
    }
}

/// A literal node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    pub span: Span,
    value: LiteralValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum LiteralValue {
    Bool(bool),
    Number(Number),
}

/// Lexical parts of a numeric literal: `-` `integer` `.fraction` suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Number {
    kind: LiteralKind,
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl Literal {
    pub fn bool(span: Span, value: bool) -> ShapeResult<Self> {
        Ok(Self {
            span: check_span(span)?,
            value: LiteralValue::Bool(value),
        })
    }

    /// An integer literal of an integral `kind` (`Int8`..`BigInt`).
    pub fn int(
        span: Span,
        kind: LiteralKind,
        negative: bool,
        digits: impl Into<String>,
    ) -> ShapeResult<Self> {
        let digits = digits.into();
        let number = Number {
            kind,
            negative,
            integer: digits,
            fraction: None,
        };
        if !kind.is_integral() {
            return Err(number.invalid("integer literal needs an integral kind"));
        }
        if !all_digits(&number.integer) {
            return Err(number.invalid("expected decimal digits"));
        }
        Ok(Self {
            span: check_span(span)?,
            value: LiteralValue::Number(number),
        })
    }

    /// A floating point literal of a float `kind`.
    pub fn float(
        span: Span,
        kind: LiteralKind,
        negative: bool,
        integer: impl Into<String>,
        fraction: impl Into<String>,
    ) -> ShapeResult<Self> {
        let number = Number {
            kind,
            negative,
            integer: integer.into(),
            fraction: Some(fraction.into()),
        };
        if !kind.is_float() {
            return Err(number.invalid("float literal needs a float kind"));
        }
        let digits_ok =
            all_digits(&number.integer) && number.fraction.as_deref().is_some_and(all_digits);
        if !digits_ok {
            return Err(number.invalid("expected decimal digits"));
        }
        Ok(Self {
            span: check_span(span)?,
            value: LiteralValue::Number(number),
        })
    }

    /// Classify a literal token as the lexer produced it.
    ///
    /// Accepts `true`, `false` and `-?digits(.digits)?suffix?`.
    pub fn from_lexeme(span: Span, lexeme: &str) -> ShapeResult<Self> {
        match lexeme {
            "true" => return Self::bool(span, true),
            "false" => return Self::bool(span, false),
            _ => {}
        }
        let invalid = |reason: &'static str| ShapeError::InvalidLiteral {
            lexeme: lexeme.to_owned(),
            reason,
        };

        let (negative, unsigned) = match lexeme.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, lexeme),
        };
        let number_end = unsigned
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(unsigned.len());
        let (number, suffix) = unsigned.split_at(number_end);
        let suffix_kind = if suffix.is_empty() {
            None
        } else {
            Some(LiteralKind::from_suffix(suffix).ok_or_else(|| invalid("unknown suffix"))?)
        };

        match number.split_once('.') {
            Some((integer, fraction)) => {
                let kind = match suffix_kind {
                    None => LiteralKind::FloatDefault,
                    Some(kind) if kind.is_float() => kind,
                    Some(_) => return Err(invalid("integer suffix on a float literal")),
                };
                if !all_digits(integer) || !all_digits(fraction) {
                    return Err(invalid("expected decimal digits"));
                }
                Self::float(span, kind, negative, integer, fraction)
            }
            None => {
                let kind = match suffix_kind {
                    None => LiteralKind::IntDefault,
                    Some(kind) if kind.is_integral() => kind,
                    Some(_) => return Err(invalid("float suffix requires a fraction")),
                };
                if !all_digits(number) {
                    return Err(invalid("expected decimal digits"));
                }
                Self::int(span, kind, negative, number)
            }
        }
    }

    pub fn kind(&self) -> LiteralKind {
        match &self.value {
            LiteralValue::Bool(_) => LiteralKind::Bool,
            LiteralValue::Number(number) => number.kind,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.value {
            LiteralValue::Bool(value) => Some(*value),
            LiteralValue::Number(_) => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(&self.value, LiteralValue::Number(number) if number.negative)
    }

    /// The integer digits, without sign or suffix.
    pub fn integer_digits(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::Number(number) => Some(&number.integer),
            LiteralValue::Bool(_) => None,
        }
    }

    /// The fraction digits of a float literal.
    pub fn fraction_digits(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::Number(number) => number.fraction.as_deref(),
            LiteralValue::Bool(_) => None,
        }
    }

    /// The literal exactly as written in source.
    pub fn lexeme(&self) -> String {
        self.to_string()
    }
}

impl Number {
    fn invalid(&self, reason: &'static str) -> ShapeError {
        ShapeError::InvalidLiteral {
            lexeme: self.to_string(),
            reason,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{fraction}")?;
        }
        f.write_str(self.kind.suffix())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            LiteralValue::Bool(value) => write!(f, "{value}"),
            LiteralValue::Number(number) => number.fmt(f),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Literal", 3)?;
        state.serialize_field("span", &self.span)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("lexeme", &self.lexeme())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> ShapeResult<Literal> {
        Literal::from_lexeme(Span::new(0, text.len()), text)
    }

    #[test]
    fn test_classifies_every_kind() {
        let cases = [
            ("true", LiteralKind::Bool),
            ("1i8", LiteralKind::Int8),
            ("12i16", LiteralKind::Int16),
            ("-7i32", LiteralKind::Int32),
            ("42i64", LiteralKind::Int64),
            ("42", LiteralKind::IntDefault),
            ("123456789012345678901234567890ii", LiteralKind::BigInt),
            ("1.5f32", LiteralKind::Float32),
            ("-0.25f64", LiteralKind::Float64),
            ("3.14", LiteralKind::FloatDefault),
        ];
        for (text, kind) in cases {
            assert_eq!(lex(text).unwrap().kind(), kind, "lexeme {text}");
        }
    }

    #[test]
    fn test_lexeme_is_preserved() {
        for text in ["-0007i32", "00.500", "123456789012345678901234567890ii", "false"] {
            assert_eq!(lex(text).unwrap().lexeme(), text);
        }
    }

    #[test]
    fn test_number_parts() {
        let lit = lex("-12.034f64").unwrap();
        assert!(lit.is_negative());
        assert_eq!(lit.integer_digits(), Some("12"));
        assert_eq!(lit.fraction_digits(), Some("034"));
        assert_eq!(lit.as_bool(), None);
    }

    #[test]
    fn test_rejects_malformed_lexemes() {
        for text in ["", "-", "1.", ".5", "1u8", "1f32", "1.0i32", "1..2", "abc", "--1"] {
            assert!(
                matches!(lex(text), Err(ShapeError::InvalidLiteral { .. })),
                "lexeme {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_checked_constructors() {
        let span = Span::new(0, 3);
        assert!(Literal::int(span, LiteralKind::Int8, false, "127").is_ok());
        assert!(Literal::int(span, LiteralKind::Float32, false, "1").is_err());
        assert!(Literal::int(span, LiteralKind::Int8, false, "1_000").is_err());
        assert!(Literal::float(span, LiteralKind::Int64, false, "1", "0").is_err());
        assert!(Literal::float(span, LiteralKind::FloatDefault, true, "1", "").is_err());
    }

    #[test]
    fn test_serialized_form() {
        insta::assert_json_snapshot!(lex("-5i16").unwrap(), @r#"
        {
          "span": {
            "start": 0,
            "end": 5
          },
          "kind": "Int16",
          "lexeme": "-5i16"
        }
        "#);
    }
}
