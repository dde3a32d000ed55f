//! Operator taxonomy.
//!
//! Each precedence level of the expression grammar has its own operator
//! enum, so a comparison node can never carry an additive operator.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use flix_core::Span;
use serde::Serialize;

use crate::error::ShapeError;

macro_rules! operator_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $symbol:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The operator as written in source.
            pub const fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ShapeError;

            fn from_str(symbol: &str) -> Result<Self, Self::Err> {
                match symbol {
                    $($symbol => Ok($name::$variant),)+
                    _ => Err(ShapeError::UnknownOperator {
                        symbol: symbol.to_owned(),
                    }),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }
    };
}

operator_enum! {
    /// Prefix operators.
    pub enum UnaryOp {
        Plus => "+",
        Minus => "-",
        BitwiseNegate => "~~~",
        LogicalNot => "!",
    }
}

operator_enum! {
    /// Logical and bitwise connectives, the loosest binding level.
    pub enum LogicalOp {
        And => "&&",
        Or => "||",
        Implication => "==>",
        Biconditional => "<==>",
        BitwiseAnd => "&&&",
        BitwiseOr => "|||",
        BitwiseXor => "^^^",
        BitwiseLeftShift => "<<<",
        BitwiseRightShift => ">>>",
    }
}

operator_enum! {
    pub enum ComparisonOp {
        LessEqual => "<=",
        GreaterEqual => ">=",
        Less => "<",
        Greater => ">",
        Equal => "==",
        NotEqual => "!=",
        Equiv => "≡",
    }
}

operator_enum! {
    pub enum AdditiveOp {
        Plus => "+",
        Minus => "-",
    }
}

operator_enum! {
    pub enum MultiplicativeOp {
        Exponentiate => "**",
        Times => "*",
        Divide => "/",
        Modulo => "%",
    }
}

operator_enum! {
    /// Lattice operators used by user-defined lattices.
    pub enum ExtendedOp {
        /// Partial order.
        Leq => "⊑",
        /// Least upper bound.
        Lub => "⊔",
        /// Greatest lower bound.
        Glb => "⊓",
        Widen => "▽",
        Narrow => "△",
    }
}

/// A binary operator together with its precedence class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Logical(LogicalOp),
    Comparison(ComparisonOp),
    Additive(AdditiveOp),
    Multiplicative(MultiplicativeOp),
    Extended(ExtendedOp),
}

impl BinaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Logical(op) => op.symbol(),
            BinaryOp::Comparison(op) => op.symbol(),
            BinaryOp::Additive(op) => op.symbol(),
            BinaryOp::Multiplicative(op) => op.symbol(),
            BinaryOp::Extended(op) => op.symbol(),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

macro_rules! binary_from {
    ($($op:ident => $variant:ident),+ $(,)?) => {
        $(impl From<$op> for BinaryOp {
            fn from(op: $op) -> Self {
                BinaryOp::$variant(op)
            }
        })+
    };
}

binary_from! {
    LogicalOp => Logical,
    ComparisonOp => Comparison,
    AdditiveOp => Additive,
    MultiplicativeOp => Multiplicative,
    ExtendedOp => Extended,
}

/// An operator token with its own source span.
///
/// The span lets diagnostics point at the operator rather than the whole
/// expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Operator<Op> {
    pub op: Op,
    pub span: Span,
}

impl<Op> Operator<Op> {
    pub const fn new(op: Op, span: Span) -> Self {
        Self { op, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in LogicalOp::ALL {
            assert_eq!(op.symbol().parse::<LogicalOp>(), Ok(*op));
        }
        for op in ExtendedOp::ALL {
            assert_eq!(op.symbol().parse::<ExtendedOp>(), Ok(*op));
        }
    }

    #[test]
    fn test_shared_symbols_resolve_per_class() {
        assert_eq!("-".parse::<UnaryOp>(), Ok(UnaryOp::Minus));
        assert_eq!("-".parse::<AdditiveOp>(), Ok(AdditiveOp::Minus));
        assert!("-".parse::<MultiplicativeOp>().is_err());
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            "<>".parse::<ComparisonOp>(),
            Err(ShapeError::UnknownOperator {
                symbol: "<>".to_owned()
            })
        );
    }

    #[test]
    fn test_binary_op_symbol() {
        let op: BinaryOp = ComparisonOp::NotEqual.into();
        assert_eq!(op.symbol(), "!=");
        assert_eq!(BinaryOp::from(ExtendedOp::Lub).to_string(), "⊔");
    }
}
