//! Parse errors for terms, formulas and equations.
//!
//! Each layer has its own error type, and outer layers keep the inner failure
//! as their [`source`](std::error::Error::source) so callers can report the
//! whole chain.

use super::types::Side;
use thiserror::Error;

/// Errors produced while parsing a single term such as `"F460"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTermError {
    /// The input string was empty.
    #[error("term is empty")]
    Empty,

    /// The first character is not an uppercase element symbol.
    #[error("term must start with an uppercase element symbol, found '{0}'")]
    InvalidElement(char),

    /// The characters after the element symbol are not a decimal count.
    #[error("invalid atom count '{0}'")]
    InvalidCount(String),

    /// An explicit count of zero.
    #[error("atom count must be positive")]
    ZeroCount,
}

/// Errors produced while parsing a compact formula such as `"AX3YM67"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFormulaError {
    /// The input string was empty.
    #[error("formula is empty")]
    Empty,

    /// Characters appear before the first element symbol.
    #[error("formula must start with an uppercase element symbol, found '{0}'")]
    LeadingCharacter(char),

    /// One of the segments between element symbols is not a valid term.
    #[error("invalid term '{text}'")]
    Term {
        text: String,
        #[source]
        source: ParseTermError,
    },

    /// The atom counts add up to more than a `u64` can hold.
    #[error("total atom count of the formula overflows")]
    CountOverflow,
}

/// Errors produced while parsing an equation such as `"X3 + Y2Z = ZX + Y2X4"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEquationError {
    /// No `=` separates the two sides.
    #[error("equation has no '=' separator")]
    MissingSeparator,

    /// More than one `=` was found.
    #[error("equation has {0} '=' separators, expected exactly one")]
    MultipleSeparators(usize),

    /// One side holds no formula at all.
    #[error("the {0} of the equation is empty")]
    EmptySide(Side),

    /// The atom counts on one side add up to more than a `u64` can hold.
    #[error("total atom count on the {0} overflows")]
    CountOverflow(Side),

    /// A formula on one of the sides failed to parse.
    #[error("invalid formula #{} on the {side}", .position + 1)]
    Formula {
        side: Side,
        /// Zero-based position of the formula within its side.
        position: usize,
        #[source]
        source: ParseFormulaError,
    },
}

impl ParseFormulaError {
    pub(crate) fn term(text: impl Into<String>, source: ParseTermError) -> Self {
        Self::Term {
            text: text.into(),
            source,
        }
    }
}

impl ParseEquationError {
    pub(crate) fn formula(side: Side, position: usize, source: ParseFormulaError) -> Self {
        Self::Formula {
            side,
            position,
            source,
        }
    }
}
