use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid element symbol: '{0}' (expected a single uppercase letter)")]
pub struct ParseElementError(String);

/// A Bydysawd element, written as a single uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(char);

/// Standardised element composition: one entry per element, ascending by symbol.
pub type Composition = BTreeMap<Element, u64>;

impl Element {
    /// Returns `None` unless `symbol` is an ASCII uppercase letter.
    pub fn new(symbol: char) -> Option<Self> {
        symbol.is_ascii_uppercase().then_some(Self(symbol))
    }

    #[inline]
    pub fn symbol(&self) -> char {
        self.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.pad(self.0.encode_utf8(&mut buf))
    }
}

impl TryFrom<char> for Element {
    type Error = ParseElementError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Element::new(c).ok_or_else(|| ParseElementError(c.to_string()))
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Element::new(c).ok_or_else(|| ParseElementError(s.to_string())),
            _ => Err(ParseElementError(s.to_string())),
        }
    }
}

/// One side of an [`Equation`](crate::Equation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left-hand side"),
            Side::Right => write!(f, "right-hand side"),
        }
    }
}
