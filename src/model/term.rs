use super::error::ParseTermError;
use super::types::Element;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// One element symbol together with its atom count, e.g. `S` or `F460`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    element: Element,
    count: u64,
}

impl Term {
    /// Creates a term directly. The count is expected to be at least one.
    pub fn new(element: Element, count: u64) -> Self {
        debug_assert!(count >= 1, "term count must be positive");
        Self { element, count }
    }

    #[inline]
    pub fn element(&self) -> Element {
        self.element
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.element)
        } else {
            write!(f, "{}{}", self.element, self.count)
        }
    }
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(ParseTermError::Empty)?;
        let element = Element::new(first).ok_or(ParseTermError::InvalidElement(first))?;

        let digits = chars.as_str();
        if digits.is_empty() {
            trace!(term = s, count = 1, "parsed term");
            return Ok(Term::new(element, 1));
        }

        // u64::from_str would also take a leading '+'.
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTermError::InvalidCount(digits.to_string()));
        }
        let count: u64 = digits
            .parse()
            .map_err(|_| ParseTermError::InvalidCount(digits.to_string()))?;
        if count == 0 {
            return Err(ParseTermError::ZeroCount);
        }

        trace!(term = s, count, "parsed term");
        Ok(Term::new(element, count))
    }
}
