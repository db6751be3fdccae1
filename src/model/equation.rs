use super::error::ParseEquationError;
use super::formula::{Formula, accumulate, checked_total};
use super::types::{Composition, Element, Side};
use crate::text::indices_of;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// An equation with a sum of formulas on each side, e.g. `X3 + Y2Z2 = ZX + Y2X2 + Z`.
///
/// Nothing is enforced at construction time; whether the equation balances is
/// queried with [`is_valid`](Equation::is_valid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    lhs: Vec<Formula>,
    rhs: Vec<Formula>,
}

/// An element whose total atom count differs between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imbalance {
    pub element: Element,
    pub lhs: u64,
    pub rhs: u64,
}

impl Equation {
    pub fn new(lhs: Vec<Formula>, rhs: Vec<Formula>) -> Self {
        Self { lhs, rhs }
    }

    #[inline]
    pub fn lhs(&self) -> &[Formula] {
        &self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &[Formula] {
        &self.rhs
    }

    pub fn side(&self, side: Side) -> &[Formula] {
        match side {
            Side::Left => &self.lhs,
            Side::Right => &self.rhs,
        }
    }

    /// Parses one side of an equation: formulas separated by `+`, with optional
    /// whitespace around each formula.
    pub fn parse_side(s: &str, side: Side) -> Result<Vec<Formula>, ParseEquationError> {
        if s.trim().is_empty() {
            return Err(ParseEquationError::EmptySide(side));
        }

        let formulas = s
            .split('+')
            .enumerate()
            .map(|(position, piece)| {
                piece
                    .trim()
                    .parse::<Formula>()
                    .map_err(|e| ParseEquationError::formula(side, position, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if checked_total(formulas.iter().flat_map(Formula::terms)).is_none() {
            return Err(ParseEquationError::CountOverflow(side));
        }

        Ok(formulas)
    }

    /// Pools the terms of every formula on `side` into a single composition.
    pub fn side_composition(&self, side: Side) -> Composition {
        let mut composition = Composition::new();
        for formula in self.side(side) {
            accumulate(&mut composition, formula.terms());
        }
        composition
    }

    /// Returns `true` iff both sides hold the same number of atoms of every element.
    ///
    /// An element that occurs on only one side makes the equation invalid.
    pub fn is_valid(&self) -> bool {
        let valid = self.side_composition(Side::Left) == self.side_composition(Side::Right);
        debug!(equation = %self, valid, "checked equation balance");
        valid
    }

    /// Lists every element whose totals differ between the sides, ordered by symbol.
    ///
    /// Empty exactly when [`is_valid`](Equation::is_valid) holds.
    pub fn imbalances(&self) -> Vec<Imbalance> {
        let lhs = self.side_composition(Side::Left);
        let rhs = self.side_composition(Side::Right);

        let mut elements: Vec<Element> = lhs.keys().chain(rhs.keys()).copied().collect();
        elements.sort_unstable();
        elements.dedup();

        elements
            .into_iter()
            .filter_map(|element| {
                let l = lhs.get(&element).copied().unwrap_or(0);
                let r = rhs.get(&element).copied().unwrap_or(0);
                (l != r).then_some(Imbalance {
                    element,
                    lhs: l,
                    rhs: r,
                })
            })
            .collect()
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, formulas: &[Formula]) -> fmt::Result {
    for (i, formula) in formulas.iter().enumerate() {
        if i > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{formula}")?;
    }
    Ok(())
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.lhs)?;
        f.write_str(" = ")?;
        write_side(f, &self.rhs)
    }
}

impl FromStr for Equation {
    type Err = ParseEquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let eq = match indices_of(s, '=').as_slice() {
            [] => return Err(ParseEquationError::MissingSeparator),
            [i] => *i,
            many => return Err(ParseEquationError::MultipleSeparators(many.len())),
        };

        let lhs = Self::parse_side(&s[..eq], Side::Left)?;
        let rhs = Self::parse_side(&s[eq + 1..], Side::Right)?;
        debug!(lhs = lhs.len(), rhs = rhs.len(), "parsed equation");

        Ok(Self { lhs, rhs })
    }
}
