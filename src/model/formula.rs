use super::error::ParseFormulaError;
use super::term::Term;
use super::types::{Composition, Element};
use crate::text::last_uppercase;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// An ordered sequence of terms, written without separators (e.g. `AX3YM67`).
///
/// A freshly parsed formula keeps its terms in source order and may mention the
/// same element more than once. After [`standardise`](Formula::standardise)
/// each element appears in exactly one term and terms are sorted by symbol.
///
/// Parsing guarantees the total atom count fits in a `u64`, so every sum below
/// is exact. Formulas built by hand that exceed it saturate at `u64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Formula {
    terms: Vec<Term>,
}

impl Formula {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Creates a formula holding its own copy of `terms`.
    ///
    /// Used to pool the terms of several formulas into one working set.
    pub fn from_terms(terms: &[Term]) -> Self {
        Self {
            terms: terms.to_vec(),
        }
    }

    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Total number of atoms of `element`, summing repeated terms.
    ///
    /// Returns 0 if the element does not occur.
    pub fn count_element(&self, element: Element) -> u64 {
        self.terms
            .iter()
            .filter(|t| t.element() == element)
            .fold(0, |acc, t| acc.saturating_add(t.count()))
    }

    /// Total number of atoms across all terms.
    pub fn total_atoms(&self) -> u64 {
        self.terms
            .iter()
            .fold(0, |acc, t| acc.saturating_add(t.count()))
    }

    /// Element counts of this formula, merged per element and ordered by symbol.
    pub fn composition(&self) -> Composition {
        let mut composition = Composition::new();
        accumulate(&mut composition, &self.terms);
        composition
    }

    /// Rewrites the terms into standardised form.
    ///
    /// `<<C,3>,<D,1>,<B,2>,<D,2>,<C,1>>` becomes `<<B,2>,<C,4>,<D,3>>`.
    /// Idempotent; the original term order is discarded.
    pub fn standardise(&mut self) {
        self.terms = self
            .composition()
            .into_iter()
            .map(|(element, count)| Term::new(element, count))
            .collect();
    }

    /// Returns a standardised copy, leaving `self` untouched.
    pub fn standardised(&self) -> Self {
        let mut copy = self.clone();
        copy.standardise();
        copy
    }

    /// Two formulas are isomers when they hold the same number of atoms of
    /// every element. Neither formula is modified.
    pub fn is_isomer(&self, other: &Formula) -> bool {
        self.composition() == other.composition()
    }
}

pub(crate) fn accumulate(composition: &mut Composition, terms: &[Term]) {
    for term in terms {
        let total = composition.entry(term.element()).or_insert(0);
        *total = total.saturating_add(term.count());
    }
}

/// Sum of all counts in `terms`, or `None` if it does not fit in a `u64`.
pub(crate) fn checked_total<'a>(terms: impl IntoIterator<Item = &'a Term>) -> Option<u64> {
    terms
        .into_iter()
        .try_fold(0u64, |acc, t| acc.checked_add(t.count()))
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.terms {
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl FromStr for Formula {
    type Err = ParseFormulaError;

    /// Splits `s` into terms by scanning right to left: every uppercase letter
    /// starts a term that runs up to the start of the term after it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFormulaError::Empty);
        }

        let mut terms = Vec::new();
        let mut end = s.len();
        while let Some(start) = last_uppercase(&s[..end]) {
            let text = &s[start..end];
            let term = text
                .parse::<Term>()
                .map_err(|e| ParseFormulaError::term(text, e))?;
            terms.push(term);
            end = start;
        }

        if let Some(c) = s[..end].chars().next() {
            return Err(ParseFormulaError::LeadingCharacter(c));
        }

        if checked_total(&terms).is_none() {
            return Err(ParseFormulaError::CountOverflow);
        }

        terms.reverse();
        trace!(formula = s, terms = terms.len(), "parsed formula");
        Ok(Self { terms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::ParseTermError;

    fn el(c: char) -> Element {
        Element::new(c).unwrap()
    }

    fn t(c: char, n: u64) -> Term {
        Term::new(el(c), n)
    }

    fn f(s: &str) -> Formula {
        s.parse().unwrap()
    }

    #[test]
    fn parse_keeps_source_order() {
        let formula = f("AX3YM67");
        assert_eq!(
            formula.terms(),
            &[t('A', 1), t('X', 3), t('Y', 1), t('M', 67)]
        );
    }

    #[test]
    fn parse_single_term() {
        assert_eq!(f("Z").terms(), &[t('Z', 1)]);
    }

    #[test]
    fn parse_keeps_repeated_elements() {
        assert_eq!(f("W2XW5").terms(), &[t('W', 2), t('X', 1), t('W', 5)]);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<Formula>().unwrap_err(), ParseFormulaError::Empty);
    }

    #[test]
    fn parse_rejects_leading_garbage() {
        assert_eq!(
            "3AX".parse::<Formula>().unwrap_err(),
            ParseFormulaError::LeadingCharacter('3')
        );
        assert_eq!(
            "abc".parse::<Formula>().unwrap_err(),
            ParseFormulaError::LeadingCharacter('a')
        );
    }

    #[test]
    fn parse_rejects_bad_term() {
        let err = "AX3bY".parse::<Formula>().unwrap_err();
        assert_eq!(
            err,
            ParseFormulaError::Term {
                text: "X3b".to_string(),
                source: ParseTermError::InvalidCount("3b".to_string()),
            }
        );
        assert_eq!(err.to_string(), "invalid term 'X3b'");
    }

    #[test]
    fn parse_rejects_total_count_overflow() {
        let err = "Z18446744073709551615Z".parse::<Formula>().unwrap_err();
        assert_eq!(err, ParseFormulaError::CountOverflow);
        assert_eq!(err.to_string(), "total atom count of the formula overflows");
        assert!("AZ18446744073709551615".parse::<Formula>().is_err());
    }

    #[test]
    fn parse_accepts_total_at_the_limit() {
        let formula = f("Z18446744073709551614Z");
        assert_eq!(formula.count_element(el('Z')), u64::MAX);
        assert_eq!(formula.total_atoms(), u64::MAX);
        assert_eq!(formula.standardised().to_string(), "Z18446744073709551615");
    }

    #[test]
    fn hand_built_totals_saturate() {
        let formula = Formula::new(vec![t('Z', u64::MAX), t('Z', 2)]);
        assert_eq!(formula.count_element(el('Z')), u64::MAX);
        assert_eq!(formula.total_atoms(), u64::MAX);
    }

    #[test]
    fn parse_rejects_inner_whitespace() {
        assert!("A X".parse::<Formula>().is_err());
    }

    #[test]
    fn display_concatenates_terms() {
        let formula = Formula::new(vec![t('B', 22), t('E', 1), t('D', 3)]);
        assert_eq!(formula.to_string(), "B22ED3");
    }

    #[test]
    fn from_terms_copies() {
        let terms = vec![t('A', 2), t('B', 1)];
        let formula = Formula::from_terms(&terms);
        assert_eq!(formula.terms(), terms.as_slice());
    }

    #[test]
    fn count_element_sums_duplicates() {
        let formula = Formula::new(vec![t('W', 2), t('X', 1), t('W', 5)]);
        assert_eq!(formula.count_element(el('W')), 7);
        assert_eq!(formula.count_element(el('X')), 1);
        assert_eq!(formula.count_element(el('Q')), 0);
    }

    #[test]
    fn count_element_on_standardised_formula() {
        let formula = f("C3DB2D2C").standardised();
        assert_eq!(formula.count_element(el('C')), 4);
        assert_eq!(formula.count_element(el('A')), 0);
    }

    #[test]
    fn total_atoms_sums_all_counts() {
        assert_eq!(f("AX3YM67").total_atoms(), 72);
    }

    #[test]
    fn standardise_merges_and_sorts() {
        let mut formula = Formula::new(vec![t('C', 3), t('D', 1), t('B', 2), t('D', 2), t('C', 1)]);
        formula.standardise();
        assert_eq!(formula.terms(), &[t('B', 2), t('C', 4), t('D', 3)]);
        assert_eq!(formula.to_string(), "B2C4D3");
    }

    #[test]
    fn standardise_is_idempotent() {
        let mut formula = f("ZYX2Y3A");
        formula.standardise();
        let once = formula.to_string();
        formula.standardise();
        assert_eq!(formula.to_string(), once);
        assert_eq!(once, "AX2Y4Z");
    }

    #[test]
    fn standardised_leaves_original_untouched() {
        let formula = f("ZA");
        assert_eq!(formula.standardised().to_string(), "AZ");
        assert_eq!(formula.to_string(), "ZA");
    }

    #[test]
    fn standardised_render_round_trips() {
        let formula = f("YX2Y3").standardised();
        let reparsed = f(&formula.to_string());
        assert_eq!(reparsed, formula);
    }

    #[test]
    fn is_isomer_ignores_order_and_grouping() {
        let a = f("AB2A");
        let b = f("B2A2");
        assert!(a.is_isomer(&b));
        assert!(b.is_isomer(&a));
        assert!(!a.is_isomer(&f("AB2")));
    }

    #[test]
    fn is_isomer_is_reflexive_and_pure() {
        let a = f("XYX");
        assert!(a.is_isomer(&a));
        assert_eq!(a.to_string(), "XYX");
    }

    #[test]
    fn composition_is_sorted() {
        let composition = f("ZAZ3").composition();
        let entries: Vec<(char, u64)> = composition
            .into_iter()
            .map(|(e, n)| (e.symbol(), n))
            .collect();
        assert_eq!(entries, vec![('A', 1), ('Z', 4)]);
    }
}
