//! Core data structures for Bydysawd chemistry.
//!
//! - [`types`] – Element symbols, equation sides and the composition map.
//! - [`term`] – A single element symbol with its atom count.
//! - [`formula`] – An ordered sequence of terms, with counting, standardisation
//!   and isomer comparison.
//! - [`equation`] – Two sums of formulas and the balance check between them.
//! - [`error`] – Parse errors for each layer.
//!
//! Parsing flows upward: an equation parses its formulas, which parse their
//! terms. Each level owns its children outright.

pub mod equation;
pub mod error;
pub mod formula;
pub mod term;
pub mod types;
