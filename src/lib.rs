//! Parsing, standardisation and balance checking for Bydysawd chemical equations.
//!
//! Bydysawd is an invented chemistry where every element is named by a single
//! uppercase letter. A formula is a run of terms with no separators
//! (`AX3YM67`), and an equation is a sum of formulas on each side of an `=`
//! (`X3 + Y2Z2 = ZX + Y2X2 + Z`).
//!
//! # Quick Start
//!
//! ```
//! use bydysawd::{Element, Equation, Formula, ParseEquationError};
//!
//! let equation: Equation = "X3 + Y2Z2 = ZX + Y2X2 + Z".parse()?;
//! assert!(equation.is_valid());
//! assert_eq!(equation.lhs().len(), 2);
//! assert_eq!(equation.to_string(), "X3 + Y2Z2 = ZX + Y2X2 + Z");
//!
//! let unbalanced: Equation = "C2 + C3 = C4".parse()?;
//! assert!(!unbalanced.is_valid());
//! let imbalance = unbalanced.imbalances()[0];
//! assert_eq!((imbalance.lhs, imbalance.rhs), (5, 4));
//!
//! let formula: Formula = "W2XW5".parse().unwrap();
//! let w = Element::new('W').unwrap();
//! assert_eq!(formula.count_element(w), 7);
//! assert_eq!(formula.standardised().to_string(), "W7X");
//! assert!(formula.is_isomer(&"XW7".parse().unwrap()));
//! # Ok::<(), ParseEquationError>(())
//! ```
//!
//! # Data Types
//!
//! - [`Term`] — One element symbol and its atom count (`S`, `F460`)
//! - [`Formula`] — Ordered terms; see [`Formula::standardise`] and [`Formula::is_isomer`]
//! - [`Equation`] — Left and right sides; see [`Equation::is_valid`]
//! - [`Element`] — A single uppercase element symbol
//! - [`Composition`] — Element counts in standardised (ascending) order
//! - [`Imbalance`] — An element whose totals differ between the sides
//!
//! All types render back to the textual grammar through [`std::fmt::Display`]
//! and parse from it through [`std::str::FromStr`].
//!
//! # Logging
//!
//! Parsing and balance checks emit [`tracing`] events at `trace` and `debug`
//! level. The library never installs a subscriber.

mod model;
mod text;

pub use model::equation::{Equation, Imbalance};
pub use model::error::{ParseEquationError, ParseFormulaError, ParseTermError};
pub use model::formula::Formula;
pub use model::term::Term;
pub use model::types::{Composition, Element, ParseElementError, Side};

pub use text::{indices_of, last_uppercase};
