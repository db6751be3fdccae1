use std::io::{self, Write};

use anyhow::Error;

use bydysawd::{ParseEquationError, ParseFormulaError, ParseTermError, Side};

use crate::util::text::wrap;

const WIDTH: usize = 59;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), WIDTH) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), WIDTH - 2) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, WIDTH - 4);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Hints for the innermost recognised cause.
fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ParseTermError>() {
            term_hints(e, &mut hints);
            return hints;
        }
    }
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ParseFormulaError>() {
            formula_hints(e, &mut hints);
            return hints;
        }
    }
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<ParseEquationError>() {
            equation_hints(e, &mut hints);
            return hints;
        }
    }
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<io::Error>() {
            io_hints(e, &mut hints);
            return hints;
        }
    }

    hints
}

fn term_hints(err: &ParseTermError, hints: &mut Vec<String>) {
    match err {
        ParseTermError::Empty => {
            hints.push("A term needs at least an element symbol".into());
        }
        ParseTermError::InvalidElement(c) => {
            hints.push(format!("'{c}' is not an element; elements are single uppercase letters"));
        }
        ParseTermError::InvalidCount(_) => {
            hints.push("Atom counts are plain decimal digits written right after the element, e.g. X3".into());
            hints.push("Formulas may not contain spaces or lowercase letters".into());
        }
        ParseTermError::ZeroCount => {
            hints.push("Leave an element out instead of writing a zero count".into());
        }
    }
}

fn formula_hints(err: &ParseFormulaError, hints: &mut Vec<String>) {
    match err {
        ParseFormulaError::Empty => {
            hints.push("Check for a doubled or trailing '+'".into());
        }
        ParseFormulaError::LeadingCharacter(_) => {
            hints.push("A formula must begin with an uppercase element symbol".into());
            hints.push("Coefficients such as 2X3 are not supported; repeat the formula instead".into());
        }
        ParseFormulaError::CountOverflow => {
            hints.push("Atom counts in one formula may add up to at most 18446744073709551615".into());
        }
        ParseFormulaError::Term { source, .. } => term_hints(source, hints),
    }
}

fn equation_hints(err: &ParseEquationError, hints: &mut Vec<String>) {
    match err {
        ParseEquationError::MissingSeparator => {
            hints.push("Separate the two sides with '=', e.g. X3 + Y2Z = ZX + Y2X4".into());
        }
        ParseEquationError::MultipleSeparators(_) => {
            hints.push("Write one equation per line or per argument".into());
        }
        ParseEquationError::EmptySide(side) => {
            let which = match side {
                Side::Left => "before",
                Side::Right => "after",
            };
            hints.push(format!("Add at least one formula {which} the '='"));
        }
        ParseEquationError::CountOverflow(_) => {
            hints.push("Atom counts on one side may add up to at most 18446744073709551615".into());
        }
        ParseEquationError::Formula { source, .. } => formula_hints(source, hints),
    }
}

fn io_hints(err: &io::Error, hints: &mut Vec<String>) {
    match err.kind() {
        io::ErrorKind::NotFound => {
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        io::ErrorKind::PermissionDenied => {
            hints.push("Check that the file is readable".into());
        }
        io::ErrorKind::InvalidData => {
            hints.push("Equation files must be UTF-8 text".into());
        }
        _ => {}
    }
}
