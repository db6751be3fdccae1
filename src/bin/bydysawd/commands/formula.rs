use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use bydysawd::{Element, Formula};

use crate::cli::FormulaArgs;
use crate::display::{Context as DisplayContext, write_kv_table};

pub fn run_formula(args: FormulaArgs, ctx: DisplayContext) -> Result<ExitCode> {
    let formula: Formula = args
        .formula
        .parse()
        .with_context(|| format!("Failed to parse formula '{}'", args.formula))?;

    if ctx.quiet {
        return Ok(ExitCode::SUCCESS);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_kv_table(&mut out, &formula_rows(&formula, &args.counts, args.standardise))?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn formula_rows(
    formula: &Formula,
    counts: &[Element],
    standardise: bool,
) -> Vec<(String, String)> {
    let mut rows = vec![("Formula".to_string(), formula.to_string())];

    if standardise {
        rows.push(("Standardised".to_string(), formula.standardised().to_string()));
    }

    rows.push(("Atoms".to_string(), formula.total_atoms().to_string()));

    for &element in counts {
        rows.push((
            format!("Count {element}"),
            formula.count_element(element).to_string(),
        ));
    }

    rows
}
