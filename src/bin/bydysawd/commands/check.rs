use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Result, bail};
use tracing::debug;

use bydysawd::{Equation, Formula, Side, Term};

use crate::cli::CheckArgs;
use crate::config::{CheckConfig, build_check_config};
use crate::display::{
    self, Context as DisplayContext, Status, write_imbalances, write_kv_table, write_status,
};
use crate::io::{EquationSource, open_input, read_sources, sources_from_args, stdin_is_tty};

pub fn run_check(args: CheckArgs, ctx: DisplayContext) -> Result<ExitCode> {
    let config = build_check_config(&args, ctx);
    let sources = collect_sources(&args)?;
    if sources.is_empty() {
        bail!("No equations to check");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = check_all(&mut out, &sources, &config, ctx.color)?;
    out.flush()?;

    Ok(summary.exit_code())
}

fn collect_sources(args: &CheckArgs) -> Result<Vec<EquationSource>> {
    if !args.equations.is_empty() {
        return Ok(sources_from_args(&args.equations));
    }

    if args.input.is_none() && stdin_is_tty() {
        bail!(
            "No equations given and stdin is a terminal.\n\nUsage: bydysawd check <EQUATION>... or pipe equations via stdin."
        );
    }

    let name = args
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());
    let reader = open_input(args.input.as_deref())?;
    read_sources(reader, &name)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    balanced: usize,
    unbalanced: usize,
    malformed: usize,
}

impl Summary {
    fn total(&self) -> usize {
        self.balanced + self.unbalanced + self.malformed
    }

    fn exit_code(&self) -> ExitCode {
        if self.unbalanced == 0 && self.malformed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn check_all(
    out: &mut impl Write,
    sources: &[EquationSource],
    config: &CheckConfig,
    color: bool,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for source in sources {
        let equation = match source.text.parse::<Equation>() {
            Ok(equation) => equation,
            Err(e) => {
                let err = anyhow::Error::new(e).context(format!(
                    "Failed to parse equation on {}: '{}'",
                    source.origin, source.text
                ));
                if !config.keep_going {
                    return Err(err);
                }
                summary.malformed += 1;
                if !config.quiet {
                    write_status(out, Status::Malformed, &source.text, color)?;
                    display::print_error(&err);
                }
                continue;
            }
        };

        if report(out, &equation, config, color)? {
            summary.balanced += 1;
        } else {
            summary.unbalanced += 1;
        }
    }

    debug!(
        balanced = summary.balanced,
        unbalanced = summary.unbalanced,
        malformed = summary.malformed,
        "check finished"
    );

    if !config.quiet && summary.total() > 1 {
        writeln!(
            out,
            "{} equations: {} balanced, {} unbalanced, {} malformed",
            summary.total(),
            summary.balanced,
            summary.unbalanced,
            summary.malformed
        )?;
    }

    Ok(summary)
}

/// Writes the verdict for one equation and returns whether it balances.
fn report(
    out: &mut impl Write,
    equation: &Equation,
    config: &CheckConfig,
    color: bool,
) -> io::Result<bool> {
    let balanced = equation.is_valid();
    if config.quiet {
        return Ok(balanced);
    }

    let status = if balanced {
        Status::Balanced
    } else {
        Status::Unbalanced
    };
    write_status(out, status, &equation.to_string(), color)?;

    if config.show_standardised {
        let rows = vec![
            ("    LHS".to_string(), pooled(equation, Side::Left).to_string()),
            ("    RHS".to_string(), pooled(equation, Side::Right).to_string()),
        ];
        write_kv_table(out, &rows)?;
    }

    if config.show_imbalances && !balanced {
        write_imbalances(out, &equation.imbalances())?;
    }

    Ok(balanced)
}

/// All terms of one side merged into a single standardised formula.
fn pooled(equation: &Equation, side: Side) -> Formula {
    let terms: Vec<Term> = equation
        .side(side)
        .iter()
        .flat_map(|f| f.terms().iter().copied())
        .collect();
    let mut formula = Formula::from_terms(&terms);
    formula.standardise();
    formula
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CheckConfig {
        CheckConfig {
            show_imbalances: false,
            show_standardised: false,
            keep_going: false,
            quiet: false,
        }
    }

    fn sources(texts: &[&str]) -> Vec<EquationSource> {
        let owned: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
        sources_from_args(&owned)
    }

    fn run(texts: &[&str], config: &CheckConfig) -> (Result<Summary>, String) {
        let mut buf = Vec::new();
        let result = check_all(&mut buf, &sources(texts), config, false);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn reports_each_equation() {
        let (summary, text) = run(&["X3 + Y2Z2 = ZX + Y2X2 + Z", "AB=A"], &config());
        assert_eq!(
            summary.unwrap(),
            Summary {
                balanced: 1,
                unbalanced: 1,
                malformed: 0
            }
        );
        assert_eq!(
            text,
            "✓ balanced    X3 + Y2Z2 = ZX + Y2X2 + Z\n\
             ✗ unbalanced  AB = A\n\
             2 equations: 1 balanced, 1 unbalanced, 0 malformed\n"
        );
    }

    #[test]
    fn details_list_imbalances() {
        let config = CheckConfig {
            show_imbalances: true,
            ..config()
        };
        let (_, text) = run(&["C2 + C3 = C4"], &config);
        assert_eq!(
            text,
            "✗ unbalanced  C2 + C3 = C4\n    Element  LHS  RHS\n    C          5    4\n"
        );
    }

    #[test]
    fn standardise_prints_pooled_sides() {
        let config = CheckConfig {
            show_standardised: true,
            ..config()
        };
        let (_, text) = run(&["ZX + X2 = X3Z"], &config);
        assert_eq!(
            text,
            "✓ balanced    ZX + X2 = X3Z\n    LHS  X3Z\n    RHS  X3Z\n"
        );
    }

    #[test]
    fn malformed_equation_stops_by_default() {
        let (result, text) = run(&["A = A", "A + = B", "B = B"], &config());
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse equation on argument 2: 'A + = B'"
        );
        assert_eq!(text, "✓ balanced    A = A\n");
    }

    #[test]
    fn keep_going_counts_malformed() {
        let config = CheckConfig {
            keep_going: true,
            quiet: true,
            ..config()
        };
        let (summary, text) = run(&["A = A", "A = A = A", "B = C"], &config);
        assert_eq!(
            summary.unwrap(),
            Summary {
                balanced: 1,
                unbalanced: 1,
                malformed: 1
            }
        );
        assert_eq!(text, "");
    }

    #[test]
    fn pooled_merges_every_formula_on_a_side() {
        let equation: Equation = "YX + X2Y = Q".parse().unwrap();
        assert_eq!(pooled(&equation, Side::Left).to_string(), "X3Y2");
        assert_eq!(pooled(&equation, Side::Right).to_string(), "Q");
    }
}
