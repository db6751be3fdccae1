use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use bydysawd::Element;

#[derive(Parser)]
#[command(
    name = "bydysawd",
    about = "Parse and balance-check Bydysawd chemical equations",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether equations are balanced
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Inspect a single formula
    #[command(visible_alias = "f")]
    Formula(FormulaArgs),

    /// Test whether two formulas are isomers
    #[command(visible_alias = "i")]
    Isomer(IsomerArgs),
}

/// Options shared by all commands.
#[derive(Args)]
pub struct GlobalOptions {
    /// Print nothing; report the result through the exit status only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Equations to check, e.g. "X3 + Y2Z = ZX + Y2X4"
    #[arg(value_name = "EQUATION")]
    pub equations: Vec<String>,

    /// Read equations from a file, one per line (stdin if no equations are given)
    #[arg(short, long, value_name = "FILE", conflicts_with = "equations")]
    pub input: Option<PathBuf>,

    /// List the elements whose totals differ between the sides
    #[arg(short, long)]
    pub details: bool,

    /// Print the pooled, standardised form of each side
    #[arg(short, long)]
    pub standardise: bool,

    /// Report malformed equations and continue with the rest
    #[arg(short, long)]
    pub keep_going: bool,
}

#[derive(Args)]
pub struct FormulaArgs {
    /// Formula to inspect, e.g. "AX3YM67"
    #[arg(value_name = "FORMULA")]
    pub formula: String,

    /// Report the number of atoms of an element, repeatable
    #[arg(short, long = "count", value_name = "ELEMENT", action = ArgAction::Append)]
    pub counts: Vec<Element>,

    /// Also print the standardised form
    #[arg(short, long)]
    pub standardise: bool,
}

#[derive(Args)]
pub struct IsomerArgs {
    /// First formula
    #[arg(value_name = "A")]
    pub first: String,

    /// Second formula
    #[arg(value_name = "B")]
    pub second: String,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_flags() {
        let cli = Cli::try_parse_from(["bydysawd", "-vv", "check", "-d", "A = A", "B = B"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert!(args.details);
        assert_eq!(args.equations, vec!["A = A", "B = B"]);
    }

    #[test]
    fn parses_repeated_element_counts() {
        let cli = Cli::try_parse_from(["bydysawd", "formula", "AX3", "-c", "X", "--count", "A"])
            .unwrap();
        let Command::Formula(args) = cli.command else {
            panic!("expected formula command");
        };
        let symbols: Vec<char> = args.counts.iter().map(|e| e.symbol()).collect();
        assert_eq!(symbols, vec!['X', 'A']);
    }

    #[test]
    fn rejects_invalid_element() {
        assert!(Cli::try_parse_from(["bydysawd", "formula", "AX3", "-c", "x"]).is_err());
    }

    #[test]
    fn input_conflicts_with_inline_equations() {
        assert!(Cli::try_parse_from(["bydysawd", "check", "-i", "eq.txt", "A = A"]).is_err());
    }
}
