use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

use bydysawd::Formula;

use crate::cli::IsomerArgs;
use crate::display::{Context as DisplayContext, write_kv_table};

pub fn run_isomer(args: IsomerArgs, ctx: DisplayContext) -> Result<ExitCode> {
    let first = parse_formula(&args.first)?;
    let second = parse_formula(&args.second)?;

    let isomers = first.is_isomer(&second);

    if !ctx.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_verdict(&mut out, &first, &second, isomers)?;
        out.flush()?;
    }

    Ok(if isomers {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn parse_formula(text: &str) -> Result<Formula> {
    text.parse()
        .with_context(|| format!("Failed to parse formula '{text}'"))
}

fn write_verdict(
    out: &mut impl Write,
    first: &Formula,
    second: &Formula,
    isomers: bool,
) -> io::Result<()> {
    let verdict = if isomers { "are isomers" } else { "are not isomers" };
    writeln!(out, "{first} and {second} {verdict}")?;
    write_kv_table(
        out,
        &[
            (format!("    {first}"), first.standardised().to_string()),
            (format!("    {second}"), second.standardised().to_string()),
        ],
    )
}
