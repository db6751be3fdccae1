use std::io::{self, Write};

use bydysawd::Imbalance;

const INDENT: &str = "    ";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Balanced,
    Unbalanced,
    Malformed,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Balanced => "balanced",
            Status::Unbalanced => "unbalanced",
            Status::Malformed => "malformed",
        }
    }

    fn mark(self) -> &'static str {
        match self {
            Status::Balanced => "✓",
            Status::Unbalanced | Status::Malformed => "✗",
        }
    }
}

/// Writes `✓ balanced    X3 = X3`, coloured when `color` is set.
pub fn write_status(
    out: &mut impl Write,
    status: Status,
    subject: &str,
    color: bool,
) -> io::Result<()> {
    let mark = status.mark();
    if color {
        let tint = if status == Status::Balanced { GREEN } else { RED };
        writeln!(out, "{tint}{mark}{RESET} {:<11} {subject}", status.label())
    } else {
        writeln!(out, "{mark} {:<11} {subject}", status.label())
    }
}

pub fn write_imbalances(out: &mut impl Write, imbalances: &[Imbalance]) -> io::Result<()> {
    if imbalances.is_empty() {
        return Ok(());
    }

    let lhs_width = column_width("LHS", imbalances.iter().map(|i| i.lhs));
    let rhs_width = column_width("RHS", imbalances.iter().map(|i| i.rhs));

    writeln!(out, "{INDENT}Element  {:>lhs_width$}  {:>rhs_width$}", "LHS", "RHS")?;
    for imbalance in imbalances {
        writeln!(
            out,
            "{INDENT}{:<7}  {:>lhs_width$}  {:>rhs_width$}",
            imbalance.element, imbalance.lhs, imbalance.rhs
        )?;
    }
    Ok(())
}

pub fn write_kv_table(out: &mut impl Write, rows: &[(String, String)]) -> io::Result<()> {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (key, value) in rows {
        writeln!(out, "{key:<key_width$}  {value}")?;
    }
    Ok(())
}

fn column_width(header: &str, values: impl Iterator<Item = u64>) -> usize {
    values
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0)
        .max(header.len())
}
