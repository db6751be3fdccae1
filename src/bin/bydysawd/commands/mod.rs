mod check;
mod formula;
mod isomer;

use check::run_check;
use formula::run_formula;
use isomer::run_isomer;

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<ExitCode> {
    match command {
        Command::Check(args) => run_check(args, ctx),
        Command::Formula(args) => run_formula(args, ctx),
        Command::Isomer(args) => run_isomer(args, ctx),
    }
}
