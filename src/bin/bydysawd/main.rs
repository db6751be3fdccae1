use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod logging;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    logging::init(cli.global.verbose);

    let ctx = display::Context::detect().with_quiet(cli.global.quiet);

    match commands::dispatch(cli.command, ctx) {
        Ok(code) => code,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
