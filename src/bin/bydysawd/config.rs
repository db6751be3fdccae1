use crate::cli::CheckArgs;
use crate::display::Context;

/// What `check` reports for each equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    pub show_imbalances: bool,
    pub show_standardised: bool,
    pub keep_going: bool,
    pub quiet: bool,
}

pub fn build_check_config(args: &CheckArgs, ctx: Context) -> CheckConfig {
    CheckConfig {
        show_imbalances: args.details && !ctx.quiet,
        show_standardised: args.standardise && !ctx.quiet,
        keep_going: args.keep_going,
        quiet: ctx.quiet,
    }
}
