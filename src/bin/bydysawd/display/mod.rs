mod error;
mod tables;

pub use error::print_error;
pub use tables::{Status, write_imbalances, write_kv_table, write_status};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub quiet: bool,
    pub color: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            quiet: false,
            color: crate::io::stdout_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self {
                quiet: true,
                color: false,
            }
        } else {
            self
        }
    }
}
