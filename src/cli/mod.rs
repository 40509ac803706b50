//! CLI command handlers.
//!
//! Handlers are invoked by main.rs and return the process exit code, so
//! they can be exercised from tests without spawning the binary.

mod config;
mod run;

pub use config::{run_check_config, run_init_config};
pub use run::run_app;

/// Process exit codes.
pub mod exit_codes {
    /// Normal quit
    pub const SUCCESS: i32 = 0;
    /// Config file has invalid values
    pub const CONFIG_INVALID: i32 = 1;
    /// Terminal or IO failure
    pub const ERROR: i32 = 2;
}
