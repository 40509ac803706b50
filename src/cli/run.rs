//! `run` command handler: the interactive workbench.

use super::exit_codes;
use crate::config::{AppConfig, Validatable};
use crate::tui::{run_tui, App};
use anyhow::Result;

/// Validate the effective config and run the TUI until the user quits.
pub fn run_app(config: AppConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("config: {error}");
        }
        return Ok(exit_codes::CONFIG_INVALID);
    }

    let mut app = App::new(config);
    run_tui(&mut app)?;
    tracing::info!(filters = app.workbench.as_ref().map_or(0, |wb| wb.filters().len()), "exiting");
    Ok(exit_codes::SUCCESS)
}
