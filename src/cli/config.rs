//! Config inspection commands.

use super::exit_codes;
use crate::config::{discover_config_file, generate_full_example_config, load_validated};
use crate::error::MailFlowError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Load and validate the config file, reporting every problem.
///
/// With no explicit path, finding no file is not an error: the defaults apply.
pub fn run_check_config(explicit: Option<&Path>, out: &mut impl Write) -> Result<i32> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let Some(path) = discover_config_file(None) else {
                writeln!(out, "No config file found; using defaults.")?;
                return Ok(exit_codes::SUCCESS);
            };
            path
        }
    };

    match load_validated(&path) {
        Ok(_) => {
            writeln!(out, "{}: OK", path.display())?;
            Ok(exit_codes::SUCCESS)
        }
        Err(MailFlowError::Validation(errors)) => {
            writeln!(out, "{}: {} problem(s)", path.display(), errors.len())?;
            for error in &errors {
                writeln!(out, "  - {error}")?;
            }
            Ok(exit_codes::CONFIG_INVALID)
        }
        Err(MailFlowError::Config(message)) => {
            writeln!(out, "{}: {message}", path.display())?;
            Ok(exit_codes::CONFIG_INVALID)
        }
        Err(err) => Err(err).with_context(|| format!("failed to check {}", path.display())),
    }
}

/// Print the commented example config, or write it to `output`.
///
/// Refuses to overwrite an existing file.
pub fn run_init_config(output: Option<&Path>, out: &mut impl Write) -> Result<i32> {
    let content = generate_full_example_config();
    match output {
        Some(path) => {
            if path.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    path.display()
                );
            }
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "Created {}", path.display())?;
        }
        None => write!(out, "{content}")?,
    }
    Ok(exit_codes::SUCCESS)
}
