//! Configuration module for mailflow.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.mailflow.yaml` file in the current directory or `~/.config/mailflow/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//! workbench:
//!   success_delay_ms: 1000
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    CONFIG_FILE_NAMES, DEFAULT_SUCCESS_DELAY_MS, DEFAULT_TICK_RATE_MS, SUCCESS_DELAY_RANGE_MS,
    TICK_RATE_RANGE_MS,
};
pub use types::{AppConfig, SessionConfig, TuiConfig, WorkbenchConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

use crate::error::MailFlowError;
use std::path::Path;

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of `.mailflow.yaml`.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Load a config file strictly: read errors, parse errors and invalid
/// values are all reported instead of falling back to defaults.
pub fn load_validated(path: &Path) -> crate::error::Result<AppConfig> {
    let config = load_config_file(path).map_err(|err| match err {
        ConfigFileError::Io(source) => MailFlowError::io(path, source),
        other => other.into(),
    })?;
    let errors = config.validate();
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(errors.into())
    }
}
