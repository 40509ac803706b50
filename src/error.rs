//! Unified error types for mailflow.
//!
//! Login validation failures are not errors in this sense; they are shown
//! on the form and live in [`crate::session::LoginError`]. This module
//! covers what can go wrong around the workbench: the terminal, config
//! files and their validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, ConfigFileError};

/// Main error type for mailflow operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MailFlowError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {context}")]
    Terminal {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Config values out of range
    #[error("Validation failed: {}", format_validation(.0))]
    Validation(Vec<ConfigError>),
}

fn format_validation(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenient Result type for mailflow operations
pub type Result<T> = std::result::Result<T, MailFlowError>;

impl MailFlowError {
    /// Create an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{source}"),
            path: Some(path),
            source,
        }
    }

    /// Create a terminal error with context
    pub fn terminal(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for MailFlowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ConfigFileError> for MailFlowError {
    fn from(err: ConfigFileError) -> Self {
        match err {
            ConfigFileError::Io(source) => source.into(),
            other => Self::Config(other.to_string()),
        }
    }
}

impl From<Vec<ConfigError>> for MailFlowError {
    fn from(errors: Vec<ConfigError>) -> Self {
        Self::Validation(errors)
    }
}

/// Extension trait for attaching terminal context to IO results.
///
/// ```ignore
/// use mailflow::error::TerminalContext;
///
/// crossterm::terminal::enable_raw_mode().terminal_context("enabling raw mode")?;
/// ```
pub trait TerminalContext<T> {
    fn terminal_context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> TerminalContext<T> for std::io::Result<T> {
    fn terminal_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|source| MailFlowError::terminal(context, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = MailFlowError::io("/path/to/.mailflow.yaml", io_err);
        assert!(err.to_string().contains("/path/to/.mailflow.yaml"));
    }

    #[test]
    fn test_config_read_error_without_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MailFlowError::from(ConfigFileError::Io(io_err));
        assert!(matches!(err, MailFlowError::Io { path: None, .. }));
    }

    #[test]
    fn test_terminal_context() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"));
        let err = result.terminal_context("enabling raw mode").unwrap_err();
        assert_eq!(err.to_string(), "Terminal error: enabling raw mode");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_lists_every_field() {
        let err = MailFlowError::from(vec![
            ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: "too small".to_string(),
            },
            ConfigError {
                field: "workbench.success_delay_ms".to_string(),
                message: "too large".to_string(),
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("tui.tick_rate_ms: too small"));
        assert!(display.contains("workbench.success_delay_ms: too large"));
    }
}
