//! Configuration validation for mailflow.

use super::defaults::{SUCCESS_DELAY_RANGE_MS, THEMES, TICK_RATE_RANGE_MS};
use super::types::{AppConfig, SessionConfig, TuiConfig, WorkbenchConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.workbench.validate());
        errors.extend(self.session.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEMES.join(", ")
                ),
            });
        }
        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between {} and {} ms, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                ),
            });
        }
        errors
    }
}

impl Validatable for WorkbenchConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !SUCCESS_DELAY_RANGE_MS.contains(&self.success_delay_ms) {
            errors.push(ConfigError {
                field: "workbench.success_delay_ms".to_string(),
                message: format!(
                    "Success delay must be between {} and {} ms, got {}",
                    SUCCESS_DELAY_RANGE_MS.start(),
                    SUCCESS_DELAY_RANGE_MS.end(),
                    self.success_delay_ms
                ),
            });
        }
        errors
    }
}

impl Validatable for SessionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Unknown languages are rejected when deserializing
        Vec::new()
    }
}
