//! Configuration types for mailflow.

use super::defaults::{DEFAULT_SUCCESS_DELAY_MS, DEFAULT_TICK_RATE_MS};
use crate::prefs::{Language, Preferences};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a YAML file and overlaid with CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal UI settings
    pub tui: TuiConfig,
    /// Filter workbench behavior
    pub workbench: WorkbenchConfig,
    /// Session defaults
    pub session: SessionConfig,
}

impl AppConfig {
    /// Initial presentation preferences derived from the config.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            dark_mode: self.tui.theme != "light",
            language: self.session.language,
        }
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark" or "light"
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 10, max = 1000))]
    pub tick_rate_ms: u64,
    /// Enable mouse capture
    pub mouse_enabled: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: false,
        }
    }
}

impl TuiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

// ============================================================================
// Workbench Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct WorkbenchConfig {
    /// How long the "filter created" overlay stays up, in milliseconds
    #[schemars(range(min = 100, max = 10000))]
    pub success_delay_ms: u64,
    /// Start each session with the sample filters
    pub seed_samples: bool,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            success_delay_ms: DEFAULT_SUCCESS_DELAY_MS,
            seed_samples: true,
        }
    }
}

impl WorkbenchConfig {
    #[must_use]
    pub const fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }
}

// ============================================================================
// Session Configuration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SessionConfig {
    /// Initial value of the language flag: "es" or "en"
    pub language: Language,
}
