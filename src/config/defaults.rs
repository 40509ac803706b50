//! Default values and accepted ranges for configuration options.

/// Event poll interval for the TUI, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Accepted tick rates. Anything slower makes the success overlay visibly late.
pub const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=1000;

/// How long the "filter created" overlay stays up, in milliseconds.
pub const DEFAULT_SUCCESS_DELAY_MS: u64 = 1500;

pub const SUCCESS_DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 100..=10_000;

/// Theme names understood by the TUI.
pub const THEMES: &[&str] = &["dark", "light"];

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".mailflow.yaml",
    ".mailflow.yml",
    "mailflow.yaml",
    "mailflow.yml",
];
