//! Presentation preferences shared by the login screen and the workbench.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface language flag.
///
/// Only the flag is stored and displayed; interface strings are not
/// translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unknown language '{s}' (expected es or en)"))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Process-local presentation state, passed down to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: Language::Es,
        }
    }
}

impl Preferences {
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "toggled color mode");
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        tracing::debug!(language = %self.language, "toggled language flag");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut prefs = Preferences::default();
        prefs.toggle_dark_mode();
        assert!(!prefs.dark_mode);
        prefs.toggle_language();
        assert_eq!(prefs.language, Language::En);
        prefs.toggle_language();
        assert_eq!(prefs.language, Language::Es);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Es.to_string(), "es");
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }
}
