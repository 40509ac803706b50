//! Color schemes and shared styles for the TUI.
//!
//! The active scheme is chosen from [`Preferences`] on every frame, so a
//! dark/light toggle takes effect immediately without global state.

use crate::model::FilterKind;
use crate::prefs::Preferences;
use ratatui::prelude::*;

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection_bg: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(96, 165, 250),
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Rgb(96, 165, 250),
            background: Color::Reset,
            background_alt: Color::Rgb(31, 41, 55),
            text: Color::White,
            text_muted: Color::Gray,
            selection_bg: Color::Rgb(55, 65, 81),

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Rgb(59, 130, 246),

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(209, 213, 219),
            border_focused: Color::Rgb(37, 99, 235),
            background: Color::Rgb(249, 250, 251),
            background_alt: Color::White,
            text: Color::Rgb(17, 24, 39),
            text_muted: Color::Rgb(107, 114, 128),
            selection_bg: Color::Rgb(219, 234, 254),

            success: Color::Rgb(22, 101, 52),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(185, 28, 28),
            info: Color::Rgb(30, 64, 175),

            badge_fg_dark: Color::Rgb(30, 30, 30),
            badge_fg_light: Color::White,
        }
    }

    #[must_use]
    pub const fn for_prefs(prefs: &Preferences) -> Self {
        if prefs.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Base style for whole-screen backgrounds.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).bold()
    }

    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    #[must_use]
    pub fn shortcut_key(&self) -> Style {
        Style::default().fg(self.accent).bold()
    }

    #[must_use]
    pub fn shortcut_desc(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

// ============================================================================
// Badges
// ============================================================================

/// `Activo` / `Inactivo` badge.
#[must_use]
pub fn status_badge(scheme: &ColorScheme, active: bool) -> Span<'static> {
    let (label, bg) = if active {
        ("Activo", scheme.success)
    } else {
        ("Inactivo", scheme.error)
    };
    Span::styled(
        format!(" {label} "),
        Style::default().fg(scheme.badge_fg_light).bg(bg).bold(),
    )
}

#[must_use]
pub fn auto_reply_badge(scheme: &ColorScheme) -> Span<'static> {
    Span::styled(
        " Respuesta automática ",
        Style::default().fg(scheme.badge_fg_light).bg(scheme.info),
    )
}

/// Kind glyph and label, as shown under each filter in the list.
#[must_use]
pub fn kind_spans(scheme: &ColorScheme, kind: FilterKind) -> Vec<Span<'static>> {
    vec![
        Span::styled(kind.icon(), Style::default().fg(scheme.primary)),
        Span::raw(" "),
        Span::styled(kind.label(), Style::default().fg(scheme.text_muted)),
    ]
}

/// Language flag badge shown in the header.
#[must_use]
pub fn language_badge(scheme: &ColorScheme, prefs: &Preferences) -> Span<'static> {
    Span::styled(
        format!(" {} ", prefs.language.code().to_uppercase()),
        Style::default()
            .fg(scheme.badge_fg_dark)
            .bg(scheme.accent)
            .bold(),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Render footer hints as spans
#[must_use]
pub fn render_footer_hints(scheme: &ColorScheme, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), scheme.shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), scheme.shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_follows_prefs() {
        let mut prefs = Preferences::default();
        assert_eq!(ColorScheme::for_prefs(&prefs), ColorScheme::dark());
        prefs.toggle_dark_mode();
        assert_eq!(ColorScheme::for_prefs(&prefs), ColorScheme::light());
    }

    #[test]
    fn test_footer_hints() {
        let scheme = ColorScheme::dark();
        let spans = render_footer_hints(&scheme, &[("n", "nuevo"), ("q", "salir")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[n]nuevo [q]salir");
    }

    #[test]
    fn test_status_badge_labels() {
        let scheme = ColorScheme::dark();
        assert_eq!(status_badge(&scheme, true).content, " Activo ");
        assert_eq!(status_badge(&scheme, false).content, " Inactivo ");
    }
}
