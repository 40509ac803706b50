//! Small layout and text helpers shared by the views.

use super::theme::ColorScheme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// A rect of fixed size centered in `r`, shrunk to fit when `r` is smaller.
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > budget {
                return false;
            }
            width += w;
            true
        })
        .collect();
    if max_width > 3 {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect, scheme: &ColorScheme) {
    let lines = vec![
        Line::styled(
            "Terminal demasiado pequeña",
            Style::default().fg(scheme.warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Actual: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(scheme.text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Mínimo: "),
            Span::styled(
                format!("{MIN_WIDTH}x{MIN_HEIGHT}"),
                Style::default().fg(scheme.accent),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// A labelled single-line text input.
///
/// Shows the placeholder in muted text while `value` is empty.
pub fn text_input<'a>(
    scheme: &ColorScheme,
    label: &'a str,
    value: &str,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    Paragraph::new(input_value(scheme, value, placeholder, focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(scheme.border(focused))
            .title(Span::styled(
                format!(" {label} "),
                if focused {
                    scheme.title()
                } else {
                    Style::default().fg(scheme.text_muted)
                },
            )),
    )
}

/// `label: value` on a single row, for short terminals.
pub fn text_input_inline<'a>(
    scheme: &ColorScheme,
    label: &'a str,
    value: &str,
    placeholder: &'a str,
    focused: bool,
) -> Line<'a> {
    let label_style = if focused {
        scheme.title()
    } else {
        Style::default().fg(scheme.text_muted)
    };
    let mut spans = vec![
        Span::styled(if focused { "▶ " } else { "  " }, scheme.title()),
        Span::styled(format!("{label}: "), label_style),
    ];
    spans.extend(input_value(scheme, value, placeholder, focused).spans);
    Line::from(spans)
}

fn input_value<'a>(scheme: &ColorScheme, value: &str, placeholder: &'a str, focused: bool) -> Line<'a> {
    if value.is_empty() {
        Line::styled(placeholder, Style::default().fg(scheme.muted))
    } else if focused {
        Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(scheme.text)),
            Span::styled("▏", Style::default().fg(scheme.primary)),
        ])
    } else {
        Line::styled(value.to_string(), Style::default().fg(scheme.text))
    }
}

/// `[x] label` / `[ ] label`
pub fn checkbox_line(scheme: &ColorScheme, label: &str, checked: bool, focused: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if checked {
        Style::default().fg(scheme.success).bold()
    } else {
        Style::default().fg(scheme.text_muted)
    };
    let label_style = if focused {
        Style::default().fg(scheme.text).bg(scheme.selection_bg).bold()
    } else {
        Style::default().fg(scheme.text)
    };
    Line::from(vec![
        Span::styled(if focused { "▶ " } else { "  " }, scheme.title()),
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(label.to_string(), label_style),
    ])
}

/// A button label, highlighted when it is the active action.
pub fn button(scheme: &ColorScheme, label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(scheme.badge_fg_light).bg(scheme.primary).bold()
    } else {
        Style::default().fg(scheme.muted).bg(scheme.background_alt)
    };
    Span::styled(format!(" {label} "), style)
}
