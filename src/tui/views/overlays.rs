//! Modal overlays drawn on top of the current view.

use crate::model::FilterRecord;
use crate::tui::constants::MODAL_WIDTH;
use crate::tui::theme::ColorScheme;
use crate::tui::widgets::{button, centered_fixed, truncate_str};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap};
use std::time::Duration;

/// Delete confirmation for `target`.
pub fn render_delete_modal(frame: &mut Frame, area: Rect, target: &FilterRecord, scheme: &ColorScheme) {
    let popup = centered_fixed(MODAL_WIDTH, 9, area);
    frame.render_widget(Clear, popup);

    let name = truncate_str(target.name(), usize::from(MODAL_WIDTH).saturating_sub(8));
    let lines = vec![
        Line::from(""),
        Line::styled(
            "¿Estás seguro de que deseas eliminar este filtro?",
            Style::default().fg(scheme.text),
        ),
        Line::styled(
            format!("\"{name}\""),
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::styled(
            "Esta acción no se puede deshacer.",
            Style::default().fg(scheme.text_muted),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[n] ", scheme.shortcut_key()),
            button(scheme, "Cancelar", false),
            Span::raw("   "),
            Span::styled("[y] ", scheme.shortcut_key()),
            Span::styled(
                " Eliminar ",
                Style::default()
                    .fg(scheme.badge_fg_light)
                    .bg(scheme.error)
                    .bold(),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.error))
        .title(" Confirmar eliminación ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(scheme.background_alt));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        popup,
    );
}

/// "Filter created" banner with the time left until it closes.
pub fn render_success_overlay(
    frame: &mut Frame,
    area: Rect,
    remaining: Duration,
    total: Duration,
    scheme: &ColorScheme,
) {
    let popup = centered_fixed(MODAL_WIDTH, 7, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.success))
        .style(Style::default().bg(scheme.background_alt));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "✔ ¡Filtro creado exitosamente!",
            Style::default().fg(scheme.success).bold(),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );

    let ratio = if total.is_zero() {
        0.0
    } else {
        (remaining.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(scheme.success).bg(scheme.background_alt))
            .ratio(ratio)
            .label(""),
        rows[3],
    );
}
