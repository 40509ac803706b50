//! Read-only summary of a draft before it is committed.

use crate::model::FilterFields;
use crate::tui::theme::{status_badge, ColorScheme};
use crate::tui::widgets::button;
use crate::workbench::ViewKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

pub fn render_review(
    frame: &mut Frame,
    area: Rect,
    view: ViewKind,
    draft: &FilterFields,
    scheme: &ColorScheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(scheme.border(true))
        .title(Span::styled(format!(" {} ", view.title()), scheme.title()));

    let label = Style::default().fg(scheme.text_muted);
    let value = Style::default().fg(scheme.text);
    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<24}"), label),
            Span::styled(text, value),
        ])
    };

    let description = if draft.description.is_empty() {
        "Sin descripción".to_string()
    } else {
        draft.description.clone()
    };

    let mut lines = vec![
        Line::from(""),
        row("Nombre", draft.name.clone()),
        row("Descripción", description),
        row("Tipo", draft.kind.review_label().to_string()),
        row("Criterios", draft.criteria.clone()),
    ];
    if let Some(case_sensitive) = draft.effective_case_sensitive() {
        lines.push(row("Sensible a mayúsculas", yes_no(case_sensitive).to_string()));
    }
    lines.push(row("Respuesta automática", yes_no(draft.auto_reply).to_string()));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<24}", "Estado"), label),
        status_badge(scheme, draft.active),
    ]));
    lines.push(Line::from(""));

    let confirm = if view == ViewKind::ReviewCreate {
        "Crear filtro"
    } else {
        "Guardar cambios"
    };
    lines.push(Line::from(vec![
        Span::styled("[e] ", scheme.shortcut_key()),
        button(scheme, "Volver a editar", false),
        Span::raw("   "),
        Span::styled("[Enter] ", scheme.shortcut_key()),
        button(scheme, confirm, true),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
