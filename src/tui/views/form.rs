//! Create/edit form.

use crate::model::{FilterFields, FilterKind};
use crate::tui::theme::ColorScheme;
use crate::tui::widgets::{button, checkbox_line, text_input, text_input_inline};
use crate::workbench::{FormField, ViewKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    view: ViewKind,
    draft: &FilterFields,
    focus: FormField,
    scheme: &ColorScheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(scheme.border(true))
        .title(Span::styled(format!(" {} ", view.title()), scheme.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let kind = draft.kind;
    let fields: Vec<FormField> = FormField::visible(kind).collect();
    // Boxed inputs need three rows each; fall back to one line per field
    // when the terminal is too short to fit them all.
    let boxed_height: u16 = fields
        .iter()
        .map(|field| if field.is_checkbox() { 1 } else { 3 })
        .sum::<u16>()
        + 2;
    let compact = inner.height < boxed_height;

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|field| Constraint::Length(if field.is_checkbox() || compact { 1 } else { 3 }))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1)); // Buttons
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (field, row) in fields.iter().zip(rows.iter()) {
        let focused = *field == focus;
        match field {
            FormField::Name | FormField::Description | FormField::Criteria => {
                let value = match field {
                    FormField::Name => &draft.name,
                    FormField::Description => &draft.description,
                    _ => &draft.criteria,
                };
                let (label, placeholder) = (field.label(kind), field.placeholder(kind));
                if compact {
                    let line = text_input_inline(scheme, label, value, placeholder, focused);
                    frame.render_widget(Paragraph::new(line), *row);
                } else {
                    frame.render_widget(
                        text_input(scheme, label, value, placeholder, focused),
                        *row,
                    );
                }
            }
            FormField::Kind => {
                let selector = Paragraph::new(kind_selector_line(kind, focused, scheme));
                if compact {
                    frame.render_widget(selector, *row);
                } else {
                    frame.render_widget(selector.block(kind_block(kind, focused, scheme)), *row);
                }
            }
            FormField::CaseSensitive => {
                let checked = draft.effective_case_sensitive().unwrap_or(false);
                frame.render_widget(
                    Paragraph::new(checkbox_line(scheme, field.label(kind), checked, focused)),
                    *row,
                );
            }
            FormField::AutoReply | FormField::Active => {
                let checked = if *field == FormField::AutoReply {
                    draft.auto_reply
                } else {
                    draft.active
                };
                frame.render_widget(
                    Paragraph::new(checkbox_line(scheme, field.label(kind), checked, focused)),
                    *row,
                );
            }
        }
    }

    let buttons = Line::from(vec![
        Span::styled("[Esc] ", scheme.shortcut_key()),
        Span::styled("Cancelar", scheme.shortcut_desc()),
        Span::raw("   "),
        Span::styled("[Enter] ", scheme.shortcut_key()),
        button(scheme, "Revisar filtro", draft.is_reviewable()),
    ]);
    if let Some(row) = rows.get(fields.len() + 1) {
        frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Right), *row);
    }
}

/// The three kinds side by side, the current one highlighted.
fn kind_selector_line(current: FilterKind, focused: bool, scheme: &ColorScheme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        if focused { "◀ " } else { "  " },
        scheme.shortcut_key(),
    )];
    for (i, kind) in FilterKind::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if kind == current {
            Style::default()
                .fg(scheme.badge_fg_light)
                .bg(scheme.primary)
                .bold()
        } else {
            Style::default().fg(scheme.text_muted)
        };
        spans.push(Span::styled(format!(" {} {} ", kind.icon(), kind.label()), style));
    }
    if focused {
        spans.push(Span::styled(" ▶", scheme.shortcut_key()));
    }
    Line::from(spans)
}

fn kind_block(current: FilterKind, focused: bool, scheme: &ColorScheme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(scheme.border(focused))
        .title(Span::styled(
            format!(" {} ", FormField::Kind.label(current)),
            if focused {
                scheme.title()
            } else {
                Style::default().fg(scheme.text_muted)
            },
        ))
}
