//! Home view: the filter list, or the empty state.

use crate::model::{FilterRecord, FilterSet};
use crate::tui::state::ListState;
use crate::tui::theme::{auto_reply_badge, kind_spans, status_badge, ColorScheme};
use crate::tui::widgets::{button, truncate_str};
use crate::workbench::ViewKind;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, BorderType, Borders, List, ListItem, ListState as RatatuiListState, Paragraph,
};

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    filters: &FilterSet,
    selection: &ListState,
    scheme: &ColorScheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let heading = Line::from(vec![
        Span::styled(ViewKind::Home.title(), scheme.title()),
        Span::styled(
            format!("  ({})", filters.len()),
            Style::default().fg(scheme.text_muted),
        ),
    ]);
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(20)])
        .split(chunks[0]);
    frame.render_widget(Paragraph::new(heading), header[0]);
    frame.render_widget(
        Paragraph::new(Line::from(button(scheme, "+ Añadir Filtro [n]", true)))
            .alignment(Alignment::Right),
        header[1],
    );

    if filters.is_empty() {
        render_empty_state(frame, chunks[2], scheme);
        return;
    }

    let width = chunks[2].width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = filters
        .iter()
        .map(|record| filter_card(record, width, scheme))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(scheme.border(true)),
        )
        .highlight_style(Style::default().bg(scheme.selection_bg))
        .highlight_symbol("▌ ");

    let mut state = RatatuiListState::default().with_selected(Some(selection.selected));
    frame.render_stateful_widget(list, chunks[2], &mut state);
}

fn filter_card(record: &FilterRecord, width: usize, scheme: &ColorScheme) -> ListItem<'static> {
    let fields = &record.fields;

    let mut title = vec![
        Span::styled(
            truncate_str(&fields.name, width.saturating_sub(36)),
            Style::default().fg(scheme.text).bold(),
        ),
        Span::raw("  "),
        status_badge(scheme, fields.active),
    ];
    if fields.auto_reply {
        title.push(Span::raw(" "));
        title.push(auto_reply_badge(scheme));
    }

    let description = if fields.description.is_empty() {
        Line::styled("Sin descripción", Style::default().fg(scheme.muted).italic())
    } else {
        Line::styled(
            truncate_str(&fields.description, width),
            Style::default().fg(scheme.text_muted),
        )
    };

    let mut criteria = kind_spans(scheme, fields.kind);
    criteria.push(Span::styled(": ", Style::default().fg(scheme.text_muted)));
    criteria.push(Span::styled(
        truncate_str(&fields.criteria, width.saturating_sub(20)),
        Style::default().fg(scheme.text),
    ));

    ListItem::new(vec![
        Line::from(title),
        description,
        Line::from(criteria),
        Line::from(""),
    ])
}

fn render_empty_state(frame: &mut Frame, area: Rect, scheme: &ColorScheme) {
    let lines = vec![
        Line::from(""),
        Line::styled("✉", Style::default().fg(scheme.muted)),
        Line::from(""),
        Line::styled("No hay filtros configurados", Style::default().fg(scheme.text).bold()),
        Line::styled(
            "Crea tu primer filtro para organizar tus correos automáticamente",
            Style::default().fg(scheme.text_muted),
        ),
        Line::from(""),
        Line::from(button(scheme, "Crear primer filtro [n]", true)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(scheme.border(false)),
        ),
        area,
    );
}
