//! Login card.

use crate::prefs::Preferences;
use crate::session::{LoginField, LoginForm};
use crate::tui::constants::LOGIN_CARD_WIDTH;
use crate::tui::theme::{language_badge, ColorScheme};
use crate::tui::widgets::{button, centered_fixed, text_input};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_login(
    frame: &mut Frame,
    area: Rect,
    form: &LoginForm,
    prefs: &Preferences,
    scheme: &ColorScheme,
) {
    let card = centered_fixed(LOGIN_CARD_WIDTH, 18, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.border_focused))
        .style(Style::default().bg(scheme.background_alt))
        .title_top(
            Line::from(vec![Span::raw(" "), language_badge(scheme, prefs), Span::raw(" ")])
                .right_aligned(),
        );
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(2), // Error
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .horizontal_margin(2)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled("✉ MailFlow Pro", scheme.title()))
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Automatización de correos electrónicos",
            Style::default().fg(scheme.text_muted),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    frame.render_widget(
        text_input(
            scheme,
            "Correo electrónico",
            &form.email,
            "tu@correo.com",
            form.focus == LoginField::Email,
        ),
        chunks[3],
    );

    let eye = if form.show_password { "ocultar" } else { "mostrar" };
    let password_label = format!("Contraseña (Ctrl+P {eye})");
    frame.render_widget(
        text_input(
            scheme,
            &password_label,
            &form.masked_password(),
            "••••••••",
            form.focus == LoginField::Password,
        ),
        chunks[4],
    );

    if let Some(err) = form.error {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("⚠ {err}"),
                Style::default().fg(scheme.error),
            )),
            chunks[5],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(button(scheme, "Iniciar sesión", true)))
            .alignment(Alignment::Center),
        chunks[6],
    );
}
