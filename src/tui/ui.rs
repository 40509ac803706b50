//! Terminal setup, the main loop and top-level rendering.

use super::app::{App, Screen};
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{language_badge, render_footer_hints, ColorScheme};
use super::views::{
    render_delete_modal, render_form, render_home, render_login, render_review,
    render_success_overlay,
};
use super::widgets::{check_terminal_size, render_size_warning};
use crate::error::{Result, TerminalContext};
use crate::workbench::{ViewKind, Workbench};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::io::{stdout, Stdout};
use std::time::Instant;

/// Run the TUI until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run_tui(app: &mut App) -> Result<()> {
    let mouse = app.config.tui.mouse_enabled;

    enable_raw_mode().terminal_context("enabling raw mode")?;
    let mut stdout = stdout();
    let entered = if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    };
    entered.terminal_context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).terminal_context("creating terminal")?;

    tracing::debug!(tick_rate = ?app.config.tui.tick_rate(), mouse, "tui started");
    let result = main_loop(&mut terminal, app);

    // Restore terminal
    let restored = restore_terminal(&mut terminal, mouse);
    result.and(restored)
}

fn main_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let events = EventHandler::new(app.config.tui.tick_rate());

    loop {
        terminal
            .draw(|frame| render(frame, app))
            .terminal_context("drawing frame")?;

        match events.next().terminal_context("polling events")? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(Instant::now()),
        }

        if app.should_quit {
            tracing::debug!("quit requested");
            return Ok(());
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mouse: bool) -> Result<()> {
    disable_raw_mode().terminal_context("disabling raw mode")?;
    let left = if mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
    };
    left.terminal_context("leaving alternate screen")?;
    terminal.show_cursor().terminal_context("showing cursor")
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let scheme = ColorScheme::for_prefs(&app.prefs);

    frame.render_widget(Block::default().style(scheme.base()), area);

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, &scheme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app, &scheme);

    match (&app.workbench, app.screen()) {
        (Some(workbench), Screen::Workbench) => {
            render_workbench(frame, chunks[1], app, workbench, &scheme);
        }
        _ => render_login(
            frame,
            chunks[1],
            app.gate.login_form(),
            &app.prefs,
            &scheme,
        ),
    }

    render_footer(frame, chunks[2], app, &scheme);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, scheme: &ColorScheme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(scheme.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(40)])
        .split(inner);

    let title = vec![
        Line::styled("✉ MailFlow Pro", scheme.title()),
        Line::styled(
            "Automatización de correos electrónicos",
            Style::default().fg(scheme.text_muted),
        ),
    ];
    frame.render_widget(Paragraph::new(title), cols[0]);

    let mut right = vec![language_badge(scheme, &app.prefs)];
    if let Some(email) = app.gate.user_email() {
        right.push(Span::raw(" "));
        right.push(Span::styled(
            email.to_string(),
            Style::default().fg(scheme.text),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        cols[1],
    );
}

fn render_workbench(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    workbench: &Workbench,
    scheme: &ColorScheme,
) {
    let view = workbench.view_kind();
    match (view, workbench.view().draft_fields()) {
        (ViewKind::Create | ViewKind::Edit, Some(draft)) => {
            render_form(frame, area, view, draft, app.form_focus, scheme);
        }
        (ViewKind::ReviewCreate | ViewKind::ReviewEdit, Some(draft)) => {
            render_review(frame, area, view, draft, scheme);
        }
        _ => render_home(frame, area, workbench.filters(), &app.home_list, scheme),
    }

    if let Some(target) = workbench.delete_target_record() {
        render_delete_modal(frame, area, target, scheme);
    }
    if let Some(overlay) = workbench.success_overlay() {
        let remaining = overlay
            .timer()
            .remaining(Instant::now())
            .unwrap_or_default();
        render_success_overlay(frame, area, remaining, workbench.success_delay(), scheme);
    }
}

fn footer_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    let Some(workbench) = app.workbench.as_ref() else {
        return &[
            ("Tab", "campo"),
            ("Ctrl+P", "contraseña"),
            ("Enter", "entrar"),
            ("Ctrl+T", "tema"),
            ("Ctrl+L", "idioma"),
            ("Esc", "salir"),
        ];
    };
    if workbench.delete_target().is_some() {
        return &[("y", "eliminar"), ("n", "cancelar")];
    }
    if workbench.is_success_visible() {
        return &[("Esc", "inicio")];
    }
    match workbench.view_kind() {
        ViewKind::Home => &[
            ("↑↓", "mover"),
            ("n", "nuevo"),
            ("Enter", "editar"),
            ("d", "eliminar"),
            ("t", "tema"),
            ("l", "idioma"),
            ("o", "cerrar sesión"),
            ("q", "salir"),
        ],
        ViewKind::Create | ViewKind::Edit => &[
            ("Tab", "campo"),
            ("Espacio", "alternar"),
            ("←→", "tipo"),
            ("Enter", "revisar"),
            ("Esc", "cancelar"),
        ],
        ViewKind::ReviewCreate | ViewKind::ReviewEdit => &[
            ("Enter", "confirmar"),
            ("e", "editar"),
            ("Esc", "inicio"),
        ],
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, scheme: &ColorScheme) {
    let line = match &app.status_message {
        Some(msg) => Line::styled(msg.clone(), Style::default().fg(scheme.warning).bold()),
        None => Line::from(render_footer_hints(scheme, footer_hints(app))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
