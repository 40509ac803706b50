//! Event handling for the TUI.
//!
//! Polls crossterm for key, mouse and resize events and dispatches key
//! presses to the handler for the current screen. A poll timeout becomes
//! [`Event::Tick`], which drives the success-overlay timer.

mod login;
pub mod mouse;
mod workbench;

use super::app::{App, Screen};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;

pub use mouse::handle_mouse_event;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Poll timeout
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    #[must_use]
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_TICK_RATE_MS))
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Clear any status message on key press
    app.clear_status_message();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.should_quit = true;
                return;
            }
            KeyCode::Char('t') => {
                app.prefs.toggle_dark_mode();
                return;
            }
            KeyCode::Char('l') => {
                app.prefs.toggle_language();
                return;
            }
            _ => {}
        }
    }

    match app.screen() {
        Screen::Login => login::handle_login_key(app, key),
        Screen::Workbench => workbench::handle_workbench_key(app, key),
    }
}
