//! Terminal UI built on ratatui.
//!
//! [`App`] holds the session gate, the mounted workbench and the
//! presentation preferences. Key and mouse events are translated into
//! workbench operations in `events`; `views` draws the current state.
//!
//! The success overlay is dismissed by the workbench's timer, which is
//! polled from [`App::on_tick`] on every event-loop tick.

mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;
mod views;
pub(crate) mod widgets;

pub use app::{App, Screen};
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use state::ListState;
pub use theme::ColorScheme;
pub use ui::{render, run_tui};
