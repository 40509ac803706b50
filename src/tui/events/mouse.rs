//! Mouse event handlers.

use crate::tui::App;
use crate::workbench::ViewKind;
use crossterm::event::{MouseEvent, MouseEventKind};

/// Scroll the home list with the wheel. Ignored while a modal is open.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let on_home = app
        .workbench
        .as_ref()
        .is_some_and(|wb| wb.view_kind() == ViewKind::Home && !wb.has_modal());
    if !on_home {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.home_list.select_prev(),
        MouseEventKind::ScrollDown => app.home_list.select_next(),
        _ => {}
    }
}
