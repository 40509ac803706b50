//! Workbench key handlers, one per view plus the two modals.

use crate::tui::App;
use crate::workbench::{FormField, FormInput, View, ViewKind, Workbench};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

pub(super) fn handle_workbench_key(app: &mut App, key: KeyEvent) {
    let Some(workbench) = app.workbench.as_ref() else {
        return;
    };

    if workbench.delete_target().is_some() {
        handle_delete_modal_key(app, key);
    } else if workbench.is_success_visible() {
        // Only leaving is allowed while the overlay is up
        if key.code == KeyCode::Esc {
            with_workbench(app, Workbench::go_home);
            app.sync_home_list();
        }
    } else {
        match workbench.view_kind() {
            ViewKind::Home => handle_home_key(app, key),
            ViewKind::Create | ViewKind::Edit => handle_form_key(app, key),
            ViewKind::ReviewCreate | ViewKind::ReviewEdit => handle_review_key(app, key),
        }
    }
}

fn with_workbench<R: Default>(app: &mut App, f: impl FnOnce(&mut Workbench) -> R) -> R {
    app.workbench.as_mut().map(f).unwrap_or_default()
}

fn handle_delete_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
            if let Some(removed) = with_workbench(app, Workbench::confirm_delete) {
                app.set_status_message(format!("Filtro \"{}\" eliminado", removed.name()));
            }
            app.sync_home_list();
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            with_workbench(app, Workbench::cancel_delete);
        }
        _ => {}
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('o') => app.logout(),
        KeyCode::Char('t') => app.prefs.toggle_dark_mode(),
        KeyCode::Char('l') => app.prefs.toggle_language(),
        KeyCode::Down | KeyCode::Char('j') => app.home_list.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.home_list.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.home_list.go_first(),
        KeyCode::End | KeyCode::Char('G') => app.home_list.go_last(),
        KeyCode::PageDown => app.home_list.page_down(),
        KeyCode::PageUp => app.home_list.page_up(),
        KeyCode::Char('n' | 'a') => {
            if with_workbench(app, Workbench::begin_create) {
                app.form_focus = FormField::Name;
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = app.selected_filter_id() {
                if with_workbench(app, |wb| wb.begin_edit(id)) {
                    app.form_focus = FormField::Name;
                }
            }
        }
        KeyCode::Delete | KeyCode::Char('d') => {
            if let Some(id) = app.selected_filter_id() {
                with_workbench(app, |wb| wb.request_delete(id));
            }
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(kind) = app
        .workbench
        .as_ref()
        .and_then(|wb| wb.view().draft_fields())
        .map(|fields| fields.kind)
    else {
        return;
    };
    let focus = app.form_focus;

    let input = match key.code {
        KeyCode::Esc => {
            with_workbench(app, Workbench::go_home);
            app.sync_home_list();
            return;
        }
        KeyCode::Enter => {
            if !with_workbench(app, Workbench::review) {
                app.set_status_message("Completa el nombre y los criterios para continuar");
            }
            return;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_focus = focus.next(kind);
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_focus = focus.prev(kind);
            return;
        }
        KeyCode::Left if focus == FormField::Kind => FormInput::Prev,
        KeyCode::Right if focus == FormField::Kind => FormInput::Next,
        KeyCode::Char(' ') if !focus.is_text() => FormInput::Toggle,
        KeyCode::Char(c) => FormInput::Char(c),
        KeyCode::Backspace => FormInput::Backspace,
        _ => return,
    };

    with_workbench(app, |wb| wb.edit_draft(focus, input));
}

fn handle_review_key(app: &mut App, key: KeyEvent) {
    let Some(kind) = app.view_kind() else {
        return;
    };
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => {
            if kind == ViewKind::ReviewCreate {
                if let Some(id) = with_workbench(app, |wb| wb.confirm_create(Instant::now())) {
                    app.sync_home_list();
                    app.select_filter(id);
                }
            } else {
                let id = app.workbench.as_ref().and_then(|wb| match wb.view() {
                    View::ReviewEdit { draft } => Some(draft.id),
                    _ => None,
                });
                if with_workbench(app, Workbench::confirm_edit) {
                    app.sync_home_list();
                    if let Some(id) = id {
                        app.select_filter(id);
                    }
                    app.set_status_message("Cambios guardados");
                }
            }
        }
        KeyCode::Char('e') | KeyCode::Backspace => {
            with_workbench(app, Workbench::edit_again);
        }
        KeyCode::Esc => {
            with_workbench(app, Workbench::go_home);
            app.sync_home_list();
        }
        _ => {}
    }
}
