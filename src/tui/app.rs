//! Application state for the TUI.

use super::state::ListState;
use crate::config::AppConfig;
use crate::model::{FilterId, FilterSet};
use crate::prefs::Preferences;
use crate::session::SessionGate;
use crate::workbench::{FormField, ViewKind, Workbench};
use std::time::Instant;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Workbench,
}

/// Main application state.
///
/// The workbench exists only while a user is logged in: it is mounted with a
/// fresh filter set on login and dropped on logout, which also discards any
/// pending success timer.
#[derive(Debug)]
pub struct App {
    pub config: AppConfig,
    pub prefs: Preferences,
    pub gate: SessionGate,
    pub workbench: Option<Workbench>,
    /// Selection in the home filter list
    pub home_list: ListState,
    /// Focused input on the create/edit form
    pub form_focus: FormField,
    pub status_message: Option<String>,
    /// Tick counter, advanced on every poll timeout
    pub tick: u64,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let prefs = config.preferences();
        Self {
            config,
            prefs,
            gate: SessionGate::new(),
            workbench: None,
            home_list: ListState::new(),
            form_focus: FormField::default(),
            status_message: None,
            tick: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        if self.workbench.is_some() {
            Screen::Workbench
        } else {
            Screen::Login
        }
    }

    /// Current workbench view, if logged in.
    #[must_use]
    pub fn view_kind(&self) -> Option<ViewKind> {
        self.workbench.as_ref().map(Workbench::view_kind)
    }

    /// Submit the login form; on success mount a fresh workbench.
    pub fn login(&mut self) -> bool {
        if self.gate.submit_login().is_none() {
            return false;
        }
        let filters = if self.config.workbench.seed_samples {
            FilterSet::with_samples()
        } else {
            FilterSet::new()
        };
        let workbench =
            Workbench::new(filters).with_success_delay(self.config.workbench.success_delay());
        self.home_list = ListState::with_total(workbench.filters().len());
        self.form_focus = FormField::default();
        self.workbench = Some(workbench);
        true
    }

    /// Log out and unmount the workbench.
    pub fn logout(&mut self) {
        self.gate.logout();
        self.workbench = None;
        self.home_list = ListState::new();
        self.form_focus = FormField::default();
        self.status_message = None;
    }

    /// Called on every event-loop tick.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        let dismissed = self
            .workbench
            .as_mut()
            .is_some_and(|workbench| workbench.tick(now));
        if dismissed {
            self.sync_home_list();
        }
    }

    /// Keep the list selection within the current number of filters.
    pub fn sync_home_list(&mut self) {
        let total = self.workbench.as_ref().map_or(0, |wb| wb.filters().len());
        self.home_list.resize(total);
    }

    /// Id of the filter under the home selection.
    #[must_use]
    pub fn selected_filter_id(&self) -> Option<FilterId> {
        let workbench = self.workbench.as_ref()?;
        workbench
            .filters()
            .get_index(self.home_list.selected())
            .map(|record| record.id)
    }

    /// Select the filter with the given id, if present.
    pub fn select_filter(&mut self, id: FilterId) {
        if let Some(pos) = self.workbench.as_ref().and_then(|wb| wb.filters().position(id)) {
            self.home_list.set_selected(pos);
        }
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
