//! Filter workbench: the view state machine over the filter set.
//!
//! # Views
//!
//! ```text
//!   Home ──begin_create──▶ Create ──review──▶ ReviewCreate ──confirm_create──▶ (success overlay) ──tick──▶ Home
//!     │                      ▲                      │
//!     │                      └──────edit_again──────┘
//!     └──begin_edit──▶ Edit ──review──▶ ReviewEdit ──confirm_edit──▶ Home
//!                       ▲                   │
//!                       └────edit_again─────┘
//! ```
//!
//! Drafts live inside the view that edits them, so leaving a view through
//! [`Workbench::go_home`] discards the draft with it. The delete modal and the
//! success overlay sit on top of the current view.

pub mod form;

use crate::model::{FilterFields, FilterId, FilterRecord, FilterSet};
use crate::timer::CancellableTimer;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

pub use form::{FormField, FormInput};

/// How long the "filter created" overlay stays up by default.
pub const DEFAULT_SUCCESS_DELAY: Duration = Duration::from_millis(1500);

/// The current main view, with the draft it edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Create {
        draft: FilterFields,
    },
    ReviewCreate {
        draft: FilterFields,
    },
    Edit {
        draft: FilterRecord,
    },
    ReviewEdit {
        draft: FilterRecord,
    },
}

/// Data-less tag of a [`View`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    Create,
    ReviewCreate,
    Edit,
    ReviewEdit,
}

impl ViewKind {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Filtros Activos",
            Self::Create => "Crear Nuevo Filtro",
            Self::ReviewCreate => "Revisar Nuevo Filtro",
            Self::Edit => "Editar Filtro",
            Self::ReviewEdit => "Revisar Cambios del Filtro",
        }
    }

    #[must_use]
    pub const fn is_form(self) -> bool {
        matches!(self, Self::Create | Self::Edit)
    }

    #[must_use]
    pub const fn is_review(self) -> bool {
        matches!(self, Self::ReviewCreate | Self::ReviewEdit)
    }
}

impl View {
    #[must_use]
    pub const fn kind(&self) -> ViewKind {
        match self {
            Self::Home => ViewKind::Home,
            Self::Create { .. } => ViewKind::Create,
            Self::ReviewCreate { .. } => ViewKind::ReviewCreate,
            Self::Edit { .. } => ViewKind::Edit,
            Self::ReviewEdit { .. } => ViewKind::ReviewEdit,
        }
    }

    /// Fields of the draft carried by this view, if any.
    #[must_use]
    pub const fn draft_fields(&self) -> Option<&FilterFields> {
        match self {
            Self::Home => None,
            Self::Create { draft } | Self::ReviewCreate { draft } => Some(draft),
            Self::Edit { draft } | Self::ReviewEdit { draft } => Some(&draft.fields),
        }
    }
}

/// The "filter created" overlay and the timer that dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessOverlay {
    pub created: FilterId,
    timer: CancellableTimer,
}

impl SuccessOverlay {
    #[must_use]
    pub const fn timer(&self) -> &CancellableTimer {
        &self.timer
    }
}

/// Owns the filter set, the current view and the two overlays.
///
/// Every operation is a synchronous transition that returns whether it
/// applied; operations that are not valid from the current state change
/// nothing.
#[derive(Debug)]
pub struct Workbench {
    filters: FilterSet,
    view: View,
    delete_target: Option<FilterId>,
    success: Option<SuccessOverlay>,
    success_delay: Duration,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(FilterSet::new())
    }
}

impl Workbench {
    #[must_use]
    pub fn new(filters: FilterSet) -> Self {
        Self {
            filters,
            view: View::Home,
            delete_target: None,
            success: None,
            success_delay: DEFAULT_SUCCESS_DELAY,
        }
    }

    #[must_use]
    pub const fn with_success_delay(mut self, delay: Duration) -> Self {
        self.success_delay = delay;
        self
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub const fn view_kind(&self) -> ViewKind {
        self.view.kind()
    }

    #[must_use]
    pub const fn success_delay(&self) -> Duration {
        self.success_delay
    }

    #[must_use]
    pub const fn delete_target(&self) -> Option<FilterId> {
        self.delete_target
    }

    /// The record the delete modal asks about.
    #[must_use]
    pub fn delete_target_record(&self) -> Option<&FilterRecord> {
        self.delete_target.and_then(|id| self.filters.get(id))
    }

    #[must_use]
    pub const fn success_overlay(&self) -> Option<&SuccessOverlay> {
        self.success.as_ref()
    }

    #[must_use]
    pub const fn is_success_visible(&self) -> bool {
        self.success.is_some()
    }

    /// Whether a modal is on top of the current view.
    #[must_use]
    pub const fn has_modal(&self) -> bool {
        self.delete_target.is_some() || self.success.is_some()
    }

    fn set_view(&mut self, view: View) {
        tracing::debug!(from = ?self.view.kind(), to = ?view.kind(), "view transition");
        self.view = view;
    }

    /// Open the create form with a fresh draft.
    pub fn begin_create(&mut self) -> bool {
        if !matches!(self.view, View::Home) || self.has_modal() {
            return false;
        }
        self.set_view(View::Create {
            draft: FilterFields::default(),
        });
        true
    }

    /// Open the edit form on a copy of an existing record.
    ///
    /// The list is not touched until the edit is confirmed.
    pub fn begin_edit(&mut self, id: FilterId) -> bool {
        if !matches!(self.view, View::Home) || self.has_modal() {
            return false;
        }
        let Some(record) = self.filters.get(id) else {
            return false;
        };
        let draft = record.clone();
        self.set_view(View::Edit { draft });
        true
    }

    /// The draft being edited in the create or edit form.
    pub fn draft_fields_mut(&mut self) -> Option<&mut FilterFields> {
        if self.has_modal() {
            return None;
        }
        match &mut self.view {
            View::Create { draft } => Some(draft),
            View::Edit { draft } => Some(&mut draft.fields),
            _ => None,
        }
    }

    /// Apply one form edit to the draft.
    pub fn edit_draft(&mut self, field: FormField, input: FormInput) -> bool {
        self.draft_fields_mut()
            .is_some_and(|fields| form::apply(fields, field, input))
    }

    /// Whether the form's review action is enabled.
    #[must_use]
    pub fn can_review(&self) -> bool {
        match &self.view {
            View::Create { draft } => draft.is_reviewable(),
            View::Edit { draft } => draft.fields.is_reviewable(),
            _ => false,
        }
    }

    /// Move from a form to its review step.
    pub fn review(&mut self) -> bool {
        if !self.can_review() || self.has_modal() {
            return false;
        }
        let next = match std::mem::take(&mut self.view) {
            View::Create { draft } => View::ReviewCreate { draft },
            View::Edit { draft } => View::ReviewEdit { draft },
            other => other,
        };
        self.set_view(next);
        true
    }

    /// Return from a review step to its form with the draft untouched.
    pub fn edit_again(&mut self) -> bool {
        if !self.view_kind().is_review() || self.has_modal() {
            return false;
        }
        let next = match std::mem::take(&mut self.view) {
            View::ReviewCreate { draft } => View::Create { draft },
            View::ReviewEdit { draft } => View::Edit { draft },
            other => other,
        };
        self.set_view(next);
        true
    }

    /// Commit the reviewed draft as a new filter.
    ///
    /// The new record gets an id distinct from every existing one. The
    /// success overlay opens and the view returns home once the success
    /// delay has elapsed, see [`Workbench::tick`].
    pub fn confirm_create(&mut self, now: Instant) -> Option<FilterId> {
        self.confirm_create_at(now, Utc::now())
    }

    /// [`Workbench::confirm_create`] with an explicit wall-clock time for id allocation.
    pub fn confirm_create_at(&mut self, now: Instant, wall: DateTime<Utc>) -> Option<FilterId> {
        if self.has_modal() {
            return None;
        }
        let View::ReviewCreate { draft } = &mut self.view else {
            return None;
        };
        let fields = std::mem::take(draft);
        let id = self.filters.append(fields, wall);
        tracing::info!(id = %id, total = self.filters.len(), "filter created");

        let mut timer = CancellableTimer::new();
        timer.schedule(now, self.success_delay);
        self.success = Some(SuccessOverlay { created: id, timer });
        Some(id)
    }

    /// Commit the reviewed edit over the record with the same id.
    pub fn confirm_edit(&mut self) -> bool {
        if self.has_modal() || !matches!(self.view, View::ReviewEdit { .. }) {
            return false;
        }
        let View::ReviewEdit { draft } = std::mem::take(&mut self.view) else {
            return false;
        };
        let id = draft.id;
        if self.filters.replace(draft) {
            tracing::info!(id = %id, "filter updated");
        } else {
            tracing::warn!(id = %id, "edited filter no longer exists");
        }
        self.set_view(View::Home);
        true
    }

    /// Back/cancel: go home from any view, dropping the draft.
    ///
    /// Also dismisses the success overlay and cancels its pending timer.
    pub fn go_home(&mut self) -> bool {
        if self.delete_target.is_some() {
            return false;
        }
        let had_success = self.success.take().is_some();
        if matches!(self.view, View::Home) {
            return had_success;
        }
        self.set_view(View::Home);
        true
    }

    /// Open the delete confirmation for a record. Only available from home.
    pub fn request_delete(&mut self, id: FilterId) -> bool {
        if !matches!(self.view, View::Home) || self.has_modal() || !self.filters.contains(id) {
            return false;
        }
        self.delete_target = Some(id);
        true
    }

    /// Delete the record the modal asked about and close it.
    pub fn confirm_delete(&mut self) -> Option<FilterRecord> {
        let id = self.delete_target.take()?;
        let removed = self.filters.remove(id);
        if removed.is_some() {
            tracing::info!(id = %id, total = self.filters.len(), "filter deleted");
        }
        removed
    }

    /// Close the delete modal without touching the set.
    pub fn cancel_delete(&mut self) -> bool {
        self.delete_target.take().is_some()
    }

    /// Advance timers. Returns `true` when the success overlay was dismissed.
    ///
    /// The dismissal fires at most once per creation: it closes the overlay
    /// and forces the view back to home.
    pub fn tick(&mut self, now: Instant) -> bool {
        let fired = self
            .success
            .as_mut()
            .is_some_and(|overlay| overlay.timer.poll(now));
        if fired {
            self.success = None;
            self.set_view(View::Home);
        }
        fired
    }
}
