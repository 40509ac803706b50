//! **MailFlow: an email-filter workbench for the terminal.**
//!
//! A single local user signs in through a presence-checked login form and
//! then manages a list of mail filters: create them through a form and a
//! review step, edit them the same way, and delete them behind a
//! confirmation. Nothing is persisted; every session starts from the
//! configured sample filters.
//!
//! ## Modules
//!
//! - **[`model`]**: [`FilterRecord`], its editable [`FilterFields`] and the
//!   ordered [`FilterSet`].
//! - **[`session`]**: the [`SessionGate`] and its login form.
//! - **[`workbench`]**: the [`Workbench`] view state machine (home, create,
//!   edit, review, delete modal, success overlay).
//! - **[`timer`]**: the [`CancellableTimer`] that dismisses the success overlay.
//! - **[`prefs`]**: dark/light and language preferences shared by all screens.
//! - **[`config`]**: YAML configuration with discovery and validation.
//! - **[`tui`]**: the ratatui front end.
//!
//! ## Driving the workbench without a terminal
//!
//! ```
//! use mailflow::{FilterSet, FormField, FormInput, ViewKind, Workbench};
//! use std::time::Instant;
//!
//! let mut workbench = Workbench::new(FilterSet::with_samples());
//! workbench.begin_create();
//! for c in "Facturas".chars() {
//!     workbench.edit_draft(FormField::Name, FormInput::Char(c));
//! }
//! for c in "facturas@proveedor.com".chars() {
//!     workbench.edit_draft(FormField::Criteria, FormInput::Char(c));
//! }
//! assert!(workbench.review());
//!
//! let now = Instant::now();
//! let id = workbench.confirm_create(now).expect("review step was open");
//! assert!(workbench.filters().contains(id));
//!
//! // The success overlay closes itself once the delay has passed
//! workbench.tick(now + workbench.success_delay());
//! assert_eq!(workbench.view_kind(), ViewKind::Home);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod prefs;
pub mod session;
pub mod timer;
pub mod tui;
pub mod workbench;

pub use config::AppConfig;
pub use error::{MailFlowError, Result};
pub use model::{FilterFields, FilterId, FilterKind, FilterRecord, FilterSet};
pub use prefs::{Language, Preferences};
pub use session::{LoginError, Session, SessionGate};
pub use timer::CancellableTimer;
pub use workbench::{FormField, FormInput, View, ViewKind, Workbench};
