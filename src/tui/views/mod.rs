//! Screen renderers.
//!
//! Each renderer draws into the area it is given and reads state only;
//! all mutation happens in the event handlers.

mod form;
mod home;
mod login;
mod overlays;
mod review;

pub use form::render_form;
pub use home::render_home;
pub use login::render_login;
pub use overlays::{render_delete_modal, render_success_overlay};
pub use review::render_review;
