//! Filter data model.
//!
//! A [`FilterRecord`] is a committed rule; [`FilterFields`] is the editable
//! part of it and doubles as the draft while a filter is being composed.
//! Records live in a [`FilterSet`], which exists only in process memory.

mod filter;
mod set;

pub use filter::*;
pub use set::*;
