//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 5;

/// Width of the centered login card.
pub(crate) const LOGIN_CARD_WIDTH: u16 = 56;

/// Width of modal dialogs.
pub(crate) const MODAL_WIDTH: u16 = 60;
