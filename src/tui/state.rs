//! Selection state for the home filter list.

use super::constants::PAGE_SIZE;

/// Cursor over a list of `total` items.
///
/// `selected` is always `0` for an empty list and `< total` otherwise.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    pub selected: usize,
    pub total: usize,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_total(total: usize) -> Self {
        Self { selected: 0, total }
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    const fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Move the cursor to `idx`, clamped to the last item.
    pub fn set_selected(&mut self, idx: usize) {
        self.selected = idx.min(self.last());
    }

    /// Update the item count after the list changed, keeping the selection in range.
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        self.set_selected(self.selected);
    }

    pub fn select_next(&mut self) {
        self.set_selected(self.selected + 1);
    }

    pub fn select_prev(&mut self) {
        self.set_selected(self.selected.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        self.set_selected(self.selected + PAGE_SIZE);
    }

    pub fn page_up(&mut self) {
        self.set_selected(self.selected.saturating_sub(PAGE_SIZE));
    }

    pub fn go_first(&mut self) {
        self.selected = 0;
    }

    pub fn go_last(&mut self) {
        self.selected = self.last();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_navigation() {
        let mut state = ListState::with_total(10);

        assert_eq!(state.selected(), 0);

        state.select_next();
        assert_eq!(state.selected(), 1);

        state.select_prev();
        assert_eq!(state.selected(), 0);

        // Can't go below 0
        state.select_prev();
        assert_eq!(state.selected(), 0);

        state.go_last();
        assert_eq!(state.selected(), 9);

        // Can't go past end
        state.select_next();
        assert_eq!(state.selected(), 9);
    }

    #[test]
    fn test_list_state_page_navigation() {
        let mut state = ListState::with_total(12);

        state.page_down();
        assert_eq!(state.selected(), 5);

        state.page_down();
        state.page_down();
        assert_eq!(state.selected(), 11);

        state.page_up();
        assert_eq!(state.selected(), 6);
    }

    #[test]
    fn test_empty_list_stays_at_zero() {
        let mut state = ListState::new();
        state.select_next();
        state.page_down();
        state.go_last();
        assert_eq!(state.selected(), 0);
        state.set_selected(4);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn test_resize_clamps_after_delete() {
        let mut state = ListState::with_total(3);
        state.go_last();

        state.resize(2);
        assert_eq!(state.selected(), 1);

        state.resize(0);
        assert_eq!(state.selected(), 0);
    }
}
