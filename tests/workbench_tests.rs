//! Integration tests for the filter workbench.
//!
//! Drives the view state machine the way the TUI does and checks the
//! committed filter set after each flow.

use chrono::{TimeZone, Utc};
use mailflow::{
    FilterFields, FilterId, FilterKind, FilterRecord, FilterSet, FormField, FormInput, View,
    ViewKind, Workbench,
};
use std::time::{Duration, Instant};

// ============================================================================
// Helpers
// ============================================================================

fn type_into(wb: &mut Workbench, field: FormField, text: &str) {
    for c in text.chars() {
        assert!(wb.edit_draft(field, FormInput::Char(c)), "typing into {field:?}");
    }
}

fn create(wb: &mut Workbench, name: &str, criteria: &str, now: Instant) -> FilterId {
    assert!(wb.begin_create());
    type_into(wb, FormField::Name, name);
    type_into(wb, FormField::Criteria, criteria);
    assert!(wb.review());
    wb.confirm_create(now).expect("confirm from review step")
}

fn snapshot(set: &FilterSet) -> Vec<FilterRecord> {
    set.iter().cloned().collect()
}

// ============================================================================
// Create
// ============================================================================

mod create_tests {
    use super::*;

    #[test]
    fn test_create_appends_one_record_with_fresh_id() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        let before = snapshot(wb.filters());

        let id = create(&mut wb, "Test", "x", Instant::now());

        assert_eq!(wb.filters().len(), before.len() + 1);
        assert!(before.iter().all(|record| record.id != id));

        let last = wb.filters().iter().last().expect("non-empty");
        assert_eq!(last.id, id);
        assert_eq!(last.fields.name, "Test");
        assert_eq!(last.fields.criteria, "x");
        assert_eq!(last.fields.kind, FilterKind::Address);
        assert!(last.fields.active);
        assert!(!last.fields.auto_reply);
        assert_eq!(last.fields.case_sensitive, None);

        // Existing records untouched and still first
        assert_eq!(&snapshot(wb.filters())[..before.len()], &before[..]);
    }

    #[test]
    fn test_ids_unique_when_clock_is_behind() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        let wall = Utc.timestamp_millis_opt(2).single().expect("valid timestamp");
        let now = Instant::now();

        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            wb.begin_create();
            type_into(&mut wb, FormField::Name, name);
            type_into(&mut wb, FormField::Criteria, "x");
            wb.review();
            ids.push(wb.confirm_create_at(now, wall).expect("created"));
            wb.go_home();
        }

        let all: Vec<_> = wb.filters().ids().collect();
        let mut dedup = all.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(all.len(), dedup.len());
        assert_eq!(ids, vec![FilterId(4), FilterId(5), FilterId(6)]);
    }

    #[test]
    fn test_keyword_filter_keeps_case_flag() {
        let mut wb = Workbench::new(FilterSet::new());
        wb.begin_create();
        type_into(&mut wb, FormField::Name, "Ofertas");
        wb.edit_draft(FormField::Kind, FormInput::Next);
        type_into(&mut wb, FormField::Criteria, "oferta, descuento");
        wb.edit_draft(FormField::CaseSensitive, FormInput::Toggle);
        wb.review();
        let id = wb.confirm_create(Instant::now()).expect("created");

        let record = wb.filters().get(id).expect("stored");
        assert_eq!(record.kind(), FilterKind::Keyword);
        assert_eq!(record.fields.case_sensitive, Some(true));
        assert_eq!(
            record.fields.criteria_terms().collect::<Vec<_>>(),
            vec!["oferta", "descuento"]
        );
    }

    #[test]
    fn test_switching_back_to_address_drops_case_flag() {
        let mut wb = Workbench::new(FilterSet::new());
        wb.begin_create();
        type_into(&mut wb, FormField::Name, "n");
        type_into(&mut wb, FormField::Criteria, "a@b.c");
        wb.edit_draft(FormField::Kind, FormInput::Next);
        wb.edit_draft(FormField::CaseSensitive, FormInput::Toggle);
        wb.edit_draft(FormField::Kind, FormInput::Prev);
        wb.review();
        let id = wb.confirm_create(Instant::now()).expect("created");

        assert_eq!(wb.filters().get(id).and_then(|r| r.fields.case_sensitive), None);
    }

    #[test]
    fn test_review_blocked_without_required_fields() {
        let mut wb = Workbench::default();
        wb.begin_create();
        type_into(&mut wb, FormField::Criteria, "x");
        assert!(!wb.can_review());
        assert!(!wb.review());
        assert_eq!(wb.view_kind(), ViewKind::Create);
    }

    #[test]
    fn test_confirm_only_from_review() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        assert_eq!(wb.confirm_create(Instant::now()), None);
        wb.begin_create();
        assert_eq!(wb.confirm_create(Instant::now()), None);
        assert_eq!(wb.filters().len(), 3);
    }
}

// ============================================================================
// Edit
// ============================================================================

mod edit_tests {
    use super::*;

    #[test]
    fn test_edit_replaces_only_target_record() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        let before = snapshot(wb.filters());

        assert!(wb.begin_edit(FilterId(2)));
        wb.edit_draft(FormField::Active, FormInput::Toggle);
        type_into(&mut wb, FormField::Description, " (urgente)");
        assert!(wb.review());
        assert_eq!(wb.view_kind(), ViewKind::ReviewEdit);
        assert!(wb.confirm_edit());

        let after = snapshot(wb.filters());
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            assert_eq!(old.id, new.id, "order preserved");
            if old.id == FilterId(2) {
                assert_ne!(old, new);
                assert!(!new.fields.active);
                assert!(new.fields.description.ends_with(" (urgente)"));
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn test_cancelled_edit_leaves_set_unchanged() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        let before = snapshot(wb.filters());

        wb.begin_edit(FilterId(1));
        type_into(&mut wb, FormField::Name, "zzz");
        wb.review();
        wb.edit_again();
        assert!(wb.go_home());

        assert_eq!(snapshot(wb.filters()), before);
    }

    #[test]
    fn test_edit_review_requires_name_and_criteria() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        wb.begin_edit(FilterId(3));
        let len = wb.view().draft_fields().map_or(0, |d| d.criteria.chars().count());
        for _ in 0..len {
            wb.edit_draft(FormField::Criteria, FormInput::Backspace);
        }
        assert!(!wb.review());
        assert_eq!(wb.view_kind(), ViewKind::Edit);
    }
}

// ============================================================================
// Delete
// ============================================================================

mod delete_tests {
    use super::*;

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        assert!(wb.request_delete(FilterId(2)));
        let removed = wb.confirm_delete().expect("removed");

        assert_eq!(removed.id, FilterId(2));
        assert_eq!(wb.filters().len(), 2);
        assert_eq!(
            wb.filters().ids().collect::<Vec<_>>(),
            vec![FilterId(1), FilterId(3)]
        );
        assert!(!wb.has_modal());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        assert!(!wb.request_delete(FilterId(999)));
        assert_eq!(wb.confirm_delete(), None);
        assert_eq!(wb.filters().len(), 3);

        let mut set = FilterSet::with_samples();
        assert_eq!(set.remove(FilterId(999)), None);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_modal_blocks_navigation() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        wb.request_delete(FilterId(1));
        assert!(!wb.begin_create());
        assert!(!wb.begin_edit(FilterId(1)));
        assert!(!wb.go_home());
        assert!(wb.cancel_delete());
        assert!(wb.begin_create());
    }
}

// ============================================================================
// Success overlay and auto-return
// ============================================================================

mod success_tests {
    use super::*;

    #[test]
    fn test_returns_home_after_delay_once() {
        let mut wb = Workbench::new(FilterSet::with_samples());
        let start = Instant::now();
        create(&mut wb, "Test", "x", start);

        assert!(wb.is_success_visible());
        assert_eq!(wb.view_kind(), ViewKind::ReviewCreate);

        // Not yet
        assert!(!wb.tick(start + Duration::from_millis(1499)));
        assert!(wb.is_success_visible());

        assert!(wb.tick(start + Duration::from_millis(1500)));
        assert_eq!(wb.view(), &View::Home);
        assert!(!wb.is_success_visible());

        // At most once, even if the user has moved on
        wb.begin_create();
        assert!(!wb.tick(start + Duration::from_secs(10)));
        assert_eq!(wb.view_kind(), ViewKind::Create);
    }

    #[test]
    fn test_draft_reset_after_create() {
        let mut wb = Workbench::new(FilterSet::new());
        create(&mut wb, "Test", "x", Instant::now());
        assert_eq!(wb.view().draft_fields(), Some(&FilterFields::default()));
    }

    #[test]
    fn test_leaving_early_cancels_auto_return() {
        let mut wb = Workbench::new(FilterSet::new());
        let start = Instant::now();
        create(&mut wb, "Test", "x", start);

        assert!(wb.go_home());
        let id = wb.filters().ids().next().expect("created");
        wb.begin_edit(id);
        assert!(!wb.tick(start + Duration::from_secs(5)));
        assert_eq!(wb.view_kind(), ViewKind::Edit);
    }

    #[test]
    fn test_overlay_blocks_form_edits() {
        let mut wb = Workbench::new(FilterSet::new());
        create(&mut wb, "Test", "x", Instant::now());
        assert!(!wb.edit_again());
        assert!(!wb.edit_draft(FormField::Name, FormInput::Char('z')));
        assert!(wb.draft_fields_mut().is_none());
    }
}
