//! Tests for the tabular data engine
//!
//! Unit coverage for the documented filter/sort/distinct behaviors plus
//! property tests over arbitrary row collections.

use crate::api::Signal;
use crate::fraud_table::{signal_columns, SIGNAL_COLUMN, STATUS_COLUMN};
use crate::table::{SortDirection, Table, TableContent};
use proptest::prelude::*;

fn signal(id: i64, label: &str, status: &str) -> Signal {
    Signal {
        id,
        signal: label.to_string(),
        status: status.to_string(),
    }
}

fn demo_rows() -> Vec<Signal> {
    vec![
        signal(1, "Image Manipulation", "POSSIBLE_IMAGE_MANIPULATION"),
        signal(2, "Is Identity Document", "PASS"),
    ]
}

fn signal_table() -> Table<Signal> {
    Table::new(signal_columns()).with_categorical_column(STATUS_COLUMN)
}

// ============================================================================
// GLOBAL FILTER
// ============================================================================

#[test]
fn test_global_filter_scenario() {
    let rows = demo_rows();
    let mut table = signal_table();

    table.set_global_filter("identity");
    let view = table.rows(&rows);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, 2);
}

#[test]
fn test_empty_filter_retains_all_rows() {
    let rows = demo_rows();
    let table = signal_table();
    assert_eq!(table.rows(&rows).len(), 2);
}

#[test]
fn test_global_filter_matches_any_cell() {
    let rows = demo_rows();
    let mut table = signal_table();

    // Matches only in the status cell, not the signal label.
    table.set_global_filter("possible_image");
    let view = table.rows(&rows);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, 1);
}

#[test]
fn test_case_sensitive_filter_is_configurable() {
    let rows = demo_rows();
    let mut table = signal_table().case_sensitive(true);

    table.set_global_filter("identity");
    assert!(table.rows(&rows).is_empty());

    table.set_global_filter("Identity");
    assert_eq!(table.rows(&rows).len(), 1);
}

// ============================================================================
// CATEGORICAL FILTER
// ============================================================================

#[test]
fn test_categorical_filter_scenario() {
    let rows = demo_rows();
    let mut table = signal_table();

    table.set_categorical_filter(Some("PASS".to_string()));
    let view = table.rows(&rows);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, 2);

    table.set_categorical_filter(None);
    assert_eq!(table.rows(&rows).len(), 2);
}

#[test]
fn test_categorical_filter_is_exact_match() {
    let rows = demo_rows();
    let mut table = signal_table();

    table.set_categorical_filter(Some("PASS_".to_string()));
    assert!(table.rows(&rows).is_empty());
}

#[test]
fn test_categorical_and_global_filters_compose() {
    let mut rows = demo_rows();
    rows.push(signal(3, "Identity Watermark", "POSSIBLE_IMAGE_MANIPULATION"));
    let mut table = signal_table();

    table.set_global_filter("identity");
    table.set_categorical_filter(Some("PASS".to_string()));
    let view = table.rows(&rows);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, 2);
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn test_sort_cycle_on_same_column() {
    let mut table = signal_table();
    assert_eq!(table.sort_for(SIGNAL_COLUMN), None);

    table.toggle_sort(SIGNAL_COLUMN);
    assert_eq!(table.sort_for(SIGNAL_COLUMN), Some(SortDirection::Ascending));

    table.toggle_sort(SIGNAL_COLUMN);
    assert_eq!(table.sort_for(SIGNAL_COLUMN), Some(SortDirection::Descending));

    table.toggle_sort(SIGNAL_COLUMN);
    assert_eq!(table.sort_for(SIGNAL_COLUMN), Some(SortDirection::Ascending));
}

#[test]
fn test_switching_column_resets_to_ascending() {
    let mut table = signal_table();
    table.toggle_sort(SIGNAL_COLUMN);
    table.toggle_sort(SIGNAL_COLUMN);
    assert_eq!(table.sort_for(SIGNAL_COLUMN), Some(SortDirection::Descending));

    table.toggle_sort(STATUS_COLUMN);
    assert_eq!(table.sort_for(STATUS_COLUMN), Some(SortDirection::Ascending));
    assert_eq!(table.sort_for(SIGNAL_COLUMN), None);
}

#[test]
fn test_descending_reverses_distinct_keys() {
    let rows = vec![
        signal(1, "Suspicious Words", "PASS"),
        signal(2, "Image Manipulation", "PASS"),
        signal(3, "Photocopy Detection", "PASS"),
    ];
    let mut table = signal_table();

    table.toggle_sort(SIGNAL_COLUMN);
    let ascending: Vec<i64> = table.rows(&rows).iter().map(|r| r.id).collect();
    assert_eq!(ascending, vec![2, 3, 1]);

    table.toggle_sort(SIGNAL_COLUMN);
    let descending: Vec<i64> = table.rows(&rows).iter().map(|r| r.id).collect();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let rows = vec![
        signal(5, "Suspicious Words", "PASS"),
        signal(6, "Suspicious Words", "PASS"),
        signal(1, "Image Manipulation", "PASS"),
    ];
    let mut table = signal_table();

    table.toggle_sort(SIGNAL_COLUMN);
    let ids: Vec<i64> = table.rows(&rows).iter().map(|r| r.id).collect();
    // The duplicated label keeps its source order.
    assert_eq!(ids, vec![1, 5, 6]);
}

// ============================================================================
// DISTINCT VALUES
// ============================================================================

#[test]
fn test_distinct_statuses_first_seen_order() {
    let rows = vec![
        signal(1, "Image Manipulation", "POSSIBLE_IMAGE_MANIPULATION"),
        signal(2, "Is Identity Document", "PASS"),
        signal(3, "Online Duplicate", "PASS"),
        signal(4, "Photocopy Detection", "PASS"),
    ];
    let table = signal_table();

    assert_eq!(
        table.distinct_categorical_values(&rows),
        vec!["POSSIBLE_IMAGE_MANIPULATION", "PASS"]
    );
}

#[test]
fn test_distinct_statuses_ignore_active_filters() {
    let rows = demo_rows();
    let mut table = signal_table();

    // Filtering down to one row must not shrink the options list; it is
    // derived from the loaded rows, not the filtered view.
    table.set_global_filter("identity");
    table.set_categorical_filter(Some("PASS".to_string()));
    assert_eq!(
        table.distinct_categorical_values(&rows),
        vec!["POSSIBLE_IMAGE_MANIPULATION", "PASS"]
    );
}

#[test]
fn test_distinct_statuses_stable_under_reorder() {
    let rows = vec![
        signal(1, "A", "POSSIBLE_IMAGE_MANIPULATION"),
        signal(2, "B", "PASS"),
        signal(3, "C", "PASS"),
    ];
    let permuted = vec![rows[0].clone(), rows[2].clone(), rows[1].clone()];
    let table = signal_table();

    assert_eq!(
        table.distinct_categorical_values(&rows),
        table.distinct_categorical_values(&permuted)
    );
}

// ============================================================================
// CONTENT STATE
// ============================================================================

#[test]
fn test_loading_renders_placeholders_regardless_of_filters() {
    let rows: Vec<Signal> = Vec::new();
    let mut table = signal_table();
    table.set_global_filter("anything at all");
    table.toggle_sort(SIGNAL_COLUMN);

    match table.content(&rows, true) {
        TableContent::Loading { placeholder_rows } => assert_eq!(placeholder_rows, 5),
        other => panic!("expected loading content, got {:?}", other),
    }
}

#[test]
fn test_placeholder_count_is_configurable() {
    let rows: Vec<Signal> = Vec::new();
    let table = signal_table().placeholder_rows(3);

    match table.content(&rows, true) {
        TableContent::Loading { placeholder_rows } => assert_eq!(placeholder_rows, 3),
        other => panic!("expected loading content, got {:?}", other),
    }
}

#[test]
fn test_empty_result_only_when_not_loading() {
    let rows = demo_rows();
    let mut table = signal_table();
    table.set_global_filter("no such signal");

    assert_eq!(table.content(&rows, false), TableContent::EmptyResult);
}

#[test]
fn test_empty_source_degrades_to_empty_view() {
    let rows: Vec<Signal> = Vec::new();
    let mut table = signal_table();
    table.toggle_sort(SIGNAL_COLUMN);
    table.set_global_filter("x");

    assert!(table.rows(&rows).is_empty());
    assert!(table.distinct_categorical_values(&rows).is_empty());
    assert_eq!(table.content(&rows, false), TableContent::EmptyResult);
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn arb_signal() -> impl Strategy<Value = Signal> {
    (
        0i64..1000,
        "[a-z ]{0,12}",
        prop_oneof![
            Just("PASS".to_string()),
            Just("FAIL".to_string()),
            Just("POSSIBLE_IMAGE_MANIPULATION".to_string()),
        ],
    )
        .prop_map(|(id, label, status)| Signal {
            id,
            signal: label,
            status,
        })
}

proptest! {
    #[test]
    fn prop_global_filter_partitions_rows(
        rows in prop::collection::vec(arb_signal(), 0..24),
        needle in "[a-z_]{0,4}",
    ) {
        let mut table = signal_table();
        table.set_global_filter(needle.clone());
        let view = table.rows(&rows);

        let needle_lower = needle.to_lowercase();
        let matches = |row: &Signal| {
            row.signal.to_lowercase().contains(&needle_lower)
                || row.status.to_lowercase().contains(&needle_lower)
        };

        for row in &view {
            prop_assert!(matches(row));
        }
        for row in &rows {
            let in_view = view.iter().any(|v| std::ptr::eq(*v, row));
            prop_assert_eq!(in_view, matches(row));
        }
    }

    #[test]
    fn prop_sorting_sorted_rows_is_identity(
        rows in prop::collection::vec(arb_signal(), 0..24),
    ) {
        let mut table = signal_table();
        table.toggle_sort(SIGNAL_COLUMN);

        let once: Vec<Signal> = table.rows(&rows).into_iter().cloned().collect();
        let twice: Vec<Signal> = table.rows(&once).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_distinct_statuses_never_duplicate(
        rows in prop::collection::vec(arb_signal(), 0..24),
    ) {
        let table = signal_table();
        let distinct = table.distinct_categorical_values(&rows);
        for (index, value) in distinct.iter().enumerate() {
            prop_assert!(!distinct[index + 1..].contains(value));
        }
    }
}
