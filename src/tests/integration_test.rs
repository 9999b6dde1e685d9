//! Integration tests: loader-to-table data flow
//!
//! Exercises the full derivation path the fraud-table view goes through,
//! from an unloaded collection to a filtered, sorted view, using the demo
//! document's signal set.

use crate::api::Signal;
use crate::fraud_table::{signal_columns, STATUS_COLUMN};
use crate::gauge;
use crate::loader::CollectionState;
use crate::table::{Table, TableContent};

fn demo_signals() -> Vec<Signal> {
    // The test server's fraud-data payload, duplicate row included.
    let body = r#"[
        {"id": 1, "signal": "Image Manipulation", "status": "POSSIBLE_IMAGE_MANIPULATION"},
        {"id": 2, "signal": "Is Identity Document", "status": "PASS"},
        {"id": 3, "signal": "Online Duplicate", "status": "PASS"},
        {"id": 4, "signal": "Photocopy Detection", "status": "PASS"},
        {"id": 5, "signal": "Suspicious Words", "status": "PASS"},
        {"id": 5, "signal": "Suspicious Words", "status": "PASS"}
    ]"#;
    serde_json::from_str(body).expect("valid fraud-data body")
}

#[test]
fn test_skeletons_until_the_collection_settles() {
    let mut state: CollectionState<Signal> = CollectionState::new();
    let mut table = Table::new(signal_columns())
        .with_categorical_column(STATUS_COLUMN)
        .placeholder_rows(5);

    // Filter text entered while still loading changes nothing: skeletons win.
    table.set_global_filter("identity");

    state.begin();
    match table.content(state.items(), state.is_loading()) {
        TableContent::Loading { placeholder_rows } => assert_eq!(placeholder_rows, 5),
        other => panic!("expected loading content, got {:?}", other),
    }

    let generation = state.generation();
    assert!(state.try_populate(generation, demo_signals()));
    match table.content(state.items(), state.is_loading()) {
        TableContent::Populated(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id, 2);
        }
        other => panic!("expected populated content, got {:?}", other),
    }
}

#[test]
fn test_filter_menu_reflects_the_loaded_set() {
    let mut state: CollectionState<Signal> = CollectionState::new();
    state.begin();
    assert!(state.try_populate(state.generation(), demo_signals()));

    let table = Table::new(signal_columns()).with_categorical_column(STATUS_COLUMN);
    assert_eq!(
        table.distinct_categorical_values(state.items()),
        vec!["POSSIBLE_IMAGE_MANIPULATION", "PASS"]
    );
}

#[test]
fn test_status_filter_roundtrip_over_loaded_rows() {
    let mut state: CollectionState<Signal> = CollectionState::new();
    state.begin();
    assert!(state.try_populate(state.generation(), demo_signals()));

    let mut table = Table::new(signal_columns()).with_categorical_column(STATUS_COLUMN);

    table.set_categorical_filter(Some("POSSIBLE_IMAGE_MANIPULATION".to_string()));
    let flagged = table.rows(state.items());
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].signal, "Image Manipulation");

    table.set_categorical_filter(None);
    assert_eq!(table.rows(state.items()).len(), 6);
}

#[test]
fn test_two_collections_do_not_share_table_state() {
    let mut first = Table::new(signal_columns()).with_categorical_column(STATUS_COLUMN);
    let second = Table::new(signal_columns()).with_categorical_column(STATUS_COLUMN);
    let rows = demo_signals();

    first.set_global_filter("identity");
    assert_eq!(first.rows(&rows).len(), 1);
    // A second engine instance sees no leaked filter state.
    assert_eq!(second.rows(&rows).len(), 6);
}

#[test]
fn test_report_band_matches_demo_likelihood() {
    // The demo report pins fraud likelihood at 0.4, i.e. position 40.
    assert_eq!(gauge::band_for(40.0).label, "Moderate");
}
