#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use apidiff_core::errors::ApiDiffError;
use apidiff_core::logging_facility::test_capture::init_test_capture;
use apidiff_core::{compute_report, log_op_end, log_op_error, log_op_start};
use apidiff_core::{parse_snapshot, ParseOptions, SymbolTable};
use apidiff_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use common::{snapshot_dir, WIDGET_NEW};
use std::path::Path;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, snapshot_path = "api/old");

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(
        events[0].fields.get("snapshot_path"),
        Some(&"api/old".to_string())
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ApiDiffError::Unparseable {
        text: "???".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].fields.get("err.code"), Some(&"ERR_PARSE".to_string()));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_parse_snapshot_emits_start_and_end() {
    let capture = init_test_capture();
    let dir = snapshot_dir(&[("Widget", WIDGET_NEW)]);

    parse_snapshot(dir.path(), &ParseOptions::default()).unwrap();

    let events = capture.events_for_op("parse_snapshot");
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let end = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("Should have end event");
    assert!(starts >= 1);
    assert!(end.fields.contains_key("duration_ms"));
    assert_eq!(end.fields.get("symbol_count"), Some(&"4".to_string()));
    assert_eq!(end.fields.get("class_count"), Some(&"1".to_string()));
}

#[test]
fn test_failed_run_emits_error_event() {
    let capture = init_test_capture();
    let missing = Path::new("/no/such/apidiff/snapshot");

    parse_snapshot(missing, &ParseOptions::default()).unwrap_err();

    let error_event = capture
        .events_for_op("parse_snapshot")
        .into_iter()
        .find(|e| {
            e.event.as_deref() == Some(EVENT_END_ERROR)
                && e.fields
                    .get("snapshot_path")
                    .is_some_and(|p| p.contains("/no/such/apidiff/snapshot"))
        })
        .expect("Should have error event for this root");
    assert_eq!(
        error_event.fields.get("err.code"),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
}

#[test]
fn test_compute_report_logs_counts() {
    let capture = init_test_capture();

    let report = compute_report(&SymbolTable::new(), &SymbolTable::new());
    assert!(report.is_empty());

    capture.assert_event_exists("compute_report", EVENT_START);
    capture.assert_event_exists("compute_report", EVENT_END);
}
