mod common;

use common::{repo_in_memory, seed_project};
use serde_json::json;
use std::fs;
use timebill::core::import::{import_entries, read_import_file};
use timebill::db::Repository;
use timebill::errors::AppError;

#[test]
fn valid_records_imported_invalid_skipped_individually() {
    let repo = repo_in_memory();
    let (_, project_id) = seed_project(&repo, "Acme", "Website", 80.0);

    let records = vec![
        json!({
            "project_id": project_id, "task": "a",
            "start_time": "2025-03-01T09:00:00", "end_time": "2025-03-01T10:00:00",
            "duration_hours": 1.0
        }),
        // missing task
        json!({
            "project_id": project_id,
            "start_time": "2025-03-01T09:00:00", "end_time": "2025-03-01T10:00:00",
            "duration_hours": 1.0
        }),
        json!({
            "project_id": project_id, "task": "b",
            "start_time": "2025-03-02T09:00:00", "end_time": "2025-03-02T11:00:00",
            "duration_hours": 2.0
        }),
        // missing task again
        json!({
            "project_id": project_id,
            "start_time": "2025-03-03T09:00:00", "end_time": "2025-03-03T10:00:00",
            "duration_hours": 1.0
        }),
        json!({
            "project_id": project_id, "task": "c",
            "start_time": "2025-03-04T09:00:00", "end_time": "2025-03-04T10:00:00",
            "duration_hours": 1.0
        }),
    ];

    let report = import_entries(&repo, &records).unwrap();

    assert_eq!(report.imported, 3);
    assert_eq!(report.skipped.len(), 2);
    for skip in &report.skipped {
        assert!(skip.contains("task missing"), "unexpected skip: {skip}");
    }

    // persistence contains exactly the three valid rows
    assert_eq!(repo.list_time_entries(project_id).unwrap().len(), 3);
}

#[test]
fn skip_message_lists_every_problem_field() {
    let repo = repo_in_memory();
    seed_project(&repo, "Acme", "Website", 80.0);

    let records = vec![json!({
        "task": "x",
        "start_time": "not-a-date",
        "end_time": "2025-03-01T10:00:00"
    })];

    let report = import_entries(&repo, &records).unwrap();
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped.len(), 1);

    let msg = &report.skipped[0];
    assert!(msg.contains("project_id missing"));
    assert!(msg.contains("start_time not a valid datetime"));
    assert!(msg.contains("duration_hours missing"));
}

#[test]
fn end_before_start_is_invalid() {
    let repo = repo_in_memory();
    let (_, project_id) = seed_project(&repo, "Acme", "Website", 80.0);

    let records = vec![json!({
        "project_id": project_id, "task": "backwards",
        "start_time": "2025-03-01T10:00:00", "end_time": "2025-03-01T09:00:00",
        "duration_hours": 1.0
    })];

    let report = import_entries(&repo, &records).unwrap();
    assert_eq!(report.imported, 0);
    assert!(report.skipped[0].contains("end_time is before start_time"));
}

#[test]
fn dangling_project_reference_skips_only_that_record() {
    let repo = repo_in_memory();
    let (_, project_id) = seed_project(&repo, "Acme", "Website", 80.0);

    let records = vec![
        json!({
            "project_id": 999, "task": "ghost",
            "start_time": "2025-03-01T09:00:00", "end_time": "2025-03-01T10:00:00",
            "duration_hours": 1.0
        }),
        json!({
            "project_id": project_id, "task": "real",
            "start_time": "2025-03-01T09:00:00", "end_time": "2025-03-01T10:00:00",
            "duration_hours": 1.0
        }),
    ];

    let report = import_entries(&repo, &records).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(report.skipped[0].contains("project ID 999 does not exist"));
    assert_eq!(repo.list_time_entries(project_id).unwrap().len(), 1);
}

#[test]
fn missing_file_is_fatal() {
    let err = read_import_file(std::path::Path::new("/no/such/file.json")).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
}

#[test]
fn non_array_top_level_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"project_id": 1}"#).unwrap();

    let err = read_import_file(&path).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
}

#[test]
fn undecodable_json_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "not json at all").unwrap();

    let err = read_import_file(&path).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
}

#[test]
fn non_object_record_is_skipped() {
    let repo = repo_in_memory();
    let (_, project_id) = seed_project(&repo, "Acme", "Website", 80.0);

    let records = vec![
        json!("just a string"),
        json!({
            "project_id": project_id, "task": "ok",
            "start_time": "2025-03-01 09:00:00", "end_time": "2025-03-01 10:00:00",
            "duration_hours": 1.0
        }),
    ];

    let report = import_entries(&repo, &records).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 1);
}
