mod common;

use common::{seed_project, test_app};
use serde_json::json;
use std::fs;
use timebill::db::Repository;
use timebill::errors::AppError;

#[test]
fn start_and_stop_persist_one_entry() {
    let mut t = test_app();
    let (_, project_id) = seed_project(&t.app.repo, "Acme", "Website", 80.0);

    t.app.start_timer(project_id, "work").unwrap();
    assert!(t.app.has_active_timers());

    let entry = t.app.stop_timer(project_id).unwrap();
    assert!(!t.app.has_active_timers());
    assert!(entry.duration_hours >= 0.0);

    assert_eq!(t.app.repo.list_time_entries(project_id).unwrap().len(), 1);
}

#[test]
fn starting_for_unknown_project_fails() {
    let mut t = test_app();
    let err = t.app.start_timer(42, "ghost").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(!t.app.has_active_timers());
}

#[test]
fn export_invoice_writes_into_invoices_dir() {
    let mut t = test_app();
    let (_, project_id) = seed_project(&t.app.repo, "Acme Corp", "Website", 80.0);
    t.app.start_timer(project_id, "work").unwrap();
    t.app.stop_timer(project_id).unwrap();

    let path = t.app.export_invoice(project_id).unwrap();
    assert!(path.exists());
    assert!(path.starts_with(t.dir.path().join("invoices")));
    assert!(
        path.file_name()
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("Invoice_AcmeCorp_Website_")
    );
}

#[test]
fn export_invoice_without_entries_fails() {
    let t = test_app();
    let (_, project_id) = seed_project(&t.app.repo, "Acme", "Website", 80.0);

    let err = t.app.export_invoice(project_id).unwrap_err();
    assert!(matches!(err, AppError::NoEntries(_)));
}

#[test]
fn import_from_file_end_to_end() {
    let t = test_app();
    let (_, project_id) = seed_project(&t.app.repo, "Acme", "Website", 80.0);

    let records = json!([
        {
            "project_id": project_id, "task": "imported",
            "start_time": "2025-03-01T09:00:00", "end_time": "2025-03-01T10:00:00",
            "duration_hours": 1.0
        },
        { "task": "incomplete" }
    ]);
    let path = t.dir.path().join("entries.json");
    fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();

    let report = t.app.import_from_file(&path).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(t.app.repo.list_time_entries(project_id).unwrap().len(), 1);
}

#[test]
fn activity_log_records_operations() {
    let t = test_app();
    t.app.add_client("Acme").unwrap();

    let log = fs::read_to_string(t.dir.path().join("activity_log.txt")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert!(lines[0].ends_with("- Activity Log Initialized."));
    assert!(lines[1].contains("Added client: Acme with ID 1"));
}

#[test]
fn analysis_reflects_persisted_entries() {
    let mut t = test_app();
    let (_, project_id) = seed_project(&t.app.repo, "Acme", "Website", 80.0);
    t.app.start_timer(project_id, "work").unwrap();
    t.app.stop_timer(project_id).unwrap();

    let analysis = t.app.analyze().unwrap();
    assert_eq!(analysis.hours_by_project.len(), 1);
    assert_eq!(analysis.hours_by_project[0].0, "Website");
}
