//! Drive the interactive binary through stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tb(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("timebill").expect("binary built");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn exit_choice_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Freelance Time Tracker"))
        .stdout(predicate::str::contains("Exiting. Goodbye!"));
}

#[test]
fn closed_stdin_ends_the_session() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir).write_stdin("").assert().success();
}

#[test]
fn listing_clients_on_empty_database() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("1\n2\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No clients found."));
}

#[test]
fn add_and_list_client_flow() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("1\n1\nAcme Corp\n2\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Client 'Acme Corp' added successfully.",
        ))
        .stdout(predicate::str::contains("Acme Corp"));

    // the database survives the session: a second run still sees it
    tb(&dir)
        .write_stdin("1\n2\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Corp"));
}

#[test]
fn empty_client_name_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("1\n1\n\n3\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("client name must not be empty"))
        .stdout(predicate::str::contains("Exiting. Goodbye!"));
}

#[test]
fn duplicate_client_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("1\n1\nAcme\n1\nAcme\n3\n6\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("Exiting. Goodbye!"));
}

#[test]
fn adding_project_requires_a_client() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("2\n1\n3\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please add a client first."));
}

#[test]
fn analysis_with_no_entries() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No time entries to analyze."));
}

#[test]
fn activity_log_is_initialized_on_first_run() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir).write_stdin("6\n").assert().success();

    let log = std::fs::read_to_string(dir.path().join("activity_log.txt")).unwrap();
    assert!(log.contains("Activity Log Initialized."));
}

#[test]
fn full_tracking_flow_through_the_menu() {
    let dir = tempfile::tempdir().unwrap();
    // add client, add project, start timer, view timers, stop timer
    let script = "1\n1\nAcme\n3\n\
                  2\n1\n1\nWebsite\n80\n3\n\
                  3\n1\n1\nfix the header\n3\n2\n1\n4\n\
                  6\n";
    tb(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'Website' added successfully."))
        .stdout(predicate::str::contains("Timer started for project ID 1"))
        .stdout(predicate::str::contains("Task: fix the header"))
        .stdout(predicate::str::contains(
            "hours for project ID 1.",
        ));
}

#[test]
fn invalid_menu_choice_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    tb(&dir)
        .write_stdin("9\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}
