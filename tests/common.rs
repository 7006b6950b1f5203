#![allow(dead_code)]
use chrono::NaiveDateTime;
use std::fs;
use tempfile::TempDir;
use timebill::activity::ActivityLog;
use timebill::app::App;
use timebill::db::Repository;
use timebill::db::initialize::init_db;
use timebill::db::pool::DbPool;
use timebill::db::sqlite::SqliteRepository;
use timebill::errors::{AppError, AppResult};
use timebill::models::{BillingRow, Client, NewTimeEntry, ProjectWithClient, TimeEntry};

/// Fresh in-memory repository with the schema applied.
pub fn repo_in_memory() -> SqliteRepository {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");
    SqliteRepository::new(pool)
}

/// A full application context rooted in a temp directory.
/// The TempDir must stay alive for the duration of the test.
pub struct TestApp {
    pub dir: TempDir,
    pub app: App<SqliteRepository>,
}

pub fn test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("tempdir");
    let invoices = dir.path().join("invoices");
    fs::create_dir_all(&invoices).expect("invoices dir");

    let repo = repo_in_memory();
    let activity = ActivityLog::open(&dir.path().join("activity_log.txt")).expect("activity log");

    TestApp {
        app: App::new(repo, activity, invoices),
        dir,
    }
}

/// Parse a `"YYYY-MM-DD HH:MM:SS"` timestamp.
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

/// Seed one client and one project, returning (client_id, project_id).
pub fn seed_project(repo: &SqliteRepository, client: &str, project: &str, rate: f64) -> (i64, i64) {
    let client_id = repo.create_client(client).expect("create client");
    let project_id = repo
        .create_project(project, rate, client_id)
        .expect("create project");
    (client_id, project_id)
}

pub fn entry(project_id: i64, task: &str, start: &str, end: &str, hours: f64) -> NewTimeEntry {
    NewTimeEntry {
        project_id,
        task: task.to_string(),
        start_time: dt(start),
        end_time: dt(end),
        duration_hours: hours,
    }
}

/// Repository whose writes always fail, for compensation tests.
pub struct FailingRepo;

impl Repository for FailingRepo {
    fn create_client(&self, _name: &str) -> AppResult<i64> {
        Err(AppError::Db(rusqlite::Error::ExecuteReturnedResults))
    }

    fn list_clients(&self) -> AppResult<Vec<Client>> {
        Ok(Vec::new())
    }

    fn create_project(&self, _name: &str, _rate: f64, _client_id: i64) -> AppResult<i64> {
        Err(AppError::Db(rusqlite::Error::ExecuteReturnedResults))
    }

    fn list_projects(&self) -> AppResult<Vec<ProjectWithClient>> {
        Ok(Vec::new())
    }

    fn project_with_client(&self, _project_id: i64) -> AppResult<Option<ProjectWithClient>> {
        Ok(None)
    }

    fn create_time_entry(&self, _entry: &NewTimeEntry) -> AppResult<i64> {
        Err(AppError::Db(rusqlite::Error::ExecuteReturnedResults))
    }

    fn list_time_entries(&self, _project_id: i64) -> AppResult<Vec<TimeEntry>> {
        Ok(Vec::new())
    }

    fn billing_rows(&self) -> AppResult<Vec<BillingRow>> {
        Ok(Vec::new())
    }
}
