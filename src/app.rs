//! Application context: the dependency-injected state every operation
//! works against. Replaces any global session or timer map: the context
//! is built once at startup and dropped at exit.

use crate::activity::ActivityLog;
use crate::core::analysis::{Analysis, analyze};
use crate::core::import::{ImportReport, import_entries, read_import_file};
use crate::core::report::{ProjectSummary, summarize};
use crate::core::tracker::{RunningTimer, TimerTracker};
use crate::db::Repository;
use crate::errors::{AppError, AppResult};
use crate::export::invoice::export_invoice;
use crate::models::{Client, NewTimeEntry, ProjectWithClient};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

pub struct App<R: Repository> {
    pub repo: R,
    tracker: TimerTracker,
    activity: ActivityLog,
    invoices_dir: PathBuf,
}

impl<R: Repository> App<R> {
    pub fn new(repo: R, activity: ActivityLog, invoices_dir: PathBuf) -> Self {
        Self {
            repo,
            tracker: TimerTracker::new(),
            activity,
            invoices_dir,
        }
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    // ---------------------------
    // Clients
    // ---------------------------

    /// Add a client. Empty names are rejected before any persistence
    /// call is attempted.
    pub fn add_client(&self, name: &str) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("client name must not be empty".into()));
        }
        let id = self.repo.create_client(name)?;
        self.activity
            .append(&format!("Added client: {name} with ID {id}"))?;
        Ok(id)
    }

    pub fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.repo.list_clients()
    }

    // ---------------------------
    // Projects
    // ---------------------------

    pub fn add_project(&self, name: &str, hourly_rate: f64, client_id: i64) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("project name must not be empty".into()));
        }
        if hourly_rate < 0.0 {
            return Err(AppError::Validation(
                "hourly rate must not be negative".into(),
            ));
        }
        let id = self.repo.create_project(name, hourly_rate, client_id)?;
        self.activity
            .append(&format!("Added project: {name} for client ID {client_id}"))?;
        Ok(id)
    }

    pub fn list_projects(&self) -> AppResult<Vec<ProjectWithClient>> {
        self.repo.list_projects()
    }

    fn project_or_not_found(&self, project_id: i64) -> AppResult<ProjectWithClient> {
        self.repo
            .project_with_client(project_id)?
            .ok_or_else(|| AppError::NotFound(format!("No project found with ID {project_id}")))
    }

    // ---------------------------
    // Time tracking
    // ---------------------------

    /// Start a timer. The project must exist, otherwise the stop would
    /// be unpersistable later.
    pub fn start_timer(&mut self, project_id: i64, task: &str) -> AppResult<NaiveDateTime> {
        self.project_or_not_found(project_id)?;
        let now = Self::now();
        self.tracker.start(project_id, task.to_string(), now)?;
        self.activity.append(&format!(
            "Started timer for project ID {project_id} (Task: {task})"
        ))?;
        Ok(now)
    }

    /// Stop a timer and persist the entry. On a failed write the timer
    /// stays active (see `TimerTracker::stop`).
    pub fn stop_timer(&mut self, project_id: i64) -> AppResult<NewTimeEntry> {
        let entry = self.tracker.stop(project_id, Self::now(), &self.repo)?;
        self.activity.append(&format!(
            "Logged entry for project ID {project_id}. Duration: {:.2} hours.",
            entry.duration_hours
        ))?;
        Ok(entry)
    }

    pub fn active_timers(&self) -> Vec<RunningTimer> {
        self.tracker.snapshot(Self::now())
    }

    pub fn has_active_timers(&self) -> bool {
        !self.tracker.is_empty()
    }

    // ---------------------------
    // Reporting & invoicing
    // ---------------------------

    pub fn project_summary(&self, project_id: i64) -> AppResult<ProjectSummary> {
        let project = self.project_or_not_found(project_id)?;
        let entries = self.repo.list_time_entries(project_id)?;
        let summary = summarize(&project, &entries)?;
        self.activity
            .append(&format!("Generated summary for project '{}'.", project.name))?;
        Ok(summary)
    }

    pub fn export_invoice(&self, project_id: i64) -> AppResult<PathBuf> {
        let project = self.project_or_not_found(project_id)?;
        let entries = self.repo.list_time_entries(project_id)?;
        let path = export_invoice(&self.invoices_dir, &project, &entries)?;
        self.activity.append(&format!(
            "Exported invoice for project '{}' to {}",
            project.name,
            path.display()
        ))?;
        Ok(path)
    }

    pub fn import_from_file(&self, path: &Path) -> AppResult<ImportReport> {
        let records = read_import_file(path)?;
        let report = import_entries(&self.repo, &records)?;
        self.activity.append(&format!(
            "Imported {} time entries from {}.",
            report.imported,
            path.display()
        ))?;
        Ok(report)
    }

    // ---------------------------
    // Analysis
    // ---------------------------

    pub fn analyze(&self) -> AppResult<Analysis> {
        let rows = self.repo.billing_rows()?;
        let analysis = analyze(&rows);
        if !analysis.is_empty() {
            self.activity.append("Performed data analysis.")?;
        }
        Ok(analysis)
    }
}
