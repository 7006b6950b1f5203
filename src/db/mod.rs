pub mod initialize;
pub mod pool;
pub mod sqlite;

use crate::errors::{AppError, AppResult};
use crate::models::{BillingRow, Client, NewTimeEntry, ProjectWithClient, TimeEntry};

/// Persistence contract for the three record types. One abstraction,
/// one implementation: the storage engine behind it is interchangeable.
pub trait Repository {
    fn create_client(&self, name: &str) -> AppResult<i64>;
    /// Clients ordered by name.
    fn list_clients(&self) -> AppResult<Vec<Client>>;

    fn create_project(&self, name: &str, hourly_rate: f64, client_id: i64) -> AppResult<i64>;
    /// Projects joined with their client name, ordered by project name.
    fn list_projects(&self) -> AppResult<Vec<ProjectWithClient>>;
    fn project_with_client(&self, project_id: i64) -> AppResult<Option<ProjectWithClient>>;

    fn create_time_entry(&self, entry: &NewTimeEntry) -> AppResult<i64>;
    /// Entries for one project, ordered by start time.
    fn list_time_entries(&self, project_id: i64) -> AppResult<Vec<TimeEntry>>;

    /// All time entries joined with their project's name and rate,
    /// ordered by start time. Feed for the analysis aggregation.
    fn billing_rows(&self) -> AppResult<Vec<BillingRow>>;
}

/// Translate SQLite constraint failures into the application taxonomy.
/// `subject` names the record being written, used in the user message.
pub(crate) fn map_constraint(err: rusqlite::Error, subject: &str) -> AppError {
    if let rusqlite::Error::SqliteFailure(e, ref msg) = err
        && e.code == rusqlite::ErrorCode::ConstraintViolation
    {
        let detail = msg.as_deref().unwrap_or_default();
        if detail.contains("UNIQUE") {
            return AppError::Duplicate(subject.to_string());
        }
        if detail.contains("FOREIGN KEY") {
            return AppError::ForeignKey(format!(
                "{subject} references a client or project that does not exist"
            ));
        }
    }
    AppError::Db(err)
}
