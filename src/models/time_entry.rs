use chrono::NaiveDateTime;
use serde::Serialize;

/// A persisted, completed work interval.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub task: String,
    pub start_time: NaiveDateTime, // ⇔ time_entries.start_time (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end_time: NaiveDateTime,
    pub duration_hours: f64, // derived: (end - start) in hours
    pub project_id: i64,
}

/// A time entry about to be inserted (no id yet). Produced either by
/// stopping a timer or by the bulk importer.
#[derive(Debug, Clone)]
pub struct NewTimeEntry {
    pub project_id: i64,
    pub task: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_hours: f64,
}

impl NewTimeEntry {
    /// Build an entry from a completed interval, deriving the duration.
    /// Callers guarantee `end >= start`.
    pub fn from_interval(
        project_id: i64,
        task: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        let duration_hours = (end - start).num_seconds() as f64 / 3600.0;
        Self {
            project_id,
            task,
            start_time: start,
            end_time: end,
            duration_hours,
        }
    }
}
