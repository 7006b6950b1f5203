use chrono::NaiveDateTime;
use serde::Serialize;

/// One time entry joined with its project's name and rate.
/// Flat read model consumed by the analysis aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct BillingRow {
    pub project_name: String,
    pub duration_hours: f64,
    pub hourly_rate: f64,
    pub start_time: NaiveDateTime,
}
