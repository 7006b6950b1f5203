//! Project summaries: per-entry breakdown plus billable totals.

use crate::errors::{AppError, AppResult};
use crate::models::{ProjectWithClient, TimeEntry};
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct SummaryLine {
    pub task: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_hours: f64,
}

#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub project_name: String,
    pub client_name: String,
    pub hourly_rate: f64,
    pub lines: Vec<SummaryLine>,
    pub total_hours: f64,
    pub total_cost: f64,
}

/// Compute the billable summary for one project.
///
/// Totals are accumulated from the unrounded per-entry durations and
/// rounded only at display time (sum-then-round), so repeated rounding
/// cannot drift the invoice total.
pub fn summarize(project: &ProjectWithClient, entries: &[TimeEntry]) -> AppResult<ProjectSummary> {
    if entries.is_empty() {
        return Err(AppError::NoEntries(project.name.clone()));
    }

    let total_hours: f64 = entries.iter().map(|e| e.duration_hours).sum();
    let total_cost = total_hours * project.hourly_rate;

    let lines = entries
        .iter()
        .map(|e| SummaryLine {
            task: e.task.clone(),
            start_time: e.start_time,
            end_time: e.end_time,
            duration_hours: e.duration_hours,
        })
        .collect();

    Ok(ProjectSummary {
        project_name: project.name.clone(),
        client_name: project.client_name.clone(),
        hourly_rate: project.hourly_rate,
        lines,
        total_hours,
        total_cost,
    })
}
