//! Bulk import of time entries from a JSON file.
//!
//! The file holds an array of objects. Records are validated one by one
//! into typed entries; a record that fails validation (or references a
//! missing project) is skipped with an individual message and the rest
//! of the batch continues. Partial success is intentional: recover as
//! much data as possible from a possibly malformed file.

use crate::db::Repository;
use crate::errors::{AppError, AppResult};
use crate::models::NewTimeEntry;
use crate::utils::time::parse_iso_datetime;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One import record as found on disk, before validation.
/// All fields optional so that missing keys can be reported by name.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
}

impl RawEntry {
    /// Validate into a typed entry, or list every missing or malformed
    /// field so the skip message names all of them at once.
    pub fn validate(&self) -> Result<NewTimeEntry, Vec<String>> {
        let mut problems = Vec::new();

        if self.project_id.is_none() {
            problems.push("project_id missing".to_string());
        }
        if self.task.is_none() {
            problems.push("task missing".to_string());
        }

        let start = match &self.start_time {
            None => {
                problems.push("start_time missing".to_string());
                None
            }
            Some(raw) => {
                let parsed = parse_iso_datetime(raw);
                if parsed.is_none() {
                    problems.push(format!("start_time not a valid datetime: '{raw}'"));
                }
                parsed
            }
        };

        let end = match &self.end_time {
            None => {
                problems.push("end_time missing".to_string());
                None
            }
            Some(raw) => {
                let parsed = parse_iso_datetime(raw);
                if parsed.is_none() {
                    problems.push(format!("end_time not a valid datetime: '{raw}'"));
                }
                parsed
            }
        };

        if self.duration_hours.is_none() {
            problems.push("duration_hours missing".to_string());
        }

        if let (Some(s), Some(e)) = (start, end)
            && e < s
        {
            problems.push("end_time is before start_time".to_string());
        }

        if let (Some(project_id), Some(task), Some(start_time), Some(end_time), Some(duration)) = (
            self.project_id,
            self.task.clone(),
            start,
            end,
            self.duration_hours,
        ) && problems.is_empty()
        {
            return Ok(NewTimeEntry {
                project_id,
                task,
                start_time,
                end_time,
                duration_hours: duration,
            });
        }

        Err(problems)
    }
}

/// Outcome of one batch: successes counted, failures reported per record.
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<String>,
}

/// Read and parse the import file. A missing file or a top-level value
/// that is not an array is fatal; individual bad records are not.
pub fn read_import_file(path: &Path) -> AppResult<Vec<Value>> {
    if !path.exists() {
        return Err(AppError::Import(format!(
            "file not found at '{}'",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| AppError::Import(format!("could not decode JSON: {e}")))?;

    match value {
        Value::Array(records) => Ok(records),
        _ => Err(AppError::Import(
            "JSON file should contain a list of entries".to_string(),
        )),
    }
}

/// Validate and insert a batch of raw records.
///
/// The batch is deliberately not one transaction: each valid record is
/// committed on its own, so earlier successes survive later failures.
pub fn import_entries<R: Repository>(repo: &R, records: &[Value]) -> AppResult<ImportReport> {
    let mut report = ImportReport::default();

    for (index, record) in records.iter().enumerate() {
        let n = index + 1;

        let raw: RawEntry = match serde_json::from_value(record.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                report.skipped.push(format!("entry {n}: not a valid entry object ({e})"));
                continue;
            }
        };

        let entry = match raw.validate() {
            Ok(entry) => entry,
            Err(problems) => {
                report
                    .skipped
                    .push(format!("entry {n}: {}", problems.join(", ")));
                continue;
            }
        };

        // Bad project references are skipped like any other invalid
        // record rather than aborting the batch.
        match repo.create_time_entry(&entry) {
            Ok(_) => report.imported += 1,
            Err(AppError::ForeignKey(_)) => {
                report.skipped.push(format!(
                    "entry {n}: project ID {} does not exist",
                    entry.project_id
                ));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}
