//! CSV invoice writer.
//!
//! The filename pattern is part of the external contract (other tools
//! may watch the invoices directory):
//! `Invoice_{client_no_spaces}_{project_no_spaces}_{YYYYMMDD}.csv`.
//!
//! The file is written to a temporary sibling and renamed into place,
//! so a failure mid-write never leaves a torn invoice behind.

use crate::errors::{AppError, AppResult};
use crate::models::{ProjectWithClient, TimeEntry};
use chrono::{Local, NaiveDate};
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic invoice filename for a given date. Spaces are stripped
/// from the client and project names.
pub fn invoice_filename(client_name: &str, project_name: &str, date: NaiveDate) -> String {
    format!(
        "Invoice_{}_{}_{}.csv",
        client_name.replace(' ', ""),
        project_name.replace(' ', ""),
        date.format("%Y%m%d")
    )
}

/// Export an invoice dated today. Returns the path of the written file.
pub fn export_invoice(
    invoices_dir: &Path,
    project: &ProjectWithClient,
    entries: &[TimeEntry],
) -> AppResult<PathBuf> {
    export_invoice_dated(invoices_dir, project, entries, Local::now().date_naive())
}

/// Export an invoice for an explicit date.
pub fn export_invoice_dated(
    invoices_dir: &Path,
    project: &ProjectWithClient,
    entries: &[TimeEntry],
    date: NaiveDate,
) -> AppResult<PathBuf> {
    if entries.is_empty() {
        return Err(AppError::NoEntries(project.name.clone()));
    }

    let file_name = invoice_filename(&project.client_name, &project.name, date);
    let final_path = invoices_dir.join(&file_name);
    let tmp_path = invoices_dir.join(format!("{file_name}.tmp"));

    if let Err(e) = write_invoice(&tmp_path, project, entries, date) {
        fs::remove_file(&tmp_path).ok();
        return Err(e);
    }

    fs::rename(&tmp_path, &final_path)
        .map_err(|e| AppError::Export(format!("could not finalize invoice file: {e}")))?;

    Ok(final_path)
}

fn write_invoice(
    path: &Path,
    project: &ProjectWithClient,
    entries: &[TimeEntry],
    date: NaiveDate,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "Project Name",
        "Client",
        "Invoice Date",
        "Hourly Rate",
        "Task Description",
        "Start Time",
        "End Time",
        "Duration (Hours)",
        "Cost",
        "Total Hours",
        "Total Cost",
    ])?;

    let invoice_date = date.format("%Y-%m-%d").to_string();
    let rate = format!("${:.2}", project.hourly_rate);
    wtr.write_record([
        project.name.as_str(),
        project.client_name.as_str(),
        invoice_date.as_str(),
        rate.as_str(),
        "",
        "",
        "",
        "",
        "",
        "",
        "",
    ])?;

    // Totals from unrounded durations: sum first, round at display only.
    let total_hours: f64 = entries.iter().map(|e| e.duration_hours).sum();
    let total_cost = total_hours * project.hourly_rate;

    for entry in entries {
        let cost = entry.duration_hours * project.hourly_rate;
        let start = entry.start_time.format("%Y-%m-%d %H:%M").to_string();
        let end = entry.end_time.format("%Y-%m-%d %H:%M").to_string();
        let duration = format!("{:.2}", entry.duration_hours);
        let cost = format!("${cost:.2}");
        wtr.write_record([
            "",
            "",
            "",
            "",
            entry.task.as_str(),
            start.as_str(),
            end.as_str(),
            duration.as_str(),
            cost.as_str(),
            "",
            "",
        ])?;
    }

    let hours_total = format!("{total_hours:.2}");
    let cost_total = format!("${total_cost:.2}");
    wtr.write_record([
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        hours_total.as_str(),
        cost_total.as_str(),
    ])?;

    wtr.flush()?;
    Ok(())
}
