//! Unified application error type.
//! All modules (db, core, ui, export) return AppError so that the menu
//! boundary can report any failure and keep the session alive.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    ForeignKey(String),

    #[error("{0}")]
    NotFound(String),

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    // ---------------------------
    // Timer state
    // ---------------------------
    #[error("A timer is already running for project ID {0}")]
    TimerAlreadyRunning(i64),

    #[error("No active timer found for project ID {0}")]
    TimerNotRunning(i64),

    // ---------------------------
    // Reporting / export
    // ---------------------------
    #[error("No time entries found for project '{0}'")]
    NoEntries(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Bulk import
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
