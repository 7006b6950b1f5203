//! Append-only activity log file.
//! Every successful operation leaves a timestamped line behind, giving a
//! plain-text audit trail next to the database.

use crate::errors::AppResult;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    /// Open the log, writing the initialization line if the file does
    /// not exist yet.
    pub fn open(path: &Path) -> AppResult<Self> {
        let log = Self {
            path: path.to_path_buf(),
        };
        if !path.exists() {
            log.append("Activity Log Initialized.")?;
        }
        Ok(log)
    }

    /// Append `"{YYYY-MM-DD HH:MM:SS} - {message}"` plus a newline.
    pub fn append(&self, message: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "{timestamp} - {message}")?;
        Ok(())
    }
}
