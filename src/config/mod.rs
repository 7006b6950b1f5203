use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration, stored as YAML in the per-user directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub invoices_dir: String,
    pub activity_log: String,
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            database: dir.join("timebill.sqlite").to_string_lossy().to_string(),
            invoices_dir: dir.join("invoices").to_string_lossy().to_string(),
            activity_log: dir.join("activity_log.txt").to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the current user.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".timebill")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timebill.yaml")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("could not parse {}: {e}", path.display())))
    }

    /// Configuration with every path rooted under one directory.
    /// Used by tests and the `--data-dir` override.
    pub fn with_data_dir(dir: &Path) -> Self {
        Self {
            database: dir.join("timebill.sqlite").to_string_lossy().to_string(),
            invoices_dir: dir.join("invoices").to_string_lossy().to_string(),
            activity_log: dir.join("activity_log.txt").to_string_lossy().to_string(),
        }
    }

    /// Create the directories the configured paths live in.
    pub fn ensure_dirs(&self) -> AppResult<()> {
        for file in [&self.database, &self.activity_log] {
            if let Some(parent) = Path::new(file).parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
        }
        fs::create_dir_all(&self.invoices_dir)?;
        Ok(())
    }
}
