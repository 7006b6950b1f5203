//! Blocking stdin prompts for the interactive menu.

use crate::errors::{AppError, AppResult};
use std::io::{self, Write};

/// Print a prompt and read one trimmed line. `None` means stdin was
/// closed (end of input), which the menu treats as "exit".
pub fn read_line(label: &str) -> AppResult<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Read a numeric ID. Non-numeric input is a validation error.
pub fn read_id(label: &str) -> AppResult<i64> {
    let line = read_line(label)?
        .ok_or_else(|| AppError::Validation("input closed".into()))?;
    line.parse::<i64>()
        .map_err(|_| AppError::Validation("Please enter a number.".into()))
}

/// Read a decimal number (e.g. an hourly rate).
pub fn read_f64(label: &str) -> AppResult<f64> {
    let line = read_line(label)?
        .ok_or_else(|| AppError::Validation("input closed".into()))?;
    line.parse::<f64>()
        .map_err(|_| AppError::Validation("Please enter a number.".into()))
}

/// Read a free-text value (may be empty).
pub fn read_text(label: &str) -> AppResult<String> {
    read_line(label)?.ok_or_else(|| AppError::Validation("input closed".into()))
}
