//! Timestamp parsing and formatting shared by the db layer, the importer
//! and the reports.

use crate::errors::AppError;
use chrono::NaiveDateTime;
use rusqlite::Row;

/// Storage format for all timestamps in the database.
pub const DB_DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DB_DATETIME_FMT).to_string()
}

/// Read a TEXT timestamp column, converting parse failures into a
/// rusqlite conversion error so callers see which value was corrupt.
pub fn parse_db_datetime(row: &Row, col: &str) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(col)?;
    NaiveDateTime::parse_from_str(&raw, DB_DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Validation(format!("invalid timestamp '{raw}'"))),
        )
    })
}

/// Parse an ISO-8601-ish datetime as found in import files.
/// Accepts the `T` separator, an optional fractional part, and the
/// plain storage format.
pub fn parse_iso_datetime(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
