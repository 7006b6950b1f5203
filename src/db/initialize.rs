use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not exist yet.
/// Deletion cascades: removing a client drops its projects, removing a
/// project drops its time entries.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE CHECK(length(name) > 0)
        );

        CREATE TABLE IF NOT EXISTS projects (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            hourly_rate  REAL NOT NULL CHECK(hourly_rate >= 0),
            client_id    INTEGER NOT NULL
                         REFERENCES clients(id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS time_entries (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            task            TEXT NOT NULL DEFAULT '',
            start_time      TEXT NOT NULL,
            end_time        TEXT NOT NULL,
            duration_hours  REAL NOT NULL,
            project_id      INTEGER NOT NULL
                            REFERENCES projects(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_projects_client ON projects(client_id);
        CREATE INDEX IF NOT EXISTS idx_entries_project ON time_entries(project_id);
        CREATE INDEX IF NOT EXISTS idx_entries_start ON time_entries(start_time);
        "#,
    )?;
    Ok(())
}
