use crate::db::pool::DbPool;
use crate::db::{Repository, map_constraint};
use crate::errors::AppResult;
use crate::models::{BillingRow, Client, NewTimeEntry, ProjectWithClient, TimeEntry};
use crate::utils::time::{format_datetime, parse_db_datetime};
use rusqlite::{Result, Row, params};

/// Repository implementation over a single SQLite connection.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    Ok(TimeEntry {
        id: row.get("id")?,
        task: row.get("task")?,
        start_time: parse_db_datetime(row, "start_time")?,
        end_time: parse_db_datetime(row, "end_time")?,
        duration_hours: row.get("duration_hours")?,
        project_id: row.get("project_id")?,
    })
}

fn map_project_row(row: &Row) -> Result<ProjectWithClient> {
    Ok(ProjectWithClient {
        id: row.get("id")?,
        name: row.get("name")?,
        hourly_rate: row.get("hourly_rate")?,
        client_id: row.get("client_id")?,
        client_name: row.get("client_name")?,
    })
}

impl Repository for SqliteRepository {
    fn create_client(&self, name: &str) -> AppResult<i64> {
        self.pool
            .conn
            .execute("INSERT INTO clients (name) VALUES (?1)", [name])
            .map_err(|e| map_constraint(e, &format!("Client '{name}'")))?;
        Ok(self.pool.conn.last_insert_rowid())
    }

    fn list_clients(&self) -> AppResult<Vec<Client>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT id, name FROM clients ORDER BY name ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(Client {
                id: row.get("id")?,
                name: row.get("name")?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn create_project(&self, name: &str, hourly_rate: f64, client_id: i64) -> AppResult<i64> {
        self.pool
            .conn
            .execute(
                "INSERT INTO projects (name, hourly_rate, client_id) VALUES (?1, ?2, ?3)",
                params![name, hourly_rate, client_id],
            )
            .map_err(|e| map_constraint(e, &format!("Project '{name}'")))?;
        Ok(self.pool.conn.last_insert_rowid())
    }

    fn list_projects(&self) -> AppResult<Vec<ProjectWithClient>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT p.id, p.name, p.hourly_rate, p.client_id, c.name AS client_name
             FROM projects p
             JOIN clients c ON c.id = p.client_id
             ORDER BY p.name ASC",
        )?;

        let rows = stmt.query_map([], map_project_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn project_with_client(&self, project_id: i64) -> AppResult<Option<ProjectWithClient>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT p.id, p.name, p.hourly_rate, p.client_id, c.name AS client_name
             FROM projects p
             JOIN clients c ON c.id = p.client_id
             WHERE p.id = ?1",
        )?;

        let mut rows = stmt.query_map([project_id], map_project_row)?;
        match rows.next() {
            Some(r) => Ok(Some(r?)),
            None => Ok(None),
        }
    }

    fn create_time_entry(&self, entry: &NewTimeEntry) -> AppResult<i64> {
        self.pool
            .conn
            .execute(
                "INSERT INTO time_entries (task, start_time, end_time, duration_hours, project_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    entry.task,
                    format_datetime(&entry.start_time),
                    format_datetime(&entry.end_time),
                    entry.duration_hours,
                    entry.project_id,
                ],
            )
            .map_err(|e| map_constraint(e, "Time entry"))?;
        Ok(self.pool.conn.last_insert_rowid())
    }

    fn list_time_entries(&self, project_id: i64) -> AppResult<Vec<TimeEntry>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT id, task, start_time, end_time, duration_hours, project_id
             FROM time_entries
             WHERE project_id = ?1
             ORDER BY start_time ASC",
        )?;

        let rows = stmt.query_map([project_id], map_entry_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn billing_rows(&self) -> AppResult<Vec<BillingRow>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT p.name AS project_name, t.duration_hours, p.hourly_rate, t.start_time
             FROM time_entries t
             JOIN projects p ON p.id = t.project_id
             ORDER BY t.start_time ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(BillingRow {
                project_name: row.get("project_name")?,
                duration_hours: row.get("duration_hours")?,
                hourly_rate: row.get("hourly_rate")?,
                start_time: parse_db_datetime(row, "start_time")?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
