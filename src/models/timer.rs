use chrono::NaiveDateTime;

/// An in-memory running timer. Never persisted: a crash loses unstopped
/// timers, which avoids half-written intervals in the database.
#[derive(Debug, Clone)]
pub struct ActiveTimer {
    pub started_at: NaiveDateTime,
    pub task: String,
}

impl ActiveTimer {
    pub fn new(started_at: NaiveDateTime, task: String) -> Self {
        Self { started_at, task }
    }

    /// Hours elapsed between `started_at` and `now`.
    pub fn elapsed_hours(&self, now: NaiveDateTime) -> f64 {
        (now - self.started_at).num_seconds() as f64 / 3600.0
    }
}
