//! In-memory active-timer tracking.
//!
//! Each project goes through `NoTimer → Running → NoTimer`. Timers are
//! never persisted while running; stopping one converts it into a
//! time entry through the repository.

use crate::db::Repository;
use crate::errors::{AppError, AppResult};
use crate::models::{ActiveTimer, NewTimeEntry};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Point-in-time view of one running timer.
#[derive(Debug, Clone)]
pub struct RunningTimer {
    pub project_id: i64,
    pub task: String,
    pub started_at: NaiveDateTime,
    pub elapsed_hours: f64,
}

#[derive(Default)]
pub struct TimerTracker {
    timers: HashMap<i64, ActiveTimer>,
}

impl TimerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer for a project. At most one timer per project: a
    /// second start fails and leaves the running timer untouched.
    pub fn start(&mut self, project_id: i64, task: String, now: NaiveDateTime) -> AppResult<()> {
        match self.timers.entry(project_id) {
            Entry::Occupied(_) => Err(AppError::TimerAlreadyRunning(project_id)),
            Entry::Vacant(slot) => {
                slot.insert(ActiveTimer::new(now, task));
                Ok(())
            }
        }
    }

    /// Stop the timer for a project and persist the completed interval.
    ///
    /// On a failed write the timer is re-inserted before the error is
    /// surfaced, so no tracked time is silently lost: the timer is NOT
    /// considered stopped until the entry is in the database.
    pub fn stop<R: Repository>(
        &mut self,
        project_id: i64,
        now: NaiveDateTime,
        repo: &R,
    ) -> AppResult<NewTimeEntry> {
        let timer = self
            .timers
            .remove(&project_id)
            .ok_or(AppError::TimerNotRunning(project_id))?;

        let entry =
            NewTimeEntry::from_interval(project_id, timer.task.clone(), timer.started_at, now);

        match repo.create_time_entry(&entry) {
            Ok(_) => Ok(entry),
            Err(e) => {
                self.timers.insert(project_id, timer);
                Err(e)
            }
        }
    }

    /// Snapshot of all running timers with elapsed-so-far hours,
    /// ordered by project id. Read-only.
    pub fn snapshot(&self, now: NaiveDateTime) -> Vec<RunningTimer> {
        let mut out: Vec<RunningTimer> = self
            .timers
            .iter()
            .map(|(&project_id, t)| RunningTimer {
                project_id,
                task: t.task.clone(),
                started_at: t.started_at,
                elapsed_hours: t.elapsed_hours(now),
            })
            .collect();
        out.sort_by_key(|t| t.project_id);
        out
    }

    pub fn is_running(&self, project_id: i64) -> bool {
        self.timers.contains_key(&project_id)
    }

    pub fn started_at(&self, project_id: i64) -> Option<NaiveDateTime> {
        self.timers.get(&project_id).map(|t| t.started_at)
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
