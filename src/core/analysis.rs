//! Read-side aggregation over all persisted time entries.

use crate::models::BillingRow;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregated hours and earnings, sorted by project name / date.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub hours_by_project: Vec<(String, f64)>,
    pub cost_by_project: Vec<(String, f64)>,
    pub hours_by_date: Vec<(NaiveDate, f64)>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.hours_by_project.is_empty()
    }
}

/// Group billing rows by project (hours and cost = hours × rate) and by
/// calendar date (hours). Pure aggregation, no side effects.
pub fn analyze(rows: &[BillingRow]) -> Analysis {
    let mut hours_by_project: BTreeMap<String, f64> = BTreeMap::new();
    let mut cost_by_project: BTreeMap<String, f64> = BTreeMap::new();
    let mut hours_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for row in rows {
        *hours_by_project.entry(row.project_name.clone()).or_default() += row.duration_hours;
        *cost_by_project.entry(row.project_name.clone()).or_default() +=
            row.duration_hours * row.hourly_rate;
        *hours_by_date.entry(row.start_time.date()).or_default() += row.duration_hours;
    }

    Analysis {
        hours_by_project: hours_by_project.into_iter().collect(),
        cost_by_project: cost_by_project.into_iter().collect(),
        hours_by_date: hours_by_date.into_iter().collect(),
    }
}
