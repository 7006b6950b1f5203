use serde::Serialize;

/// A project billed at a fixed hourly rate, joined with its client's
/// name as used by listings, summaries and invoices.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithClient {
    pub id: i64,
    pub name: String,
    pub hourly_rate: f64, // ⇔ projects.hourly_rate (REAL, >= 0)
    pub client_id: i64,
    pub client_name: String,
}
