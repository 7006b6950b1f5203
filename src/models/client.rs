use serde::Serialize;

/// A billable client. Names are unique and immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
}
