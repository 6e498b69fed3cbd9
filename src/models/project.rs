use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Label used in listings, e.g. `(ACME) Acme website`.
    pub fn label(&self) -> String {
        format!("({}) {}", self.code, self.name)
    }
}
