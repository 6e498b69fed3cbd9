use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub slack_id: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to register a new employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub slack_id: String,
    pub admin: bool,
}
