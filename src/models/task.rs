use chrono::{DateTime, Utc};
use serde::Serialize;

/// A unit of work tracked against a project.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub employee_id: i64,
    pub project_id: i64,
    pub ticket: Option<String>,
    pub description: String,
    pub hours: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub employee_id: i64,
    pub project_id: i64,
    pub ticket: Option<String>,
    pub description: String,
    pub hours: f64,
    pub date: DateTime<Utc>,
}
