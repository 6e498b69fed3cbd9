use crate::config::Config;
use crate::db::employees::get_employee_by_slack_id;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::projects::{find_project_by_code, find_project_by_id};
use crate::db::tasks::insert_task;
use crate::errors::{AppError, AppResult};
use crate::models::project::Project;
use crate::models::task::{NewTask, Task};
use crate::reporting::{TaskReport, forward_task};
use crate::utils::time::parse_duration_hours;
use chrono::{DateTime, Utc};
use std::thread::JoinHandle;

/// What the user filled in for a new tracked task.
#[derive(Debug, Clone, Default)]
pub struct TrackRequest {
    pub project_code: Option<String>,
    pub project_id: Option<i64>,
    pub ticket: Option<String>,
    pub description: Option<String>,
    /// Time spent as `HH:MM`.
    pub time: Option<String>,
}

#[derive(Debug)]
pub struct TrackOutcome {
    pub task: Task,
    pub project: Project,
    /// Background forwarding, when a reporting endpoint is configured.
    pub forward: Option<JoinHandle<()>>,
}

/// High-level business logic for the `track` command.
pub struct TrackLogic;

impl TrackLogic {
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        slack_id: &str,
        req: TrackRequest,
        now: DateTime<Utc>,
    ) -> AppResult<TrackOutcome> {
        let employee = get_employee_by_slack_id(&pool.conn, slack_id)?;
        let project = Self::resolve_project(pool, &req)?;

        let description = req
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .ok_or_else(|| AppError::MissingField("Description not provided".into()))?;

        let hours = match req.time.as_deref() {
            Some(t) => parse_duration_hours(t)?,
            None => 0.0,
        };

        let ticket = req
            .ticket
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let task = insert_task(
            &pool.conn,
            &NewTask {
                employee_id: employee.id,
                project_id: project.id,
                ticket,
                description: description.to_string(),
                hours,
                date: now,
            },
        )?;

        ttlog_quiet(
            &pool.conn,
            "track",
            &project.code,
            &format!("{} tracked {:.2}h: {}", employee.name, task.hours, task.description),
        );

        let forward = cfg.reporting().cloned().map(|endpoint| {
            let report = TaskReport {
                ticket: task.ticket.clone(),
                description: task.description.clone(),
                date: task.date.to_rfc3339(),
                hours: task.hours,
                project: project.name.clone(),
                employee: employee.name.clone(),
            };
            forward_task(endpoint, report, cfg.database.clone())
        });

        Ok(TrackOutcome {
            task,
            project,
            forward,
        })
    }

    /// Explicit id first, then code (case-insensitive).
    fn resolve_project(pool: &DbPool, req: &TrackRequest) -> AppResult<Project> {
        let found = if let Some(id) = req.project_id {
            find_project_by_id(&pool.conn, id)?
        } else if let Some(code) = req.project_code.as_deref() {
            find_project_by_code(&pool.conn, code)?
        } else {
            None
        };

        found.ok_or_else(|| {
            AppError::ProjectNotFound(
                req.project_code
                    .clone()
                    .or_else(|| req.project_id.map(|id| id.to_string()))
                    .unwrap_or_default(),
            )
        })
    }
}
