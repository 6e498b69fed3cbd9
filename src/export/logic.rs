// src/export/logic.rs

use crate::config::Config;
use crate::core::access::require_admin;
use crate::core::employee::EmployeeLog;
use crate::db::employees::{get_employee_by_slack_id, list_employees};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::projects::list_projects;
use crate::db::tasks::load_tasks;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::export_rows;
use crate::export::model::{
    EmployeeShifts, EmployeeTasks, Formats, SHIFT_HEADERS, TASK_HEADERS, TaskLine, flatten_shifts,
    flatten_tasks, possessive_title, shift_to_row, task_to_row,
};
use crate::export::range::range_window;
use crate::export::xlsx::{Sheet, export_xlsx};
use crate::export::{ExportFormat, ExportKind};
use crate::models::employee::Employee;
use crate::models::shift::Window;
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

/// Parameters of one export run.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub format: ExportFormat,
    /// Absolute output path.
    pub file: String,
    pub range: Option<String>,
    /// Restrict to one employee (Slack id); all employees otherwise.
    pub user: Option<String>,
    pub force: bool,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export shifts or tracked tasks. Administrators only.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        actor: Option<&str>,
        req: &ExportRequest,
    ) -> AppResult<()> {
        require_admin(&pool.conn, actor)?;

        let path = Path::new(&req.file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {}",
                req.file
            )));
        }

        ensure_writable(path, req.force)?;

        let window = range_window(req.range.as_deref())?;
        let fmt = Formats {
            date: cfg.date_format.clone(),
            time: cfg.time_format.clone(),
        };

        match req.kind {
            ExportKind::Shifts => {
                let data = Self::collect_shifts(&pool.conn, &window, req.user.as_deref())?;
                match req.format {
                    ExportFormat::Xlsx => export_xlsx(&shift_sheets(&data, &fmt), path)?,
                    flat => export_rows(&flatten_shifts(&data, &fmt), flat, path)?,
                }
            }
            ExportKind::Tasks => {
                let data = Self::collect_tasks(&pool.conn, &window, req.user.as_deref())?;
                match req.format {
                    ExportFormat::Xlsx => export_xlsx(&task_sheets(&data), path)?,
                    flat => export_rows(&flatten_tasks(&data, &fmt), flat, path)?,
                }
            }
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            req.format.as_str(),
            &format!("Exported {:?} to {}", req.kind, path.display()),
        );

        Ok(())
    }

    /// Reconstructed shifts per employee, ordered by employee name.
    pub fn collect_shifts(
        conn: &Connection,
        window: &Window,
        user: Option<&str>,
    ) -> AppResult<Vec<EmployeeShifts>> {
        let mut out = Vec::new();
        for employee in select_employees(conn, user)? {
            let log = EmployeeLog::load_for(conn, employee)?;
            out.push(EmployeeShifts {
                employee: log.user_name().to_string(),
                shifts: log.shifts(window),
            });
        }
        Ok(out)
    }

    /// Tracked tasks per employee, with project names resolved.
    pub fn collect_tasks(
        conn: &Connection,
        window: &Window,
        user: Option<&str>,
    ) -> AppResult<Vec<EmployeeTasks>> {
        let projects: HashMap<i64, String> = list_projects(conn)?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();

        let mut out = Vec::new();
        for employee in select_employees(conn, user)? {
            let tasks = load_tasks(conn, window, Some(employee.id))?
                .into_iter()
                .map(|task| TaskLine {
                    project: projects
                        .get(&task.project_id)
                        .cloned()
                        .unwrap_or_else(|| "Unknown project".to_string()),
                    task,
                })
                .collect();

            out.push(EmployeeTasks {
                employee: employee.name,
                tasks,
            });
        }
        Ok(out)
    }
}

fn select_employees(conn: &Connection, user: Option<&str>) -> AppResult<Vec<Employee>> {
    match user {
        Some(slack_id) => Ok(vec![get_employee_by_slack_id(conn, slack_id)?]),
        None => list_employees(conn),
    }
}

fn shift_sheets(data: &[EmployeeShifts], fmt: &Formats) -> Vec<Sheet> {
    data.iter()
        .map(|e| Sheet {
            title: possessive_title(&e.employee, "shifts"),
            headers: SHIFT_HEADERS.to_vec(),
            rows: e.shifts.iter().map(|s| shift_to_row(s, fmt)).collect(),
        })
        .collect()
}

fn task_sheets(data: &[EmployeeTasks]) -> Vec<Sheet> {
    data.iter()
        .map(|e| Sheet {
            title: possessive_title(&e.employee, "tracked tasks"),
            headers: TASK_HEADERS.to_vec(),
            rows: e.tasks.iter().map(task_to_row).collect(),
        })
        .collect()
}
