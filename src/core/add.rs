use crate::core::access::require_admin;
use crate::db::employees::{count_employees, insert_employee};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::projects::{find_project_by_code, insert_project, normalize_code};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, NewEmployee};
use crate::models::project::Project;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Register a new employee.
    ///
    /// Only administrators may add users, except for the very first one,
    /// which bootstraps an empty database.
    pub fn add_user(pool: &mut DbPool, actor: Option<&str>, new: NewEmployee) -> AppResult<Employee> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(AppError::MissingField(
                "User name is required to create a user".into(),
            ));
        }
        if new.slack_id.trim().is_empty() {
            return Err(AppError::MissingField(
                "Slack id is required to create a user".into(),
            ));
        }

        if count_employees(&pool.conn)? > 0 {
            require_admin(&pool.conn, actor)?;
        }

        let employee = insert_employee(
            &pool.conn,
            &NewEmployee {
                name: name.to_string(),
                slack_id: new.slack_id.trim().to_string(),
                admin: new.admin,
            },
        )?;

        ttlog_quiet(
            &pool.conn,
            "add_user",
            &employee.slack_id,
            &format!(
                "User {} created{}",
                employee.name,
                if employee.admin { " (admin)" } else { "" }
            ),
        );

        Ok(employee)
    }

    /// Register a new project; the code is stored upper-case and must be unique.
    pub fn add_project(
        pool: &mut DbPool,
        actor: Option<&str>,
        name: &str,
        code: &str,
    ) -> AppResult<Project> {
        require_admin(&pool.conn, actor)?;

        let name = name.trim();
        let code = normalize_code(code);

        if name.is_empty() || code.is_empty() {
            return Err(AppError::MissingField(
                "Project code and name are required to create a project".into(),
            ));
        }

        if let Some(existing) = find_project_by_code(&pool.conn, &code)? {
            return Err(AppError::ProjectConflict {
                name: existing.name,
                code: existing.code,
            });
        }

        let project = insert_project(&pool.conn, name, &code)?;

        ttlog_quiet(
            &pool.conn,
            "add_project",
            &project.code,
            &format!("Project {} ({}) created", project.name, project.code),
        );

        Ok(project)
    }
}
