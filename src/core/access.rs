use crate::db::employees::get_employee_by_slack_id;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use rusqlite::Connection;

/// Resolve the acting user and make sure they are an administrator.
pub fn require_admin(conn: &Connection, actor: Option<&str>) -> AppResult<Employee> {
    let slack_id = actor.ok_or(AppError::PermissionDenied)?;
    let employee = get_employee_by_slack_id(conn, slack_id)?;

    if !employee.admin {
        return Err(AppError::PermissionDenied);
    }
    Ok(employee)
}
