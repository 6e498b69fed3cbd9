use crate::db::db_utils::{from_db_time, to_db_time};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, NewEmployee};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const COLUMNS: &str = "id, name, slack_id, admin, created_at, updated_at";

fn map_employee(row: &Row) -> Result<Employee> {
    let created: String = row.get("created_at")?;
    let updated: String = row.get("updated_at")?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        slack_id: row.get("slack_id")?,
        admin: row.get::<_, i32>("admin")? == 1,
        created_at: from_db_time(4, &created)?,
        updated_at: from_db_time(5, &updated)?,
    })
}

pub fn find_employee_by_slack_id(conn: &Connection, slack_id: &str) -> AppResult<Option<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees WHERE slack_id = ?1");
    let employee = conn
        .query_row(&sql, [slack_id], map_employee)
        .optional()?;
    Ok(employee)
}

/// Like `find_employee_by_slack_id`, but a missing row is an error.
pub fn get_employee_by_slack_id(conn: &Connection, slack_id: &str) -> AppResult<Employee> {
    find_employee_by_slack_id(conn, slack_id)?
        .ok_or_else(|| AppError::EmployeeNotFound(slack_id.to_string()))
}

pub fn insert_employee(conn: &Connection, new: &NewEmployee) -> AppResult<Employee> {
    if find_employee_by_slack_id(conn, &new.slack_id)?.is_some() {
        return Err(AppError::EmployeeConflict(new.slack_id.clone()));
    }

    let now = Utc::now();
    conn.execute(
        "INSERT INTO employees (name, slack_id, admin, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)",
        params![
            new.name,
            new.slack_id,
            if new.admin { 1 } else { 0 },
            to_db_time(&now),
        ],
    )?;

    Ok(Employee {
        id: conn.last_insert_rowid(),
        name: new.name.clone(),
        slack_id: new.slack_id.clone(),
        admin: new.admin,
        created_at: now,
        updated_at: now,
    })
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let sql = format!("SELECT {COLUMNS} FROM employees ORDER BY name ASC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_employees(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
}
