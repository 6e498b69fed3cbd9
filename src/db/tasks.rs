use crate::db::db_utils::{from_db_time, to_db_time};
use crate::errors::AppResult;
use crate::models::shift::Window;
use crate::models::task::{NewTask, Task};
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{Connection, Result, Row, params, params_from_iter};

fn map_task(row: &Row) -> Result<Task> {
    let date: String = row.get("date")?;

    Ok(Task {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        project_id: row.get("project_id")?,
        ticket: row.get("ticket")?,
        description: row.get("description")?,
        hours: row.get("hours")?,
        date: from_db_time(6, &date)?,
    })
}

pub fn insert_task(conn: &Connection, new: &NewTask) -> AppResult<Task> {
    conn.execute(
        "INSERT INTO tasks (employee_id, project_id, ticket, description, hours, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            new.employee_id,
            new.project_id,
            new.ticket,
            new.description,
            new.hours,
            to_db_time(&new.date),
            to_db_time(&Utc::now()),
        ],
    )?;

    Ok(Task {
        id: conn.last_insert_rowid(),
        employee_id: new.employee_id,
        project_id: new.project_id,
        ticket: new.ticket.clone(),
        description: new.description.clone(),
        hours: new.hours,
        date: new.date,
    })
}

/// Tasks whose date falls in `window`, optionally for one employee.
pub fn load_tasks(
    conn: &Connection,
    window: &Window,
    employee_id: Option<i64>,
) -> AppResult<Vec<Task>> {
    let mut sql = String::from(
        "SELECT id, employee_id, project_id, ticket, description, hours, date
         FROM tasks WHERE 1 = 1",
    );
    let mut args: Vec<Value> = Vec::new();

    if let Some(from) = window.from {
        sql.push_str(" AND date >= ?");
        args.push(Value::Text(to_db_time(&from)));
    }
    if let Some(to) = window.to {
        sql.push_str(" AND date < ?");
        args.push(Value::Text(to_db_time(&to)));
    }
    if let Some(id) = employee_id {
        sql.push_str(" AND employee_id = ?");
        args.push(Value::Integer(id));
    }
    sql.push_str(" ORDER BY date ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args), map_task)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
