//! Clock-event persistence: the `time_tracking` table.

use crate::db::db_utils::{conversion_error, from_db_time, to_db_time};
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::event_type::ClockType;
use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<ClockEvent> {
    let kind_str: String = row.get("type")?;
    let kind = ClockType::from_db_str(&kind_str).ok_or_else(|| {
        conversion_error(2, AppError::Other(format!("Invalid clock type: {}", kind_str)))
    })?;

    let time_str: String = row.get("time")?;

    Ok(ClockEvent {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        kind,
        time: from_db_time(3, &time_str)?,
    })
}

/// Every clock event of an employee, oldest first.
pub fn find_events(conn: &Connection, employee_id: i64) -> AppResult<Vec<ClockEvent>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, employee_id, type, time FROM time_tracking
         WHERE employee_id = ?1
         ORDER BY time ASC, id ASC",
    )?;

    let rows = stmt.query_map([employee_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append one event and return it with its new id.
///
/// `time` is truncated to milliseconds, the precision stored in the table.
pub fn append_event(
    conn: &Connection,
    employee_id: i64,
    kind: ClockType,
    time: DateTime<Utc>,
) -> AppResult<ClockEvent> {
    let time = time.trunc_subsecs(3);
    conn.execute(
        "INSERT INTO time_tracking (employee_id, type, time, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            employee_id,
            kind.to_db_str(),
            to_db_time(&time),
            to_db_time(&Utc::now()),
        ],
    )?;

    Ok(ClockEvent::new(
        conn.last_insert_rowid(),
        employee_id,
        kind,
        time,
    ))
}

pub fn count_events(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM time_tracking", [], |row| row.get(0))
}
