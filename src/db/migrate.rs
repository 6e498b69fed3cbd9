use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Current schema version, recorded in the `log` table once applied.
const SCHEMA_VERSION: &str = "20250310_0001_initial_schema";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            slack_id    TEXT NOT NULL UNIQUE,
            admin       INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_projects_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            code        TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_time_tracking_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_tracking (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            type         TEXT NOT NULL CHECK(type IN ('in','out')),
            time         TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_tracking_employee_time
            ON time_tracking(employee_id, time);
        "#,
    )?;
    Ok(())
}

fn create_tasks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  INTEGER NOT NULL REFERENCES employees(id),
            project_id   INTEGER NOT NULL REFERENCES projects(id),
            ticket       TEXT,
            description  TEXT NOT NULL,
            hours        REAL NOT NULL DEFAULT 0,
            date         TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_employee_date ON tasks(employee_id, date);
        "#,
    )?;
    Ok(())
}

fn schema_recorded(conn: &Connection) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([SCHEMA_VERSION], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: create every missing table.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (table, create) in [
        ("employees", create_employees_table as fn(&Connection) -> Result<()>),
        ("projects", create_projects_table),
        ("time_tracking", create_time_tracking_table),
        ("tasks", create_tasks_table),
    ] {
        if !table_exists(conn, table)? {
            create(conn)?;
            success(format!("Created {} table.", table));
        }
    }

    if !schema_recorded(conn)? {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), 'migration_applied', ?1, 'Initial schema')",
            [SCHEMA_VERSION],
        )?;
    }

    Ok(())
}
