use crate::db::db_utils::{from_db_time, to_db_time};
use crate::errors::AppResult;
use crate::models::project::Project;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn map_project(row: &Row) -> Result<Project> {
    let created: String = row.get("created_at")?;

    Ok(Project {
        id: row.get("id")?,
        name: row.get("name")?,
        code: row.get("code")?,
        created_at: from_db_time(3, &created)?,
    })
}

/// Case-insensitive lookup by project code.
///
/// Codes are stored upper-cased with Unicode rules; `COLLATE NOCASE` would
/// only fold ASCII, so the code is normalized here the same way.
pub fn find_project_by_code(conn: &Connection, code: &str) -> AppResult<Option<Project>> {
    let project = conn
        .query_row(
            "SELECT id, name, code, created_at FROM projects WHERE code = ?1",
            [normalize_code(code)],
            map_project,
        )
        .optional()?;
    Ok(project)
}

pub fn find_project_by_id(conn: &Connection, id: i64) -> AppResult<Option<Project>> {
    let project = conn
        .query_row(
            "SELECT id, name, code, created_at FROM projects WHERE id = ?1",
            [id],
            map_project,
        )
        .optional()?;
    Ok(project)
}

/// Stored form of a project code: trimmed, upper-case.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Insert a project; the caller is expected to have normalized `code`.
pub fn insert_project(conn: &Connection, name: &str, code: &str) -> AppResult<Project> {
    let now = Utc::now();
    conn.execute(
        "INSERT INTO projects (name, code, created_at) VALUES (?1, ?2, ?3)",
        params![name, code, to_db_time(&now)],
    )?;

    Ok(Project {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        code: code.to_string(),
        created_at: now,
    })
}

pub fn list_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt =
        conn.prepare("SELECT id, name, code, created_at FROM projects ORDER BY code ASC")?;
    let rows = stmt.query_map([], map_project)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
