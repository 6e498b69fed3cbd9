// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Write flat rows as pretty JSON or as CSV (header taken from the row fields).
pub(crate) fn export_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    info(format!(
        "Exporting {} rows to {}: {}",
        rows.len(),
        format.as_str().to_uppercase(),
        path.display()
    ));

    match format {
        ExportFormat::Json => write_json(rows, path)?,
        ExportFormat::Csv => write_csv(rows, path)?,
        ExportFormat::Xlsx => {
            return Err(AppError::Export(
                "XLSX needs one sheet per employee, not flat rows".into(),
            ));
        }
    }

    notify_export_success(&format.as_str().to_uppercase(), path);
    Ok(())
}

fn write_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
