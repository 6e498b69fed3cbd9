// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// A missing file, or `force`, may be written right away; an existing one
/// only after the user agrees to overwrite it.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if confirm(format!("The file '{}' already exists. Overwrite?", path.display()))? {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(
        "Export cancelled: existing file not overwritten".into(),
    ))
}
