// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::collections::HashSet;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_COLOR: u32 = 0xE33F20;
const MIN_COLUMN_WIDTH: usize = 20;
const MAX_SHEET_NAME: usize = 31;
const FALLBACK_SHEET_NAME: &str = "Sheet";

/// One worksheet worth of data.
pub(crate) struct Sheet {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Write one worksheet per entry, with a styled header row.
pub(crate) fn export_xlsx(sheets: &[Sheet], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if sheets.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_COLOR))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut used_names = HashSet::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(unique_sheet_name(&sheet.title, &mut used_names))
            .map_err(to_export_error)?;

        write_sheet(worksheet, sheet, &header_format)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header_format: &Format) -> AppResult<()> {
    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = sheet
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    for (row_index, values) in sheet.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;

        for (col, value) in values.iter().enumerate() {
            worksheet
                .write(row, col as u16, value.as_str())
                .map_err(to_export_error)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        let width = (*w + 2).max(MIN_COLUMN_WIDTH);
        worksheet
            .set_column_width(c as u16, width as f64)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Excel sheet names: at most 31 chars, no `[]:*?/\`, no leading or trailing
/// `'`, unique case-insensitively.
pub(crate) fn unique_sheet_name(title: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();

    let mut base = fit_sheet_name(&cleaned, MAX_SHEET_NAME);
    if base.trim().is_empty() {
        base = FALLBACK_SHEET_NAME.to_string();
    }

    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate.to_lowercase()) {
        let suffix = format!(" ({n})");
        let keep = MAX_SHEET_NAME - suffix.chars().count();
        candidate = format!("{}{}", fit_sheet_name(&base, keep), suffix);
        n += 1;
    }

    used.insert(candidate.to_lowercase());
    candidate
}

/// Cut to `max` chars; a cut can leave the possessive `'` at the end.
fn fit_sheet_name(name: &str, max: usize) -> String {
    let cut: String = name.chars().take(max).collect();
    cut.trim_matches('\'').to_string()
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
