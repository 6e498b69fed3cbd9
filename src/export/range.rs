// src/export/range.rs

use crate::core::shifts::days_window;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Window;
use chrono::{Local, Months, NaiveDate};

/// Parse --range (year / month / day / interval) into inclusive first/last days.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(format!(
                "start and end must have same format: {r}"
            )));
        }

        let (first, _) = period_bounds(start)?;
        let (_, last) = period_bounds(end)?;

        if last < first {
            return Err(AppError::InvalidRange(format!("end precedes start: {r}")));
        }
        return Ok((first, last));
    }

    period_bounds(r)
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Turn an optional --range into a local-time window; `None` or `all` is unbounded.
pub fn range_window(range: Option<&str>) -> AppResult<Window> {
    match range {
        None => Ok(Window::unbounded()),
        Some(r) if r.trim().eq_ignore_ascii_case("all") => Ok(Window::unbounded()),
        Some(r) => {
            let (first, last) = parse_range(r)?;
            Ok(days_window(first, last, &Local))
        }
    }
}
