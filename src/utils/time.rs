//! Time utilities: parsing HH:MM, formatting elapsed time and worked hours.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, TimeDelta, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// `"01:30"` → `1.5` hours.
pub fn parse_duration_hours(t: &str) -> AppResult<f64> {
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(parsed.hour() as f64 + parsed.minute() as f64 / 60.0)
}

/// Elapsed time since the last clock, as shown to the user:
/// `(12m ago)` under one hour, `(3.5h ago)` otherwise.
///
/// Minutes are rounded, so 59m30s and up still under an hour reads `(60m ago)`.
pub fn format_since(elapsed: TimeDelta) -> String {
    let hours = elapsed.num_milliseconds() as f64 / 3_600_000.0;
    if hours < 1.0 {
        format!("({:.0}m ago)", hours * 60.0)
    } else {
        format!("({:.1}h ago)", hours)
    }
}

/// Worked hours as a short label: `45m` under one hour, `7.5h` otherwise.
pub fn format_worked(hours: f64) -> String {
    if hours < 1.0 {
        format!("{}m", (hours * 60.0).round() as i64)
    } else {
        format!("{:.1}h", hours)
    }
}

/// Task hours as `2h 05m`.
pub fn format_hours_minutes(hours: f64) -> String {
    let total = (hours * 60.0).round() as i64;
    format!("{}h {:02}m", total / 60, total % 60)
}
