//! Event-log → shifts reduction.
//!
//! Pure functions: they never touch the database and never fail. The input
//! may come in any order; events are always replayed oldest-to-newest.

use crate::models::clock_event::ClockEvent;
use crate::models::event_type::ClockType;
use crate::models::shift::{Shift, Window};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

/// Rebuild the closed shifts whose events fall inside `window`.
///
/// - the first unmatched `in` opens a shift, later `in`s are ignored until
///   an `out` closes it
/// - an `out` with nothing open is discarded
/// - an `in` still open at the end of the window is not counted
pub fn reconstruct_shifts(events: &[ClockEvent], window: &Window) -> Vec<Shift> {
    let mut sorted: Vec<&ClockEvent> = events.iter().filter(|e| window.contains(&e.time)).collect();
    sorted.sort_by_key(|e| e.sort_key());

    let mut shifts = Vec::new();
    let mut pending: Option<DateTime<Utc>> = None;

    for ev in sorted {
        match (ev.kind, pending) {
            (ClockType::In, None) => pending = Some(ev.time),
            (ClockType::In, Some(_)) => {}
            (ClockType::Out, Some(start)) => {
                shifts.push(Shift {
                    start,
                    end: ev.time,
                });
                pending = None;
            }
            (ClockType::Out, None) => {}
        }
    }

    shifts
}

/// Sum of the shift durations in `window`, in fractional hours.
pub fn worked_hours(events: &[ClockEvent], window: &Window) -> f64 {
    let ms: i64 = reconstruct_shifts(events, window)
        .iter()
        .map(Shift::duration_ms)
        .sum();
    ms as f64 / 3_600_000.0
}

/// `[midnight of day, midnight of the next day)` in the given time zone.
///
/// A midnight skipped by a DST jump is replaced by 01:00 local time.
pub fn day_window<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Window {
    let start = local_midnight(day, tz);
    let end = day
        .checked_add_days(Days::new(1))
        .and_then(|next| local_midnight(next, tz));

    Window {
        from: start,
        to: end,
    }
}

/// `[midnight of first, midnight of the day after last)` in the given time zone.
pub fn days_window<Tz: TimeZone>(first: NaiveDate, last: NaiveDate, tz: &Tz) -> Window {
    Window {
        from: day_window(first, tz).from,
        to: day_window(last, tz).to,
    }
}

fn local_midnight<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = day.and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            // midnight skipped by a DST jump: take the first hour that exists
            let one_am = day.and_hms_opt(1, 0, 0)?;
            tz.from_local_datetime(&one_am).earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
}
