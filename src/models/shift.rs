use chrono::{DateTime, Utc};
use serde::Serialize;

/// A closed `in` → `out` interval. Derived, never stored.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Shift {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Shift {
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    pub fn hours(&self) -> f64 {
        self.duration_ms() as f64 / 3_600_000.0
    }
}

/// Half-open time range `[from, to)`. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl Window {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, t: &DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| *t >= from) && self.to.is_none_or(|to| *t < to)
    }
}
