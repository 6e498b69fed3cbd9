use super::event_type::ClockType;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the `time_tracking` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClockEvent {
    pub id: i64,
    pub employee_id: i64,
    pub kind: ClockType,        // ⇔ time_tracking.type ('in' | 'out')
    pub time: DateTime<Utc>,    // ⇔ time_tracking.time (RFC 3339, UTC, millis)
}

impl ClockEvent {
    pub fn new(id: i64, employee_id: i64, kind: ClockType, time: DateTime<Utc>) -> Self {
        Self {
            id,
            employee_id,
            kind,
            time,
        }
    }

    /// Ordering key: timestamp first, insertion order on ties.
    pub fn sort_key(&self) -> (DateTime<Utc>, i64) {
        (self.time, self.id)
    }
}
