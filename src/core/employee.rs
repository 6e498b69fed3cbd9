use crate::core::shifts::{day_window, reconstruct_shifts, worked_hours};
use crate::db::employees::get_employee_by_slack_id;
use crate::db::queries::find_events;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEvent;
use crate::models::employee::Employee;
use crate::models::event_type::ClockType;
use crate::models::shift::{Shift, Window};
use crate::utils::time::format_since;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use rusqlite::Connection;

/// An employee together with their whole clock history.
///
/// Status is never stored: it is replayed from `events` on every query.
#[derive(Debug, Clone)]
pub struct EmployeeLog {
    pub employee: Employee,
    events: Vec<ClockEvent>,
}

impl EmployeeLog {
    /// Build the aggregate; `events` may come in any order.
    pub fn new(employee: Employee, mut events: Vec<ClockEvent>) -> Self {
        events.sort_by_key(|e| e.sort_key());
        Self { employee, events }
    }

    /// Load an employee by Slack id together with their clock history.
    pub fn load(conn: &Connection, slack_id: &str) -> AppResult<Self> {
        let employee = get_employee_by_slack_id(conn, slack_id)?;
        Self::load_for(conn, employee)
    }

    /// Load the clock history of an already fetched employee.
    pub fn load_for(conn: &Connection, employee: Employee) -> AppResult<Self> {
        let events = find_events(conn, employee.id)?;
        Ok(Self::new(employee, events))
    }

    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }

    /// Most recent clock event, if any.
    pub fn last_clock(&self) -> Option<&ClockEvent> {
        self.events.last()
    }

    /// `in` when the latest event is an `in`, `out` otherwise (including an empty log).
    pub fn status(&self) -> ClockType {
        self.last_clock().map(|e| e.kind).unwrap_or(ClockType::Out)
    }

    pub fn is_admin(&self) -> bool {
        self.employee.admin
    }

    pub fn user_name(&self) -> &str {
        &self.employee.name
    }

    pub fn shifts(&self, window: &Window) -> Vec<Shift> {
        reconstruct_shifts(&self.events, window)
    }

    pub fn hours_worked_on<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> f64 {
        worked_hours(&self.events, &day_window(day, tz))
    }

    pub fn hours_worked_today(&self) -> f64 {
        self.hours_worked_on(Local::now().date_naive(), &Local)
    }

    /// Reject a clock request that would repeat the current status.
    pub fn check_clock(&self, kind: ClockType, now: DateTime<Utc>) -> AppResult<()> {
        if self.status() != kind {
            return Ok(());
        }

        let since = self
            .last_clock()
            .map(|last| format_since(now - last.time))
            .unwrap_or_default();

        Err(AppError::AlreadyClocked { kind, since })
    }

    /// Record an event that has just been persisted.
    pub(crate) fn push(&mut self, event: ClockEvent) {
        self.events.push(event);
        self.events.sort_by_key(|e| e.sort_key());
    }
}
