use crate::core::employee::EmployeeLog;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::append_event;
use crate::errors::AppResult;
use crate::models::event_type::ClockType;
use chrono::{DateTime, Local, Utc};
use rusqlite::TransactionBehavior;

/// Result of a successful clock in/out.
#[derive(Debug, Clone)]
pub struct ClockOutcome {
    pub status: ClockType,
    pub hours_today: f64,
    pub log: EmployeeLog,
}

/// High-level business logic for the `clock` command.
pub struct ClockLogic;

impl ClockLogic {
    /// Append a `kind` event for the employee, stamped `now`.
    ///
    /// Load, check and append run in one IMMEDIATE transaction: a second
    /// writer blocks until the first commits and then sees its event.
    pub fn apply(
        pool: &mut DbPool,
        slack_id: &str,
        kind: ClockType,
        now: DateTime<Utc>,
    ) -> AppResult<ClockOutcome> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut log = EmployeeLog::load(&tx, slack_id)?;
        log.check_clock(kind, now)?;

        let event = append_event(&tx, log.employee.id, kind, now)?;
        ttlog_quiet(
            &tx,
            "clock",
            slack_id,
            &format!("{} clocked {}", log.user_name(), kind),
        );
        tx.commit()?;

        log.push(event);

        Ok(ClockOutcome {
            status: log.status(),
            hours_today: log.hours_worked_on(now.with_timezone(&Local).date_naive(), &Local),
            log,
        })
    }
}
