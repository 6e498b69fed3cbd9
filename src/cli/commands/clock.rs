use crate::cli::commands::require_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::ClockType;
use crate::ui::messages::success;
use crate::utils::time::format_worked;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Clock { action } = cmd {
        let kind = ClockType::from_command(action)
            .ok_or_else(|| AppError::InvalidClockType(action.clone()))?;
        let slack_id = require_actor(actor)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let outcome = ClockLogic::apply(&mut pool, slack_id, kind, Utc::now())?;

        success(clock_message(outcome.status, outcome.hours_today));
    }
    Ok(())
}

/// Message shown after a successful clock in/out.
pub fn clock_message(kind: ClockType, hours_today: f64) -> String {
    if hours_today > 0.0 {
        format!(
            "Clocked {} successfully!\nYou've worked {} today so far.",
            kind,
            format_worked(hours_today)
        )
    } else {
        format!("Hi! Good to see you! 👋🐵 Clocked {} successfully!", kind)
    }
}
