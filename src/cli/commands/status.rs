use crate::cli::commands::require_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employee::EmployeeLog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event_type::ClockType;
use crate::utils::colors::{GREEN, GREY, RED, RESET};
use crate::utils::time::{format_since, format_worked};
use chrono::{Local, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Status { user } = cmd {
        let slack_id = match user {
            Some(u) => u.as_str(),
            None => require_actor(actor)?,
        };

        let pool = DbPool::new(&cfg.database)?;
        let log = EmployeeLog::load(&pool.conn, slack_id)?;

        let (color, label) = match log.status() {
            ClockType::In => (GREEN, "clocked in"),
            ClockType::Out => (RED, "clocked out"),
        };

        println!(
            "👤 {} ({}){}",
            log.user_name(),
            log.employee.slack_id,
            if log.is_admin() { " ⭐ admin" } else { "" }
        );
        println!("   Status:     {}{}{}", color, label, RESET);

        match log.last_clock() {
            Some(last) => println!(
                "   Last clock: {} {} {}",
                last.kind,
                last.time.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                format_since(Utc::now() - last.time)
            ),
            None => println!("   Last clock: {GREY}--{RESET}"),
        }

        println!("   Today:      {}", format_worked(log.hours_worked_today()));
    }
    Ok(())
}
