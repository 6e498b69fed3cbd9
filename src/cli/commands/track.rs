use crate::cli::commands::require_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::{TrackLogic, TrackRequest};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::reporting::wait_for_forward;
use crate::ui::messages::success;
use crate::utils::time::format_hours_minutes;
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Track {
        code,
        project,
        description,
        time,
        ticket,
    } = cmd
    {
        let slack_id = require_actor(actor)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let outcome = TrackLogic::apply(
            &mut pool,
            cfg,
            slack_id,
            TrackRequest {
                project_code: code.clone(),
                project_id: *project,
                ticket: ticket.clone(),
                description: description.clone(),
                time: time.clone(),
            },
            Utc::now(),
        )?;

        success(format!(
            "Tracking created for project {} ({})",
            outcome.project.label(),
            format_hours_minutes(outcome.task.hours)
        ));

        // the process would otherwise exit before the report is sent
        if let Some(handle) = outcome.forward {
            wait_for_forward(handle);
        }
    }
    Ok(())
}
