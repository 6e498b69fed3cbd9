use crate::cli::parser::{AddTarget, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::employee::NewEmployee;
use crate::ui::messages::success;

/// Register a user or a project.
pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Add { target } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match target {
            AddTarget::User {
                slack_id,
                name,
                admin,
            } => {
                let employee = AddLogic::add_user(
                    &mut pool,
                    actor,
                    NewEmployee {
                        name: name.clone(),
                        slack_id: slack_id.clone(),
                        admin: *admin,
                    },
                )?;
                success(format!(
                    "User {} ({}) created{}",
                    employee.name,
                    employee.slack_id,
                    if employee.admin { " as administrator" } else { "" }
                ));
            }
            AddTarget::Project { name, code } => {
                let project = AddLogic::add_project(&mut pool, actor, name, code)?;
                success(format!("Project {} created", project.label()));
            }
        }
    }

    Ok(())
}
