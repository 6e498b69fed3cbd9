use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportKind, ExportLogic, ExportRequest};

pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Export {
        shifts: _,
        tasks,
        format,
        file,
        range,
        user,
        force,
    } = cmd
    {
        let req = ExportRequest {
            kind: if *tasks {
                ExportKind::Tasks
            } else {
                ExportKind::Shifts
            },
            format: *format,
            file: file.clone(),
            range: range.clone(),
            user: user.clone(),
            force: *force,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, actor, &req)?;
    }
    Ok(())
}
