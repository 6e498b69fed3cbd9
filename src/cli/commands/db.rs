use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Database maintenance (`db`) and the internal log (`log --print`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Db {
            migrate,
            check,
            vacuum,
            info,
        } => {
            if !(*migrate || *check || *vacuum || *info) {
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;

            if *migrate {
                step("Running migrations");
                run_pending_migrations(&pool.conn)?;
                done("Migration completed.");
            }

            if *info {
                stats::print_db_info(&mut pool, &cfg.database)?;
            }

            if *check {
                step("Running integrity check");
                let integrity: String = pool
                    .conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

                if integrity == "ok" {
                    done("Integrity check passed.");
                } else {
                    println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
                }
            }

            if *vacuum {
                step("Running VACUUM");
                pool.conn.execute_batch("VACUUM;")?;
                done("Vacuum completed.");
            }
        }
        Commands::Log { print: true } => {
            let mut pool = DbPool::new(&cfg.database)?;
            LogLogic::print_log(&mut pool)?;
        }
        _ => {}
    }

    Ok(())
}

fn step(what: &str) {
    println!("{CYAN}▶ {what}…{RESET}");
}

fn done(what: &str) {
    println!("{GREEN}✔ {what}{RESET}\n");
}
