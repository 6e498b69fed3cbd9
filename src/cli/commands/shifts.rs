use crate::cli::commands::require_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::range::range_window;
use crate::export::{EmployeeShifts, ExportLogic};
use crate::utils::table::Table;
use crate::utils::time::format_hours_minutes;
use chrono::Local;

/// Print reconstructed shifts for one user, or every user with `--all`.
pub fn handle(cmd: &Commands, cfg: &Config, actor: Option<&str>) -> AppResult<()> {
    if let Commands::Shifts { user, all, range } = cmd {
        let window = range_window(range.as_deref())?;
        let pool = DbPool::new(&cfg.database)?;

        let who = if *all {
            None
        } else {
            Some(match user {
                Some(u) => u.as_str(),
                None => require_actor(actor)?,
            })
        };

        let data = ExportLogic::collect_shifts(&pool.conn, &window, who)?;
        for entry in &data {
            print_shifts(entry, cfg);
        }
    }
    Ok(())
}

fn print_shifts(entry: &EmployeeShifts, cfg: &Config) {
    println!("\n👤 {}", entry.employee);

    if entry.shifts.is_empty() {
        println!("   No shifts in the selected period.");
        return;
    }

    let mut table = Table::new(["Date", "From", "To", "Worked"]);
    let mut total = 0.0;

    for s in &entry.shifts {
        let start = s.start.with_timezone(&Local);
        let end = s.end.with_timezone(&Local);
        table.add_row(vec![
            start.format(&cfg.date_format).to_string(),
            start.format(&cfg.time_format).to_string(),
            end.format(&cfg.time_format).to_string(),
            format_hours_minutes(s.hours()),
        ]);
        total += s.hours();
    }

    print!("{}", table.render());
    println!("Total: {}", format_hours_minutes(total));
}
