use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::employees::list_employees;
use crate::db::pool::DbPool;
use crate::db::projects::list_projects;
use crate::errors::AppResult;
use crate::utils::table::Table;

/// `projects` and `users` listings.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Projects => {
            let mut table = Table::new(["Id", "Code", "Name"]);
            for p in list_projects(&pool.conn)? {
                table.add_row(vec![p.id.to_string(), p.code, p.name]);
            }
            print_table(&table, "No projects registered yet.");
        }
        Commands::Users => {
            let mut table = Table::new(["Slack id", "Name", "Admin"]);
            for e in list_employees(&pool.conn)? {
                table.add_row(vec![
                    e.slack_id,
                    e.name,
                    if e.admin { "yes" } else { "" }.to_string(),
                ]);
            }
            print_table(&table, "No users registered yet.");
        }
        _ => {}
    }

    Ok(())
}

fn print_table(table: &Table, empty: &str) {
    if table.is_empty() {
        println!("{empty}");
    } else {
        print!("{}", table.render());
    }
}
