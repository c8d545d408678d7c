use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::recent;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let rows = recent(&pool.conn, *limit)?;

        header("Internal log");
        if rows.is_empty() {
            println!("(empty)");
        }
        for (date, operation, message) in rows {
            println!("{:<27} {:<18} {}", date, operation, message);
        }
    }
    Ok(())
}
