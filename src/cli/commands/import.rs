use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::log_operation;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::NewEvent;
use crate::ui::messages::success;
use std::fs;

/// Import a JSON array of events in a single transaction: either every
/// event is stored or none is.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let content = fs::read_to_string(file)?;
        let events: Vec<NewEvent> = serde_json::from_str(&content)?;

        for (i, ev) in events.iter().enumerate() {
            ev.validate()
                .map_err(|e| AppError::InvalidInput(format!("event #{}: {}", i + 1, e)))?;
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let tx = pool.conn.transaction()?;
        for ev in &events {
            insert_event(&tx, ev)?;
        }
        tx.commit()?;
        let inserted = events.len();

        log_operation(
            &pool.conn,
            "import",
            file,
            &format!("Imported {} events", inserted),
        )?;
        success(format!("Imported {} events from {}", inserted, file));
    }
    Ok(())
}
