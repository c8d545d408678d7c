use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::log_operation;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, NewEvent};
use crate::ui::messages::success;

/// Insert one event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        date_time,
        address,
        link,
        rating,
        about,
        category,
        lat,
        long,
    } = cmd
    {
        let category_id = match category {
            Some(name) => Some(
                Category::from_name(name)
                    .ok_or_else(|| {
                        AppError::InvalidInput(format!(
                            "unknown category '{}' (music, sports, art, education, tech, food)",
                            name
                        ))
                    })?
                    .id(),
            ),
            None => None,
        };

        let ev = NewEvent {
            address: address.clone(),
            link: link.clone(),
            rating: *rating,
            about: about.clone(),
            category_id,
            lat: *lat,
            long: *long,
            ..NewEvent::new(title, date_time)
        };
        ev.validate()?;

        let pool = DbPool::new(&cfg.database)?;
        let id = insert_event(&pool.conn, &ev)?;
        log_operation(&pool.conn, "add", &id.to_string(), &ev.title)?;

        success(format!("Event #{} added: {} ({})", id, ev.title, ev.date_time));
    }
    Ok(())
}
