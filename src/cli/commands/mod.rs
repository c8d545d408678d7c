pub mod add;
pub mod ask;
pub mod config;
pub mod import;
pub mod info;
pub mod init;
pub mod log;
pub mod sql;
pub mod webhook;

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Join the words of a free-text argument back into one utterance.
pub(crate) fn utterance(words: &[String]) -> AppResult<String> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        return Err(AppError::InvalidInput("empty query".into()));
    }
    Ok(text)
}

/// Parse the optional `--today YYYY-MM-DD` override.
pub(crate) fn today_override(today: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match today {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}
