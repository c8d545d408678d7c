use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_store_date_time;
use serde::{Deserialize, Serialize};

/// Insertion model for the `events` table, used by `add` and `import`.
///
/// Only `title` and `date_time` are required; everything else maps to a
/// nullable column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub date_time: String, // "dd/mm/YYYY,HH:MM"
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub visible_date: Option<String>,
    #[serde(default)]
    pub recurring: Option<bool>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub weekdays: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub all_time: Option<bool>,
    #[serde(default)]
    pub selected_weeks: Option<String>,
}

impl NewEvent {
    pub fn new(title: &str, date_time: &str) -> Self {
        Self {
            title: title.to_string(),
            date_time: date_time.to_string(),
            ..Default::default()
        }
    }

    /// Check the fields the query pipeline relies on.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::InvalidInput("event title is empty".into()));
        }

        if parse_store_date_time(&self.date_time).is_none() {
            return Err(AppError::InvalidDate(format!(
                "'{}' (expected dd/mm/YYYY,HH:MM)",
                self.date_time
            )));
        }

        if let Some(r) = self.rating
            && !(0.0..=5.0).contains(&r)
        {
            return Err(AppError::InvalidInput(format!(
                "rating {} is outside 0..5",
                r
            )));
        }

        Ok(())
    }
}
