//! Query predicate builder: TemporalMatch → bounded, read-only SQL.
//!
//! Only values produced by the recognizer (chrono dates, month and year
//! numbers) are ever written into the SQL text.

use crate::models::TemporalMatch;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Maximum number of rows any generated query may return.
pub const ROW_CAP: u32 = 10;

/// `events.date_time` parsed from its stored `dd/mm/YYYY,HH:MM` text.
pub const PARSED_DATE_TIME: &str = "STR_TO_DATE(date_time, '%d/%m/%Y,%H:%i')";

const BASE_SQL: &str = "SELECT * FROM events WHERE";

/// Where a query came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuerySource {
    Predicate,
    Translator,
}

impl QuerySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuerySource::Predicate => "predicate",
            QuerySource::Translator => "translator",
        }
    }
}

/// A SQL statement ready to be validated and executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQuery {
    pub sql: String,
    pub source: QuerySource,
}

impl GeneratedQuery {
    pub fn new(sql: impl Into<String>, source: QuerySource) -> Self {
        Self {
            sql: sql.into(),
            source,
        }
    }
}

impl fmt::Display for GeneratedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

fn date_literal(d: NaiveDate) -> String {
    format!("'{}'", d.format("%Y-%m-%d"))
}

/// Build the SQL for a recognized match. `NoMatch` has no predicate.
pub fn build(matched: &TemporalMatch) -> Option<GeneratedQuery> {
    let predicate = match *matched {
        TemporalMatch::NoMatch => return None,
        TemporalMatch::ExactDay { date } => {
            format!("DATE({}) = {}", PARSED_DATE_TIME, date_literal(date))
        }
        TemporalMatch::DateRange { start, end } => {
            let (lo, hi) = if start <= end {
                (start, end)
            } else {
                (end, start)
            };
            format!(
                "DATE({}) BETWEEN {} AND {}",
                PARSED_DATE_TIME,
                date_literal(lo),
                date_literal(hi)
            )
        }
        TemporalMatch::MonthOfYear { month, year } => format!(
            "MONTH({p}) = {month} AND YEAR({p}) = {year}",
            p = PARSED_DATE_TIME
        ),
    };

    Some(GeneratedQuery::new(
        format!("{} {} LIMIT {}", BASE_SQL, predicate, ROW_CAP),
        QuerySource::Predicate,
    ))
}
