use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Outcome of temporal recognition on a single query.
///
/// Exactly one variant is produced per query: rules are tried in a fixed
/// order and the first one that succeeds decides the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemporalMatch {
    NoMatch,
    ExactDay { date: NaiveDate },
    DateRange { start: NaiveDate, end: NaiveDate },
    MonthOfYear { month: u32, year: i32 },
}

impl fmt::Display for TemporalMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalMatch::NoMatch => write!(f, "no match"),
            TemporalMatch::ExactDay { date } => write!(f, "day {}", date),
            TemporalMatch::DateRange { start, end } => write!(f, "range {} → {}", start, end),
            TemporalMatch::MonthOfYear { month, year } => {
                write!(f, "month {:04}-{:02}", year, month)
            }
        }
    }
}
