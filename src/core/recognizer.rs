//! Temporal expression recognizer.
//!
//! Rules, in priority order (the first one that succeeds wins):
//! 1. range phrase: "between X and Y" / "from X to Y"
//! 2. single date: "15 june" / "june 15"
//! 3. "this month"
//! 4. "next month"
//! 5. a month name anywhere in the text
//!
//! A rule that matches the text but cannot produce valid dates does not
//! stop recognition: the next rule is tried on the same text.

use crate::core::date_phrase::{self, Phrase};
use crate::models::TemporalMatch;
use crate::utils::date::{first_of_month, last_of_month, next_month};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:between|from)\s+(.*?)\s+(?:and|to)\s+(.*)").expect("valid range rule")
});

/// Recognize the temporal phrase of `query`, relative to `today`.
pub fn recognize(query: &str, today: NaiveDate) -> TemporalMatch {
    let text = query.to_lowercase();

    let matched = range_rule(&text, today)
        .or_else(|| single_date_rule(&text, today))
        .or_else(|| this_month_rule(&text, today))
        .or_else(|| next_month_rule(&text, today))
        .or_else(|| month_name_rule(&text, today))
        .unwrap_or(TemporalMatch::NoMatch);

    debug!(query = %query, today = %today, matched = %matched, "temporal recognition");
    matched
}

fn range_rule(text: &str, today: NaiveDate) -> Option<TemporalMatch> {
    let caps = RANGE_RE.captures(text)?;

    let start = date_phrase::parse_range_side(&caps[1], today);
    let end = date_phrase::parse_range_side(&caps[2], today);

    match (start, end) {
        (Some(s), Some(e)) => {
            let Some((start, end)) = resolve_range(s, e) else {
                debug!(start = &caps[1], end = &caps[2], "range sides do not form dates, trying next rule");
                return None;
            };
            Some(TemporalMatch::DateRange { start, end })
        }
        _ => {
            debug!(
                start = &caps[1],
                end = &caps[2],
                "range phrase without parsable bounds, trying next rule"
            );
            None
        }
    }
}

/// Turn two range sides into concrete bounds. A bare day borrows its month
/// (and year) from the other side; a bare month covers the whole month.
/// Two bare numbers ("from 4 to 5 stars") name no month and are no range.
fn resolve_range(start: Phrase, end: Phrase) -> Option<(NaiveDate, NaiveDate)> {
    let anchor = |other: Phrase| -> Option<(i32, u32)> {
        match other {
            Phrase::Full(d) => Some((d.year(), d.month())),
            Phrase::Month { month, year } => Some((year, month)),
            Phrase::Day(_) => None,
        }
    };

    let s = match start {
        Phrase::Full(d) => d,
        Phrase::Month { month, year } => first_of_month(year, month)?,
        Phrase::Day(day) => {
            let (y, m) = anchor(end)?;
            NaiveDate::from_ymd_opt(y, m, day)?
        }
    };

    let e = match end {
        Phrase::Full(d) => d,
        Phrase::Month { month, year } => last_of_month(year, month)?,
        Phrase::Day(day) => {
            let (y, m) = anchor(start)?;
            NaiveDate::from_ymd_opt(y, m, day)?
        }
    };

    Some((s, e))
}

fn single_date_rule(text: &str, today: NaiveDate) -> Option<TemporalMatch> {
    date_phrase::find_day_phrase(text, today).map(|date| TemporalMatch::ExactDay { date })
}

fn this_month_rule(text: &str, today: NaiveDate) -> Option<TemporalMatch> {
    text.contains("this month").then(|| TemporalMatch::MonthOfYear {
        month: today.month(),
        year: today.year(),
    })
}

fn next_month_rule(text: &str, today: NaiveDate) -> Option<TemporalMatch> {
    if !text.contains("next month") {
        return None;
    }
    let (year, month) = next_month(today.year(), today.month());
    Some(TemporalMatch::MonthOfYear { month, year })
}

fn month_name_rule(text: &str, today: NaiveDate) -> Option<TemporalMatch> {
    date_phrase::month_names()
        .find(|(name, _)| text.contains(name))
        .map(|(_, month)| TemporalMatch::MonthOfYear {
            month,
            year: today.year(),
        })
}
