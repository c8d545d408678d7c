//! Parsing of short calendar phrases ("15 june", "june 15th", "5/6",
//! "tomorrow") into dates, assuming the current year unless one is given.

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// A phrase that may still lack a month (bare day) or a day (bare month).
/// Bare phrases only make sense on one side of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Full(NaiveDate),
    Day(u32),
    Month { month: u32, year: i32 },
}

const MONTHS: [(&str, u32); 12] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
];

/// The month-name table, in calendar order.
pub fn month_names() -> impl Iterator<Item = (&'static str, u32)> {
    MONTHS.into_iter()
}

/// Full month name or a common abbreviation ("sep", "sept", "jun.").
pub fn month_from_name(word: &str) -> Option<u32> {
    let w = word.trim_end_matches('.');
    if w.len() < 3 {
        return None;
    }
    if w == "sept" {
        return Some(9);
    }
    MONTHS
        .iter()
        .find(|(name, _)| *name == w || (w.len() == 3 && name.starts_with(w)))
        .map(|(_, n)| *n)
}

struct Rules {
    relative: Regex,
    iso: Regex,
    numeric: Regex,
    day_month: Regex,
    month_day: Regex,
    day_only: Regex,
    month_only: Regex,
}

impl Rules {
    /// `end` closes every pattern: `$` for a whole phrase, `\b` for the
    /// leading phrase of a longer text.
    fn compile(end: &str) -> Self {
        let re = |body: &str| Regex::new(&format!("^{}{}", body, end)).expect("valid date rule");
        Self {
            relative: re(r"(today|tomorrow|yesterday)"),
            iso: re(r"(\d{4})-(\d{1,2})-(\d{1,2})"),
            numeric: re(r"(\d{1,2})[/.\-](\d{1,2})(?:[/.\-](\d{4}|\d{2}))?"),
            day_month: re(r"(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?([a-z]+)\.?(?:,?\s+(\d{4}))?"),
            month_day: re(r"([a-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:,?\s+(\d{4}))?"),
            day_only: re(r"(?:the\s+)?(\d{1,2})(?:st|nd|rd|th)?"),
            month_only: re(r"([a-z]+)\.?(?:\s+(\d{4}))?"),
        }
    }
}

static WHOLE: LazyLock<Rules> = LazyLock::new(|| Rules::compile("$"));
static LEADING: LazyLock<Rules> = LazyLock::new(|| Rules::compile(r"\b"));

fn clean(text: &str) -> String {
    text.trim()
        .trim_end_matches(['?', '!', '.', ',', ';', ':'])
        .trim()
        .to_lowercase()
}

fn num<T: std::str::FromStr>(caps: &regex::Captures<'_>, i: usize) -> Option<T> {
    caps.get(i).and_then(|m| m.as_str().parse().ok())
}

fn year_or(caps: &regex::Captures<'_>, i: usize, today: NaiveDate) -> i32 {
    match caps.get(i).map(|m| m.as_str()) {
        Some(y) if y.len() == 2 => 2000 + y.parse::<i32>().unwrap_or(0),
        Some(y) => y.parse().unwrap_or(today.year()),
        None => today.year(),
    }
}

/// Phrases that name a complete calendar day.
fn full_date(rules: &Rules, text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(c) = rules.relative.captures(text) {
        return match &c[1] {
            "today" => Some(today),
            "tomorrow" => today.checked_add_signed(Duration::days(1)),
            _ => today.checked_sub_signed(Duration::days(1)),
        };
    }

    if let Some(c) = rules.iso.captures(text) {
        return NaiveDate::from_ymd_opt(num(&c, 1)?, num(&c, 2)?, num(&c, 3)?);
    }

    // Day first, like the stored dd/mm/YYYY values.
    if let Some(c) = rules.numeric.captures(text) {
        return NaiveDate::from_ymd_opt(year_or(&c, 3, today), num(&c, 2)?, num(&c, 1)?);
    }

    day_month_date(rules, text, today)
}

/// `<day> <month>` and `<month> <day>` only.
fn day_month_date(rules: &Rules, text: &str, today: NaiveDate) -> Option<NaiveDate> {
    if let Some(c) = rules.day_month.captures(text)
        && let Some(month) = month_from_name(&c[2])
    {
        return NaiveDate::from_ymd_opt(year_or(&c, 3, today), month, num(&c, 1)?);
    }

    if let Some(c) = rules.month_day.captures(text)
        && let Some(month) = month_from_name(&c[1])
    {
        return NaiveDate::from_ymd_opt(year_or(&c, 3, today), month, num(&c, 2)?);
    }

    None
}

fn phrase_with(rules: &Rules, text: &str, today: NaiveDate, bare_day: bool) -> Option<Phrase> {
    if let Some(d) = full_date(rules, text, today) {
        return Some(Phrase::Full(d));
    }

    if bare_day && let Some(c) = rules.day_only.captures(text) {
        let day: u32 = num(&c, 1)?;
        return (1..=31).contains(&day).then_some(Phrase::Day(day));
    }

    if let Some(c) = rules.month_only.captures(text)
        && let Some(month) = month_from_name(&c[1])
    {
        return Some(Phrase::Month {
            month,
            year: year_or(&c, 2, today),
        });
    }

    None
}

/// Parse a text that is entirely a date phrase.
pub fn parse_date_phrase(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    full_date(&WHOLE, &clean(text), today)
}

/// Parse one side of a range. The whole side is tried first, then its
/// leading phrase, so trailing words ("10 june please") are tolerated.
/// A bare day must be the whole side: "5 stars" is not a date.
pub fn parse_range_side(text: &str, today: NaiveDate) -> Option<Phrase> {
    let text = clean(text);
    phrase_with(&WHOLE, &text, today, true)
        .or_else(|| phrase_with(&LEADING, &text, today, false))
}

/// Find the first `<day> <month>` / `<month> <day>` phrase in a longer
/// text. Every word start is a candidate; the first one that forms a real
/// date wins.
pub fn find_day_phrase(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let text = text.to_lowercase();
    let mut prev_is_word = false;

    for (i, ch) in text.char_indices() {
        let is_word = ch.is_alphanumeric();
        if is_word
            && !prev_is_word
            && let Some(d) = day_month_date(&LEADING, &text[i..], today)
        {
            return Some(d);
        }
        prev_is_word = is_word;
    }

    None
}
