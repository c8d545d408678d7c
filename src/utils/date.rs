//! Calendar helpers shared by the recognizer, the store functions and the CLI.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Format of `events.date_time` as written by the event back-office.
pub const STORE_DATE_TIME_FORMAT: &str = "%d/%m/%Y,%H:%M";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse YYYY-MM-DD (used by `--today`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a stored `date_time` value such as `20/06/2025,20:30`.
///
/// Stored values are not always tidy (`20/06/2025,20 : 30` is common), so
/// whitespace is ignored.
pub fn parse_store_date_time(s: &str) -> Option<NaiveDateTime> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    NaiveDateTime::parse_from_str(&compact, STORE_DATE_TIME_FORMAT).ok()
}

/// (year, month) of the month following the given one.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, month_last_day(year, month)?)
}

/// Translate a MySQL `STR_TO_DATE` format into a chrono one.
///
/// Unknown specifiers are passed through unchanged and will simply fail to
/// match.
pub fn mysql_format_to_chrono(fmt: &str) -> String {
    let mut out = String::with_capacity(fmt.len());
    let mut chars = fmt.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(spec) = chars.next() else {
            out.push('%');
            break;
        };
        let mapped = match spec {
            'd' | 'e' => "%d",
            'm' | 'c' => "%m",
            'Y' => "%Y",
            'y' => "%y",
            'H' | 'k' => "%H",
            'h' | 'I' | 'l' => "%I",
            'i' => "%M",
            's' | 'S' => "%S",
            'p' => "%p",
            'M' => "%B",
            'b' => "%b",
            'W' => "%A",
            'a' => "%a",
            'T' => "%H:%M:%S",
            '%' => "%%",
            other => {
                out.push('%');
                out.push(other);
                continue;
            }
        };
        out.push_str(mapped);
    }

    out
}

