//! MySQL date functions for SQLite.
//!
//! Generated queries (and the ones the translator asks for) are written in
//! MySQL dialect. SQLite already has `DATE()`; the rest is registered here:
//! `STR_TO_DATE`, `MONTH`, `YEAR`, `DAY`, `CURDATE`, `NOW`.
//! Values that cannot be parsed yield `NULL`, as in MySQL.

use crate::utils::date::mysql_format_to_chrono;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Result};

const SQL_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
const SQL_DATE: &str = "%Y-%m-%d";

fn text_arg(ctx: &Context<'_>, idx: usize) -> Option<String> {
    match ctx.get_raw(idx) {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => std::str::from_utf8(t).ok().map(str::to_string),
    }
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `STR_TO_DATE('20/06/2025,20 : 30', '%d/%m/%Y,%H:%i')` → `2025-06-20 20:30:00`.
/// Whitespace is ignored on both sides.
pub fn str_to_date(value: &str, mysql_fmt: &str) -> Option<String> {
    let value = compact(value);
    let fmt = mysql_format_to_chrono(&compact(mysql_fmt));

    if let Ok(dt) = NaiveDateTime::parse_from_str(&value, &fmt) {
        return Some(dt.format(SQL_DATE_TIME).to_string());
    }
    NaiveDate::parse_from_str(&value, &fmt)
        .ok()
        .map(|d| d.format(SQL_DATE).to_string())
}

/// Date part of a `YYYY-MM-DD[ HH:MM:SS]` value.
fn sql_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim().get(..10)?, SQL_DATE).ok()
}

fn register_date_part(conn: &Connection, name: &str, part: fn(NaiveDate) -> i64) -> Result<()> {
    conn.create_scalar_function(
        name,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        move |ctx| Ok(text_arg(ctx, 0).as_deref().and_then(sql_date).map(part)),
    )
}

pub fn register_mysql_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "STR_TO_DATE",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value = text_arg(ctx, 0);
            let fmt = text_arg(ctx, 1);
            Ok(match (value, fmt) {
                (Some(v), Some(f)) => str_to_date(&v, &f),
                _ => None,
            })
        },
    )?;

    register_date_part(conn, "YEAR", |d| d.year() as i64)?;
    register_date_part(conn, "MONTH", |d| d.month() as i64)?;
    register_date_part(conn, "DAY", |d| d.day() as i64)?;

    conn.create_scalar_function("CURDATE", 0, FunctionFlags::SQLITE_UTF8, |_| {
        Ok(Local::now().date_naive().format(SQL_DATE).to_string())
    })?;
    conn.create_scalar_function("NOW", 0, FunctionFlags::SQLITE_UTF8, |_| {
        Ok(Local::now().naive_local().format(SQL_DATE_TIME).to_string())
    })?;

    Ok(())
}
