//! Internal operation log (`log` table), written by maintenance commands.
//! Query handling never writes here: its connections are read-only.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

pub fn log_operation(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![now, operation, target, message])?;

    Ok(())
}

/// Most recent log rows, newest first: (date, operation, message).
pub fn recent(conn: &Connection, limit: usize) -> AppResult<Vec<(String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT date, operation, message FROM log ORDER BY id DESC LIMIT ?1")?;

    let rows = stmt.query_map([limit as i64], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
