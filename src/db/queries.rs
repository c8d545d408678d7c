use crate::errors::AppResult;
use crate::models::{EventRecord, NewEvent};
use chrono::Local;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row, params};

/// Render a column value the way it is shown to users; NULL is missing.
fn value_to_text(v: ValueRef<'_>) -> Option<String> {
    match v {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        // 4.0 stays "4.0", as MySQL prints a DECIMAL rating
        ValueRef::Real(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{:.1}", f)),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(format!("<{} bytes>", b.len())),
    }
}

pub fn map_row(row: &Row, columns: &[String]) -> rusqlite::Result<EventRecord> {
    let mut rec = EventRecord::default();
    for (i, name) in columns.iter().enumerate() {
        rec.set_field(name, value_to_text(row.get_ref(i)?));
    }
    Ok(rec)
}

/// Run a (validated) SELECT and map at most `max_rows` rows to EventRecords.
pub fn fetch_records(
    conn: &Connection,
    sql: &str,
    max_rows: usize,
) -> AppResult<Vec<EventRecord>> {
    let mut stmt = conn.prepare(sql)?;

    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows = stmt.query_map([], |row| map_row(row, &columns))?;

    let mut out = Vec::new();
    for r in rows.take(max_rows) {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(conn: &Connection, ev: &NewEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (title, address, lat, long, date_time, about, category_id, rating,
                             user_id, created_at, link, visible_date, recurring, end_date,
                             weekdays, dates, all_time, selected_weeks)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
        params![
            ev.title,
            ev.address,
            ev.lat,
            ev.long,
            ev.date_time,
            ev.about,
            ev.category_id,
            ev.rating,
            ev.user_id,
            Local::now().to_rfc3339(),
            ev.link,
            ev.visible_date,
            ev.recurring.unwrap_or(false),
            ev.end_date,
            ev.weekdays,
            ev.dates,
            ev.all_time.unwrap_or(false),
            ev.selected_weeks,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn count_events(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?)
}
