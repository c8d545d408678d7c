use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Column definitions of the `events` table, in schema order.
const EVENT_COLUMNS: &[(&str, &str)] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("title", "TEXT NOT NULL"),
    ("address", "TEXT"),
    ("lat", "REAL"),
    ("long", "REAL"),
    ("date_time", "TEXT NOT NULL"),
    ("about", "TEXT"),
    ("category_id", "INTEGER"),
    ("rating", "REAL"),
    ("user_id", "INTEGER"),
    ("created_at", "TEXT NOT NULL DEFAULT ''"),
    ("link", "TEXT"),
    ("visible_date", "TEXT"),
    ("recurring", "INTEGER NOT NULL DEFAULT 0"),
    ("end_date", "TEXT"),
    ("weekdays", "TEXT"),
    ("dates", "TEXT"),
    ("all_time", "INTEGER NOT NULL DEFAULT 0"),
    ("selected_weeks", "TEXT"),
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn events_columns(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
    cols.collect()
}

/// Create the `events` table with the full schema.
fn create_events_table(conn: &Connection) -> Result<()> {
    let columns: Vec<String> = EVENT_COLUMNS
        .iter()
        .map(|(name, def)| format!("    {:<15} {}", name, def))
        .collect();

    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS events (\n{}\n);",
        columns.join(",\n")
    ))?;
    Ok(())
}

/// Tables created by older tooling may lack some of the columns;
/// add them as nullable so `SELECT *` keeps a stable shape.
fn migrate_add_missing_columns(conn: &Connection) -> Result<()> {
    let existing = events_columns(conn)?;

    for (name, def) in EVENT_COLUMNS {
        if existing.iter().any(|c| c.eq_ignore_ascii_case(name)) {
            continue;
        }

        // ALTER TABLE cannot add NOT NULL columns without a default
        // nor a second primary key.
        let def = if def.contains("PRIMARY KEY") {
            continue;
        } else if def.contains("NOT NULL") && !def.contains("DEFAULT") {
            def.replace("NOT NULL", "").trim().to_string()
        } else {
            def.to_string()
        };

        warning(format!("Adding '{}' column to events table...", name));
        conn.execute_batch(&format!("ALTER TABLE events ADD COLUMN \"{}\" {};", name, def))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Added missing events column')",
            [name],
        )?;
    }

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or complete the events table
    if !events_table_exists(conn)? {
        create_events_table(conn)?;
        success("Created events table.");
    } else {
        migrate_add_missing_columns(conn)?;
    }

    // 3) Indexes
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_events_date_time ON events(date_time);
        CREATE INDEX IF NOT EXISTS idx_events_category ON events(category_id);
        "#,
    )?;

    Ok(())
}
