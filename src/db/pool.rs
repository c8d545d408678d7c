//! SQLite connection wrapper (one connection per command or request).

use crate::db::functions::register_mysql_functions;
use rusqlite::{Connection, OpenFlags, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database for maintenance commands.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        register_mysql_functions(&conn)?;
        Ok(Self { conn })
    }

    /// Open an existing database for querying. The connection is read-only,
    /// so nothing executed through it can modify the store.
    pub fn open_read_only(path: &str) -> Result<Self> {
        let conn = Connection::open_with_flags(
            Path::new(path),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        register_mysql_functions(&conn)?;
        Ok(Self { conn })
    }
}
