//! Event store seam used by the orchestrator.
//!
//! A store hands out one session per handled query; the session is the
//! connection, released when it is dropped.

use crate::core::ROW_CAP;
use crate::db::pool::DbPool;
use crate::db::queries::fetch_records;
use crate::errors::AppResult;
use crate::models::EventRecord;
use tracing::debug;

pub trait StoreSession {
    /// Execute a read-only query and return its rows in order, never more
    /// than the row cap.
    fn fetch(&mut self, sql: &str) -> AppResult<Vec<EventRecord>>;
}

pub trait EventStore {
    fn open(&self) -> AppResult<Box<dyn StoreSession + '_>>;
}

impl<S: EventStore + ?Sized> EventStore for &S {
    fn open(&self) -> AppResult<Box<dyn StoreSession + '_>> {
        (**self).open()
    }
}

/// SQLite file store.
pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

struct SqliteSession {
    pool: DbPool,
}

impl StoreSession for SqliteSession {
    fn fetch(&mut self, sql: &str) -> AppResult<Vec<EventRecord>> {
        let rows = fetch_records(&self.pool.conn, sql, ROW_CAP as usize)?;
        debug!(rows = rows.len(), "query executed");
        Ok(rows)
    }
}

impl EventStore for SqliteStore {
    fn open(&self) -> AppResult<Box<dyn StoreSession + '_>> {
        debug!(path = %self.path, "opening store session");
        let pool = DbPool::open_read_only(&self.path)?;
        Ok(Box::new(SqliteSession { pool }))
    }
}
