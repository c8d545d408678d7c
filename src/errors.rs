//! Unified application error type.
//! All modules (db, core, llm, actions, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use rusqlite::ErrorCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store (retrieval) errors
    // ---------------------------
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    QuerySyntax(String),

    #[error("Data error: {0}")]
    Data(String),

    // ---------------------------
    // Text-generation service
    // ---------------------------
    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rejected generated query: {0}")]
    UnsafeQuery(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Failures raised while talking to the event store.
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            AppError::Connection(_) | AppError::QuerySyntax(_) | AppError::Data(_)
        )
    }

    /// Failures raised while turning text into a query through the
    /// text-generation service, including rejected output.
    pub fn is_translation(&self) -> bool {
        matches!(
            self,
            AppError::Translation(_) | AppError::Http(_) | AppError::UnsafeQuery(_)
        )
    }
}

/// SQLite errors are split into the three retrieval families:
/// the store could not be reached, the statement was rejected,
/// or a value could not be read back.
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        use rusqlite::Error as E;

        let msg = e.to_string();
        match &e {
            E::SqliteFailure(err, _) => match err.code {
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::PermissionDenied
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::SystemIoFailure
                | ErrorCode::ReadOnly => AppError::Connection(msg),
                ErrorCode::DatabaseCorrupt | ErrorCode::TypeMismatch => AppError::Data(msg),
                _ => AppError::QuerySyntax(msg),
            },
            E::MultipleStatement
            | E::InvalidParameterCount(..)
            | E::InvalidParameterName(_)
            | E::ExecuteReturnedResults
            | E::InvalidQuery => AppError::QuerySyntax(msg),
            E::InvalidPath(_) | E::NulError(_) => AppError::Connection(msg),
            _ => AppError::Data(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
