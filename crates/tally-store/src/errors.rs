//! Error helpers for SQLite-facing code

use tally_core::TallyError;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> TallyError {
    TallyError::Sqlite {
        message: err.to_string(),
    }
}
