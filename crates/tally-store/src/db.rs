//! Database connection management
//!
//! Provides utilities for opening SQLite connections. Each CLI invocation
//! opens its own connection and drops it on exit; concurrent invocations
//! against the same file rely on SQLite's own locking.

#![allow(clippy::result_large_err)]

use crate::errors::from_rusqlite;
use rusqlite::Connection;
use std::path::Path;
use tally_core::Result;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("reports.db");

        let conn = open(&db_path).unwrap();
        conn.execute("CREATE TABLE t (x)", []).unwrap();
        drop(conn);

        assert!(db_path.exists());
    }

    #[test]
    fn test_open_in_memory() {
        let conn = open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (x)", []).unwrap();
    }
}
