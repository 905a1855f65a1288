//! Schema-less table loader
//!
//! Creates the destination table with the normalized header as its column
//! list (no type annotations, default affinity) and bulk-inserts every row
//! positionally. DDL and inserts share one transaction committed at the very
//! end, so a failing row leaves nothing behind, not even the table.

#![allow(clippy::result_large_err)]

use crate::normalize::CsvBatch;
use rusqlite::Connection;
use tally_core::{Result, TallyError};
use tally_store::{from_rusqlite, quote_identifier};
use tracing::info;

/// Load a normalized batch into a freshly created table, returning the row count
///
/// The table must not already exist; SQLite's own "table already exists"
/// error surfaces unchanged.
pub fn load_table(conn: &mut Connection, table: &str, batch: &CsvBatch) -> Result<usize> {
    let table_sql = quote_identifier(table)?;
    let columns = batch
        .header
        .iter()
        .map(|c| quote_identifier(c))
        .collect::<Result<Vec<_>>>()?;
    let expected = columns.len();

    let tx = conn.transaction().map_err(from_rusqlite)?;

    let create = format!("CREATE TABLE {} ({})", table_sql, columns.join(", "));
    tx.execute(&create, []).map_err(from_rusqlite)?;

    let placeholders = (1..=expected)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    let insert = format!("INSERT INTO {} VALUES ({})", table_sql, placeholders);

    {
        let mut stmt = tx.prepare(&insert).map_err(from_rusqlite)?;
        for (idx, row) in batch.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(TallyError::FieldCountMismatch {
                    row: idx + 1,
                    expected,
                    found: row.len(),
                });
            }
            stmt.execute(rusqlite::params_from_iter(row.iter()))
                .map_err(from_rusqlite)?;
        }
    }

    tx.commit().map_err(from_rusqlite)?;

    info!(table, rows = batch.rows.len(), "loaded csv batch");
    Ok(batch.rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_store::db::open_in_memory;

    fn batch(header: &[&str], rows: &[&[&str]]) -> CsvBatch {
        CsvBatch {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    fn table_exists(conn: &Connection, table: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            > 0
    }

    #[test]
    fn test_loads_all_rows() {
        let mut conn = open_in_memory().unwrap();
        let b = batch(
            &["Title", "Amount"],
            &[&["Widget", "1"], &["Gadget", "2"], &["Sprocket", "3"]],
        );

        let count = load_table(&mut conn, "data", &b).unwrap();
        assert_eq!(count, 3);

        let stored: i64 = conn
            .query_row("SELECT COUNT(*) FROM \"data\"", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, 3);
    }

    #[test]
    fn test_existing_table_is_fatal() {
        let mut conn = open_in_memory().unwrap();
        let b = batch(&["Title"], &[&["Widget"]]);

        load_table(&mut conn, "data", &b).unwrap();
        let second = load_table(&mut conn, "data", &b);
        assert!(matches!(second, Err(TallyError::Sqlite { .. })));
    }

    #[test]
    fn test_field_count_mismatch_persists_nothing() {
        let mut conn = open_in_memory().unwrap();
        let b = batch(&["Title", "Amount"], &[&["Widget", "1"], &["Gadget"]]);

        let result = load_table(&mut conn, "data", &b);
        assert_eq!(
            result,
            Err(TallyError::FieldCountMismatch {
                row: 2,
                expected: 2,
                found: 1,
            })
        );

        // Transaction was dropped, so even the CREATE TABLE rolled back
        assert!(!table_exists(&conn, "data"));
    }

    #[test]
    fn test_values_are_bound_not_interpolated() {
        let mut conn = open_in_memory().unwrap();
        let b = batch(
            &["Title"],
            &[&["Robert'); DROP TABLE \"data\"; --"]],
        );

        load_table(&mut conn, "data", &b).unwrap();
        assert!(table_exists(&conn, "data"));

        let title: String = conn
            .query_row("SELECT \"Title\" FROM \"data\"", [], |row| row.get(0))
            .unwrap();
        assert!(title.starts_with("Robert"));
    }

    #[test]
    fn test_bad_column_name_is_rejected() {
        let mut conn = open_in_memory().unwrap();
        let b = batch(&["Title\" (x); --"], &[]);

        let result = load_table(&mut conn, "data", &b);
        assert!(matches!(result, Err(TallyError::InvalidIdentifier { .. })));
    }
}
