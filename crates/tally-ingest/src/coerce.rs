//! Post-load type coercion
//!
//! Money columns arrive as text like `$1,200.00`. For each designated column
//! that exists in the table, the currency symbol and thousands separators are
//! stripped and the column is cast to REAL in place. Values are validated
//! before the UPDATE runs, so a non-numeric residue aborts without touching
//! the table.

#![allow(clippy::result_large_err)]

use rusqlite::types::Value;
use rusqlite::Connection;
use tally_core::{Result, TallyError};
use tally_store::{from_rusqlite, quote_identifier};
use tracing::{debug, info};

/// Columns coerced by default after an import
///
/// Immutable by construction; callers pass their own slice to override.
pub const DEFAULT_MONEY_COLUMNS: &[&str] = &["Price", "Commission_Earned"];

const CURRENCY_SYMBOL: &str = "$";
const THOUSANDS_SEPARATOR: &str = ",";

/// Coerce each listed column of `table` to REAL, skipping absent columns
///
/// Idempotent: re-running on already-coerced columns leaves values unchanged.
pub fn coerce_money_columns(conn: &Connection, table: &str, columns: &[&str]) -> Result<()> {
    let present = table_columns(conn, table)?;

    for &column in columns {
        if !present.iter().any(|c| c == column) {
            debug!(table, column, "coercion column absent, skipping");
            continue;
        }
        check_residues(conn, table, column)?;

        let update = format!(
            "UPDATE {table} SET {col} = CAST(REPLACE(REPLACE({col}, '{sym}', ''), '{sep}', '') AS REAL)",
            table = quote_identifier(table)?,
            col = quote_identifier(column)?,
            sym = CURRENCY_SYMBOL,
            sep = THOUSANDS_SEPARATOR,
        );
        let updated = conn.execute(&update, []).map_err(from_rusqlite)?;
        info!(table, column, rows = updated, "coerced money column");
    }

    Ok(())
}

/// List the column names of a table via PRAGMA table_info
fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let sql = format!("PRAGMA table_info({})", quote_identifier(table)?);
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(columns)
}

/// Fail if any value in the column would not be numeric after stripping
///
/// CAST in SQLite never fails (non-numeric text becomes 0.0), so the fatal
/// contract has to be enforced here, before the rewrite.
fn check_residues(conn: &Connection, table: &str, column: &str) -> Result<()> {
    let sql = format!(
        "SELECT {col} FROM {table}",
        col = quote_identifier(column)?,
        table = quote_identifier(table)?,
    );
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let values = stmt
        .query_map([], |row| row.get::<_, Value>(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    for value in values {
        if let Value::Text(text) = value {
            let stripped = text
                .replace(CURRENCY_SYMBOL, "")
                .replace(THOUSANDS_SEPARATOR, "");
            if stripped.trim().parse::<f64>().is_err() {
                return Err(TallyError::CoercionFailed {
                    column: column.to_string(),
                    value: text,
                });
            }
        }
        // Integer/Real: already coerced. Null: nothing to strip.
    }

    Ok(())
}
