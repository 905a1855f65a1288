//! Read-only query layer
//!
//! The two canned queries the reports CLI exposes: schema introspection and
//! top-N rows by a numeric metric column.

#![allow(clippy::result_large_err)]

use crate::errors::from_rusqlite;
use crate::ident::quote_identifier;
use rusqlite::Connection;
use tally_core::Result;
use tracing::debug;

/// One table's definition as recorded by SQLite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub sql: String,
}

/// Return the literal CREATE TABLE statement of every user table,
/// in SQLite's enumeration order
pub fn schema_statements(conn: &Connection) -> Result<Vec<TableSchema>> {
    let mut stmt = conn
        .prepare(
            "SELECT name, sql FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .map_err(from_rusqlite)?;

    let schemas = stmt
        .query_map([], |row| {
            Ok(TableSchema {
                name: row.get(0)?,
                sql: row.get(1)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(schemas)
}

/// Return up to `limit` (label, metric) pairs ordered by the metric descending
///
/// Ties are left to storage order. The metric column is expected to hold
/// numeric values, i.e. the coercion pass has already run.
pub fn top_by_metric(
    conn: &Connection,
    table: &str,
    label_col: &str,
    metric_col: &str,
    limit: u32,
) -> Result<Vec<(String, f64)>> {
    let sql = format!(
        "SELECT {label}, {metric} FROM {table} ORDER BY {metric} DESC LIMIT ?1",
        label = quote_identifier(label_col)?,
        metric = quote_identifier(metric_col)?,
        table = quote_identifier(table)?,
    );

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([limit], |row| Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    debug!(table, metric_col, limit, returned = rows.len(), "top_by_metric");
    Ok(rows)
}
