//! Import pipeline
//!
//! Sequences discovery, normalization, loading and coercion as one batch job.

#![allow(clippy::result_large_err)]

use crate::coerce::coerce_money_columns;
use crate::discovery::discover_csv_files;
use crate::loader::load_table;
use crate::normalize::read_reports;
use rusqlite::Connection;
use std::path::Path;
use tally_core::Result;
use tracing::info;

/// What an import did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub files: usize,
    pub rows: usize,
}

/// Run the whole ingestion batch: discover, normalize, load, coerce
pub fn import_reports(
    conn: &mut Connection,
    reports_dir: &Path,
    table: &str,
    money_columns: &[&str],
) -> Result<ImportSummary> {
    let files = discover_csv_files(reports_dir)?;
    let batch = read_reports(&files)?;
    let rows = load_table(conn, table, &batch)?;
    coerce_money_columns(conn, table, money_columns)?;

    let summary = ImportSummary {
        files: files.len(),
        rows,
    };
    info!(
        dir = %reports_dir.display(),
        table,
        files = summary.files,
        rows = summary.rows,
        "import complete"
    );
    Ok(summary)
}
