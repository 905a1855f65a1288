//! CSV normalization
//!
//! Turns the discovered files into one authoritative header plus a single
//! concatenated row stream. The header comes from the first row of the first
//! file; spaces become underscores so the tokens work as column names. Every
//! later file must carry the same header, which is consumed rather than
//! emitted as data; a disagreement is fatal.

#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};
use tally_core::{Result, TallyError};
use tracing::debug;

/// A normalized batch of report rows: one header, rows in file-then-row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvBatch {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Normalize one header token: strip a leading UTF-8 BOM, spaces to underscores
pub fn normalize_header_token(token: &str) -> String {
    token.trim_start_matches('\u{feff}').replace(' ', "_")
}

fn csv_error(path: &Path, err: csv::Error) -> TallyError {
    TallyError::Csv {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Read and concatenate the given CSV files into a single batch
pub fn read_reports(files: &[PathBuf]) -> Result<CsvBatch> {
    if files.is_empty() {
        return Err(TallyError::NoReports);
    }

    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();

    for path in files {
        // flexible: ragged rows are caught at load time, with a row number
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| csv_error(path, e))?;

        let file_header: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error(path, e))?
            .iter()
            .map(normalize_header_token)
            .collect();

        if file_header.is_empty() || file_header.iter().all(String::is_empty) {
            return Err(TallyError::EmptyCsv {
                path: path.display().to_string(),
            });
        }

        match &header {
            None => header = Some(file_header),
            Some(expected) => {
                if *expected != file_header {
                    return Err(TallyError::HeaderMismatch {
                        path: path.display().to_string(),
                        expected: expected.join(", "),
                        found: file_header.join(", "),
                    });
                }
            }
        }

        let mut file_rows = 0usize;
        for record in reader.records() {
            let record = record.map_err(|e| csv_error(path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
            file_rows += 1;
        }
        debug!(path = %path.display(), rows = file_rows, "normalized csv file");
    }

    // header is Some: files was non-empty and every file either set it or matched it
    let header = header.ok_or(TallyError::NoReports)?;
    Ok(CsvBatch { header, rows })
}
