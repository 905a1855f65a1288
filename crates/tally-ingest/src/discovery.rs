//! File discovery
//!
//! Lists the CSV files of a reports directory, non-recursively. A missing or
//! unreadable directory is an explicit error rather than an empty result, so
//! a typoed `--reports` path fails loudly instead of importing nothing.

#![allow(clippy::result_large_err)]

use std::fs;
use std::path::{Path, PathBuf};
use tally_core::{Result, TallyError};
use tracing::debug;

/// List the CSV files directly inside `dir`, sorted by path
///
/// Sorting makes "the first discovered file" (which supplies the header)
/// deterministic across filesystems.
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let unreadable = |reason: String| TallyError::ReportsDirUnreadable {
        path: dir.display().to_string(),
        reason,
    };

    let entries = fs::read_dir(dir).map_err(|e| unreadable(e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| unreadable(e.to_string()))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();

    debug!(dir = %dir.display(), count = files.len(), "discovered csv files");
    Ok(files)
}
