use thiserror::Error;

/// Result type alias using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;

/// Error taxonomy for Tally operations
///
/// Propagation policy is uniform: no local recovery and no retries. Every
/// failure travels up to the CLI entry point, which prints it to stderr and
/// exits non-zero.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TallyError {
    // ===== Discovery / Normalization Errors =====
    /// Reports directory is missing or unreadable
    #[error("Cannot read reports directory {path}: {reason}")]
    ReportsDirUnreadable { path: String, reason: String },

    /// Discovery produced no CSV files, so there is nothing to build a table from
    #[error("No CSV files to ingest")]
    NoReports,

    /// A CSV file had no header row
    #[error("CSV file has no header row: {path}")]
    EmptyCsv { path: String },

    /// A later file's header disagrees with the first file's header
    #[error("Header of {path} does not match the first file: expected [{expected}], found [{found}]")]
    HeaderMismatch {
        path: String,
        expected: String,
        found: String,
    },

    /// CSV parse failure
    #[error("CSV error in {path}: {message}")]
    Csv { path: String, message: String },

    // ===== Load / Coercion Errors =====
    /// A data row does not line up with the header
    #[error("Row {row} has {found} fields, header has {expected}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A table or column name is not a safe SQL identifier
    #[error("Invalid SQL identifier: {name:?}")]
    InvalidIdentifier { name: String },

    /// A money column still holds non-numeric text after stripping formatting
    #[error("Cannot coerce column {column}: {value:?} is not numeric after stripping")]
    CoercionFailed { column: String, value: String },

    // ===== Article Errors =====
    /// The remote encyclopedia has no page under this title
    #[error("Article not found: {title}")]
    ArticleMissing { title: String },

    /// Network or decode failure talking to the article API
    #[error("Article fetch failed for {title:?}: {reason}")]
    FetchFailed { title: String, reason: String },

    /// The article table exists but holds no rows
    #[error("No content stored in table {table}")]
    NoContent { table: String },

    // ===== Integration Errors =====
    /// SQLite failure (includes table-already-exists on create)
    #[error("SQLite error: {message}")]
    Sqlite { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_mismatch_display_names_both_headers() {
        let err = TallyError::HeaderMismatch {
            path: "b.csv".to_string(),
            expected: "Title, Commission_Earned".to_string(),
            found: "Name, Commission_Earned".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("b.csv"));
        assert!(rendered.contains("Title, Commission_Earned"));
        assert!(rendered.contains("Name, Commission_Earned"));
    }

    #[test]
    fn test_field_count_mismatch_display() {
        let err = TallyError::FieldCountMismatch {
            row: 3,
            expected: 2,
            found: 5,
        };
        assert_eq!(err.to_string(), "Row 3 has 5 fields, header has 2");
    }

    #[test]
    fn test_invalid_identifier_is_quoted() {
        let err = TallyError::InvalidIdentifier {
            name: "drop table".to_string(),
        };
        assert!(err.to_string().contains("\"drop table\""));
    }
}
