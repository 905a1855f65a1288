//! SQL identifier hygiene
//!
//! Table and column names come from user input (CLI arguments, CSV headers)
//! and are interpolated into DDL, so they must be validated before use.
//! Row values never go through here; those are always parameter-bound.

#![allow(clippy::result_large_err)]

use tally_core::{Result, TallyError};

/// Validate a table or column name
///
/// Accepts ASCII letters, digits and underscore, not starting with a digit.
pub fn validate_identifier(name: &str) -> Result<&str> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(name)
    } else {
        Err(TallyError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

/// Validate and double-quote an identifier for interpolation into SQL
pub fn quote_identifier(name: &str) -> Result<String> {
    validate_identifier(name).map(|n| format!("\"{}\"", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate_identifier("data").is_ok());
        assert!(validate_identifier("Commission_Earned").is_ok());
        assert!(validate_identifier("_private").is_ok());
        assert!(validate_identifier("t2").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_leading_digit() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("2fast").is_err());
    }

    #[test]
    fn test_rejects_injection_attempts() {
        assert!(validate_identifier("data; DROP TABLE data").is_err());
        assert!(validate_identifier("data\"").is_err());
        assert!(validate_identifier("a b").is_err());
    }

    #[test]
    fn test_quote_wraps_in_double_quotes() {
        assert_eq!(quote_identifier("wiki").unwrap(), "\"wiki\"");
    }
}
