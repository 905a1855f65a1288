//! Tally Core - shared foundations for the Tally command-line tools
//!
//! This crate provides the pieces both binaries depend on:
//! - The error taxonomy covering ingestion, querying and the article store
//! - The logging facility (tracing subscriber initialization)

pub mod errors;
pub mod logging;

// Re-export commonly used types
pub use errors::{Result, TallyError};
