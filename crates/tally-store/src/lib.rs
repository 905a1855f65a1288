//! Tally Store - SQLite access for the Tally command-line tools
//!
//! Connection management, SQL identifier hygiene, and the read-only
//! query layer over an ingested reports database.

pub mod db;
pub mod errors;
pub mod ident;
pub mod query;

pub use errors::from_rusqlite;
pub use ident::{quote_identifier, validate_identifier};
pub use query::{schema_statements, top_by_metric, TableSchema};
