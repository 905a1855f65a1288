//! Tally Ingest - CSV-to-SQLite ingestion
//!
//! The reports pipeline: discover CSV files in a directory, normalize them
//! into one header plus a concatenated row stream, bulk-load the rows into a
//! schema-less table, then coerce the money columns to numbers in place.

pub mod coerce;
pub mod discovery;
pub mod loader;
pub mod normalize;
pub mod pipeline;

pub use coerce::{coerce_money_columns, DEFAULT_MONEY_COLUMNS};
pub use discovery::discover_csv_files;
pub use loader::load_table;
pub use normalize::{read_reports, CsvBatch};
pub use pipeline::{import_reports, ImportSummary};
