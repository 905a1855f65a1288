//! Tally reports CLI
//!
//! Ingests a directory of CSV sales reports into a SQLite table and runs
//! the two canned read queries over it.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tally_core::logging::{self, Profile};
use tally_core::Result;
use tally_ingest::DEFAULT_MONEY_COLUMNS;
use tracing::info;

/// Destination table for ingested report rows
const DATA_TABLE: &str = "data";
/// Label/metric columns for the sales query
const LABEL_COLUMN: &str = "Title";
const METRIC_COLUMN: &str = "Commission_Earned";

#[derive(Debug, Parser)]
#[command(name = "tally-reports")]
#[command(about = "Ingest CSV sales reports into SQLite and query them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Ingest every CSV file in the reports directory into the data table
    Import(ImportArgs),
    /// Top rows by commission, highest first
    Sales(SalesArgs),
    /// Print the CREATE TABLE statement of every table
    Schema(SchemaArgs),
    /// Print the normalized CSV rows without importing them
    Printcsv(PrintcsvArgs),
}

#[derive(Debug, Args)]
struct ImportArgs {
    /// SQLite database path
    #[arg(long, default_value = "reports.db")]
    db: PathBuf,

    /// Directory containing CSV report files
    #[arg(long, default_value = "reports")]
    reports: PathBuf,
}

#[derive(Debug, Args)]
struct SalesArgs {
    /// SQLite database path
    #[arg(long, default_value = "reports.db")]
    db: PathBuf,

    /// Maximum number of rows to print
    #[arg(long, default_value_t = 10)]
    limit: u32,
}

#[derive(Debug, Args)]
struct SchemaArgs {
    /// SQLite database path
    #[arg(long, default_value = "reports.db")]
    db: PathBuf,
}

#[derive(Debug, Args)]
struct PrintcsvArgs {
    /// Directory containing CSV report files
    #[arg(long, default_value = "reports")]
    reports: PathBuf,
}

fn main() {
    logging::init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import(args) => run_import(args),
        Commands::Sales(args) => run_sales(args),
        Commands::Schema(args) => run_schema(args),
        Commands::Printcsv(args) => run_printcsv(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_import(args: ImportArgs) -> Result<()> {
    let mut conn = tally_store::db::open(&args.db)?;
    let summary =
        tally_ingest::import_reports(&mut conn, &args.reports, DATA_TABLE, DEFAULT_MONEY_COLUMNS)?;
    println!(
        "Imported {} rows from {} files into table '{}'",
        summary.rows, summary.files, DATA_TABLE
    );
    Ok(())
}

fn run_sales(args: SalesArgs) -> Result<()> {
    let conn = tally_store::db::open(&args.db)?;
    let rows =
        tally_store::top_by_metric(&conn, DATA_TABLE, LABEL_COLUMN, METRIC_COLUMN, args.limit)?;
    for (label, metric) in rows {
        println!("{} - {}", label, format_metric(metric));
    }
    Ok(())
}

fn run_schema(args: SchemaArgs) -> Result<()> {
    let conn = tally_store::db::open(&args.db)?;
    for table in tally_store::schema_statements(&conn)? {
        println!("{}", table.sql);
    }
    Ok(())
}

fn run_printcsv(args: PrintcsvArgs) -> Result<()> {
    let files = tally_ingest::discover_csv_files(&args.reports)?;
    let batch = tally_ingest::read_reports(&files)?;

    println!("{}", batch.header.join(","));
    for row in &batch.rows {
        println!("{}", row.join(","));
    }
    info!(files = files.len(), rows = batch.rows.len(), "printcsv done");
    Ok(())
}

/// Render a metric with at least one decimal digit: 1200 -> "1200.0"
fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
