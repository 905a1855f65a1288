//! Tally wiki CLI
//!
//! Fetches one Wikipedia article's plain-text extract and stores, prints or
//! drops it in a SQLite table.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tally_article::ArticleClient;
use tally_core::logging::{self, Profile};
use tally_core::{Result, TallyError};

#[derive(Debug, Parser)]
#[command(name = "tally-wiki")]
#[command(about = "Store a Wikipedia article in a SQLite table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch an article and store it in a fresh table
    Ingest(IngestArgs),
    /// Print the stored article content
    Query(QueryArgs),
    /// Drop the article table
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
struct IngestArgs {
    /// Article title to fetch
    #[arg(default_value = "Python (programming language)")]
    title: String,

    /// SQLite database path
    #[arg(default_value = "wiki.db")]
    db: PathBuf,

    /// Table to store the article content in
    #[arg(default_value = "wiki")]
    table: String,
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// SQLite database path
    #[arg(default_value = "wiki.db")]
    db: PathBuf,

    /// Table holding the article content
    #[arg(default_value = "wiki")]
    table: String,
}

#[derive(Debug, Args)]
struct DeleteArgs {
    /// SQLite database path
    #[arg(default_value = "wiki.db")]
    db: PathBuf,

    /// Table to drop
    #[arg(default_value = "wiki")]
    table: String,
}

fn main() {
    logging::init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest(args) => run_ingest(args),
        Commands::Query(args) => run_query(args),
        Commands::Delete(args) => run_delete(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_ingest(args: IngestArgs) -> Result<()> {
    let conn = tally_store::db::open(&args.db)?;
    tally_article::create_article_table(&conn, &args.table)?;

    let client = ArticleClient::new();
    let content = client.fetch_extract(&args.title)?;
    tally_article::insert_article(&conn, &args.table, &content)?;

    println!(
        "Ingested article '{}' into database '{}' table '{}'",
        args.title,
        args.db.display(),
        args.table
    );
    Ok(())
}

fn run_query(args: QueryArgs) -> Result<()> {
    let conn = tally_store::db::open(&args.db)?;
    match tally_article::first_article(&conn, &args.table)? {
        Some(content) => {
            println!("{}", content);
            Ok(())
        }
        None => Err(TallyError::NoContent {
            table: args.table.clone(),
        }),
    }
}

fn run_delete(args: DeleteArgs) -> Result<()> {
    let conn = tally_store::db::open(&args.db)?;
    tally_article::drop_article_table(&conn, &args.table)?;
    println!(
        "Dropped table '{}' from database '{}'",
        args.table,
        args.db.display()
    );
    Ok(())
}
