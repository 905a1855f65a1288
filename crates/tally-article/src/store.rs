//! Article table operations
//!
//! One table, one `content` column, one row expected. Lifecycle per
//! (database, table) pair: absent -> created -> populated -> queried* ->
//! dropped. `create` has no existence guard; a second create is fatal.

#![allow(clippy::result_large_err)]

use rusqlite::{Connection, OptionalExtension};
use tally_core::Result;
use tally_store::{from_rusqlite, quote_identifier};
use tracing::info;

/// Create the article table; fatal if it already exists
pub fn create_article_table(conn: &Connection, table: &str) -> Result<()> {
    let sql = format!("CREATE TABLE {} (content TEXT)", quote_identifier(table)?);
    conn.execute(&sql, []).map_err(from_rusqlite)?;
    info!(table, "created article table");
    Ok(())
}

/// Insert article content as a new row (no dedup)
pub fn insert_article(conn: &Connection, table: &str, content: &str) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} (content) VALUES (?1)",
        quote_identifier(table)?
    );
    conn.execute(&sql, [content]).map_err(from_rusqlite)?;
    info!(table, bytes = content.len(), "stored article content");
    Ok(())
}

/// Return the first row's content, or None if the table is empty
pub fn first_article(conn: &Connection, table: &str) -> Result<Option<String>> {
    let sql = format!("SELECT content FROM {} LIMIT 1", quote_identifier(table)?);
    conn.query_row(&sql, [], |row| row.get(0))
        .optional()
        .map_err(from_rusqlite)
}

/// Drop the named article table
pub fn drop_article_table(conn: &Connection, table: &str) -> Result<()> {
    let sql = format!("DROP TABLE {}", quote_identifier(table)?);
    conn.execute(&sql, []).map_err(from_rusqlite)?;
    info!(table, "dropped article table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TallyError;
    use tally_store::db::open_in_memory;

    #[test]
    fn test_create_populate_query_drop_lifecycle() {
        let conn = open_in_memory().unwrap();

        create_article_table(&conn, "wiki").unwrap();
        assert_eq!(first_article(&conn, "wiki").unwrap(), None);

        insert_article(&conn, "wiki", "Cats are small carnivores.").unwrap();
        assert_eq!(
            first_article(&conn, "wiki").unwrap().as_deref(),
            Some("Cats are small carnivores.")
        );

        drop_article_table(&conn, "wiki").unwrap();
        assert!(first_article(&conn, "wiki").is_err());
    }

    #[test]
    fn test_create_on_existing_table_is_fatal() {
        let conn = open_in_memory().unwrap();
        create_article_table(&conn, "wiki").unwrap();

        let second = create_article_table(&conn, "wiki");
        assert!(matches!(second, Err(TallyError::Sqlite { .. })));
    }

    #[test]
    fn test_query_returns_first_row_only() {
        let conn = open_in_memory().unwrap();
        create_article_table(&conn, "wiki").unwrap();
        insert_article(&conn, "wiki", "first").unwrap();
        insert_article(&conn, "wiki", "second").unwrap();

        assert_eq!(first_article(&conn, "wiki").unwrap().as_deref(), Some("first"));
    }

    #[test]
    fn test_drop_targets_the_named_table() {
        let conn = open_in_memory().unwrap();
        create_article_table(&conn, "wiki").unwrap();
        create_article_table(&conn, "other").unwrap();

        drop_article_table(&conn, "wiki").unwrap();

        assert!(first_article(&conn, "wiki").is_err());
        assert!(first_article(&conn, "other").is_ok());
    }

    #[test]
    fn test_table_names_are_validated() {
        let conn = open_in_memory().unwrap();
        let result = create_article_table(&conn, "wiki; DROP TABLE wiki");
        assert!(matches!(result, Err(TallyError::InvalidIdentifier { .. })));
    }
}
