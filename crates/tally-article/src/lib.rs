//! Tally Article - single-row article storage backed by Wikipedia
//!
//! Fetches one article's plain-text extract from the MediaWiki API and
//! stores, retrieves or drops it in a SQLite table of the caller's choosing.

pub mod fetch;
pub mod store;

pub use fetch::ArticleClient;
pub use store::{create_article_table, drop_article_table, first_article, insert_article};
