//! Article content fetch
//!
//! Talks to the MediaWiki action API and returns one page's plain-text
//! extract. Blocking, no timeout beyond the client default, no retry; a
//! slow network stalls the whole invocation.

#![allow(clippy::result_large_err)]

use serde_json::Value;
use tally_core::{Result, TallyError};
use tracing::debug;

/// Default API endpoint (English Wikipedia)
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Blocking client for fetching article extracts
pub struct ArticleClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl ArticleClient {
    /// Client against the default endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client against a custom endpoint (used by tests)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the plain-text extract of the page titled `title`
    pub fn fetch_extract(&self, title: &str) -> Result<String> {
        let fetch_failed = |reason: String| TallyError::FetchFailed {
            title: title.to_string(),
            reason,
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("titles", title),
            ])
            .send()
            .map_err(|e| fetch_failed(e.to_string()))?
            .error_for_status()
            .map_err(|e| fetch_failed(e.to_string()))?;

        let body: Value = response.json().map_err(|e| fetch_failed(e.to_string()))?;
        let extract = extract_from_response(&body, title)?;
        debug!(title, bytes = extract.len(), "fetched article extract");
        Ok(extract)
    }
}

impl Default for ArticleClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the extract text out of an action-API query response
///
/// `query.pages` maps page ids to page objects; a missing page carries a
/// `missing` marker or pageid -1 instead of an `extract`.
pub fn extract_from_response(body: &Value, title: &str) -> Result<String> {
    let pages = body["query"]["pages"].as_object().ok_or_else(|| {
        TallyError::FetchFailed {
            title: title.to_string(),
            reason: "malformed response: missing query.pages".to_string(),
        }
    })?;

    let missing = || TallyError::ArticleMissing {
        title: title.to_string(),
    };

    let page = pages.values().next().ok_or_else(missing)?;
    if page.get("missing").is_some() || page["pageid"].as_i64() == Some(-1) {
        return Err(missing());
    }

    page["extract"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(missing)
}
