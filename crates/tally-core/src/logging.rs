//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No subscriber output (tests install their own capture if needed)
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Every crate (and binary) that emits tracing events
///
/// Filter directives match module-path targets exactly, so each one has to
/// be listed; a bare `tally=...` directive would match nothing.
const TALLY_TARGETS: &[&str] = &[
    "tally_core",
    "tally_store",
    "tally_ingest",
    "tally_article",
    "tally_reports",
    "tally_wiki",
];

fn default_directives(level: &str) -> String {
    TALLY_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(default_directives(level))
}

/// Initialize the logging facility
///
/// Called once at binary startup; later calls are no-ops. The filter honors
/// `RUST_LOG`, falling back to a tally-scoped default per profile.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| default_filter("debug")),
                    )
                    .with_writer(std::io::stderr)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| default_filter("info")),
                    )
                    .with_writer(std::io::stderr)
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
