//! Pipeline entry points for scraper operations.
//!
//! - `run_ingest`: Scrape configured companies and persist matching jobs

pub mod ingest;

pub use ingest::{IngestOutcome, PlatformSource, PlatformStats, build_sources, run_ingest};
