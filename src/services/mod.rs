//! Platform adapters for ATS job boards.
//!
//! Each adapter fetches a company's public postings endpoint, parses the
//! platform-specific JSON shape and emits normalized, classifier-filtered
//! [`Job`](crate::models::Job) values. New platforms implement
//! [`PostingSource`]; the ingestion pipeline is agnostic to the concrete
//! adapter behind it.

mod greenhouse;
mod lever;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Job, Platform};

pub use greenhouse::GreenhouseSource;
pub use lever::LeverSource;

/// A source of normalized job postings for one ATS platform.
#[async_trait]
pub trait PostingSource: Send + Sync {
    /// The platform this source scrapes.
    fn platform(&self) -> Platform;

    /// Fetch, parse and filter postings for a company identifier.
    ///
    /// An empty result is valid (nothing matched the filters); errors mean
    /// the fetch failed, the final status was non-2xx, or the response
    /// body did not parse.
    async fn scrape(&self, company: &str) -> Result<Vec<Job>>;
}
