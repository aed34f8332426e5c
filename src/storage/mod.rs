//! Storage abstractions for job persistence.
//!
//! The ingestion pipeline only depends on the [`JobStore`] trait; the
//! bundled [`LocalJobStore`] keeps a JSON snapshot on disk. Uniqueness is
//! enforced on the canonical posting URL: inserting an already-seen URL
//! is a no-op, not an error.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Job, JobFilter, StoredJob};

// Re-export for convenience
pub use local::LocalJobStore;

/// Trait for job storage backends.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a job unless its URL is already present.
    ///
    /// Returns `true` iff a new row was written. A duplicate URL returns
    /// `Ok(false)`.
    async fn insert_if_absent(&self, job: &Job) -> Result<bool>;

    /// List stored jobs matching a filter, newest first.
    ///
    /// `page` is 1-based.
    async fn list_jobs(
        &self,
        filter: &JobFilter,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<StoredJob>>;
}
