//! Job posting data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default application status assigned by the store on insert.
pub const DEFAULT_STATUS: &str = "Not Applied";

/// A normalized job posting produced by a platform adapter.
///
/// Immutable past construction. The `url` is the canonical posting link
/// and the sole uniqueness key for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    /// Raw posting title, unmodified
    pub title: String,

    /// Human-readable company name (title-cased identifier)
    pub company: String,

    /// Raw location string from the source API (may be empty)
    pub location: String,

    /// Department/team/category label from the source API
    pub job_type: String,

    /// Canonical posting URL, the natural key
    pub url: String,
}

/// A job posting as persisted by the store.
///
/// The store assigns `id`, `date_added` and `status`; everything else is
/// the adapter-produced [`Job`] value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredJob {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub url: String,
    pub date_added: DateTime<Utc>,
    pub status: String,
}

impl StoredJob {
    /// Build a stored row from an adapter job with store-assigned fields.
    pub fn from_job(id: u64, job: &Job) -> Self {
        Self {
            id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            url: job.url.clone(),
            date_added: Utc::now(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Search and pagination parameters for listing stored jobs.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Exact status match (e.g. "Not Applied"); empty matches everything
    pub status: String,

    /// Case-insensitive substring match on title or company
    pub search: String,
}

impl JobFilter {
    /// Whether a stored row passes this filter.
    pub fn matches(&self, job: &StoredJob) -> bool {
        if !self.status.is_empty() && job.status != self.status {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            return job.title.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle);
        }
        true
    }
}
