//! Local filesystem storage implementation.
//!
//! Keeps all rows in memory behind a mutex and writes the full snapshot
//! to a JSON file on every insert (write to temp, then rename). Suitable
//! for a single writer; the dashboard and exporters read the same file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::{Job, JobFilter, StoredJob};
use crate::storage::JobStore;

/// On-disk snapshot format.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    next_id: u64,
    jobs: Vec<StoredJob>,
}

struct Inner {
    next_id: u64,
    jobs: Vec<StoredJob>,
    seen_urls: HashSet<String>,
}

/// JSON file-backed job store.
pub struct LocalJobStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl LocalJobStore {
    /// Open a store at the given file path, loading any existing snapshot.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = Self::load_snapshot(&path).await?;

        let seen_urls = snapshot.jobs.iter().map(|j| j.url.clone()).collect();
        Ok(Self {
            path,
            inner: Mutex::new(Inner {
                next_id: snapshot.next_id.max(1),
                jobs: snapshot.jobs,
                seen_urls,
            }),
        })
    }

    async fn load_snapshot(path: &Path) -> Result<Snapshot> {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| AppError::store(format!(
                    "corrupt snapshot at {}: {}",
                    path.display(),
                    e
                )))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(AppError::store(e)),
        }
    }

    /// Write the snapshot atomically (write to temp, then rename).
    async fn persist(&self, inner: &Inner) -> Result<()> {
        let snapshot = Snapshot {
            next_id: inner.next_id,
            jobs: inner.jobs.clone(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(AppError::store)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::store)?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await.map_err(AppError::store)?;
        file.write_all(&bytes).await.map_err(AppError::store)?;
        file.flush().await.map_err(AppError::store)?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(AppError::store)?;
        Ok(())
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.jobs.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl JobStore for LocalJobStore {
    async fn insert_if_absent(&self, job: &Job) -> Result<bool> {
        let mut inner = self.inner.lock().await;
        if inner.seen_urls.contains(&job.url) {
            return Ok(false);
        }

        let id = inner.next_id;
        inner.next_id += 1;
        inner.jobs.push(StoredJob::from_job(id, job));
        inner.seen_urls.insert(job.url.clone());

        self.persist(&inner).await?;
        Ok(true)
    }

    async fn list_jobs(
        &self,
        filter: &JobFilter,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<StoredJob>> {
        let inner = self.inner.lock().await;
        let offset = page.saturating_sub(1) * page_size;

        let jobs = inner
            .jobs
            .iter()
            .rev()
            .filter(|j| filter.matches(j))
            .skip(offset)
            .take(page_size)
            .cloned()
            .collect();
        Ok(jobs)
    }
}
