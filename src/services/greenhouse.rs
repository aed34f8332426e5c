// src/services/greenhouse.rs

//! Greenhouse job board adapter.
//!
//! Greenhouse exposes a public board API returning a JSON object with a
//! `jobs` array: `GET {base}/{company}/jobs?content=true`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::classify;
use crate::error::{AppError, Result};
use crate::fetch::Fetcher;
use crate::models::{Job, Platform};
use crate::services::PostingSource;
use crate::utils::title_case;

/// Wire shape of a single Greenhouse posting.
#[derive(Debug, Deserialize)]
struct GreenhouseJob {
    #[serde(default)]
    title: String,

    #[serde(default)]
    absolute_url: String,

    #[serde(default)]
    location: GreenhouseLocation,

    #[serde(default)]
    department: GreenhouseDepartment,
}

#[derive(Debug, Default, Deserialize)]
struct GreenhouseLocation {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct GreenhouseDepartment {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct GreenhouseResponse {
    #[serde(default)]
    jobs: Vec<GreenhouseJob>,
}

/// Adapter for the Greenhouse board API.
pub struct GreenhouseSource {
    fetcher: Fetcher,
    api_base: String,
}

impl GreenhouseSource {
    /// Create an adapter against an API base like
    /// `https://api.greenhouse.io/v1/boards`.
    pub fn new(fetcher: Fetcher, api_base: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_base: api_base.into(),
        }
    }

    fn board_url(&self, company: &str) -> String {
        format!(
            "{}/{}/jobs?content=true",
            self.api_base.trim_end_matches('/'),
            company
        )
    }
}

#[async_trait]
impl PostingSource for GreenhouseSource {
    fn platform(&self) -> Platform {
        Platform::Greenhouse
    }

    async fn scrape(&self, company: &str) -> Result<Vec<Job>> {
        let url = self.board_url(company);
        let resp = self.fetcher.get(&url).await?;
        if !resp.is_success() {
            return Err(AppError::status(url, resp.status));
        }

        let parsed: GreenhouseResponse = serde_json::from_slice(&resp.body)?;
        let company_name = title_case(company);

        let jobs = parsed
            .jobs
            .into_iter()
            .filter(|j| classify::is_relevant(&j.title, &j.location.name))
            .map(|j| Job {
                title: j.title,
                company: company_name.clone(),
                location: j.location.name,
                job_type: j.department.name,
                url: j.absolute_url,
            })
            .collect();

        Ok(jobs)
    }
}
