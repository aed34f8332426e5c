// src/services/lever.rs

//! Lever job board adapter.
//!
//! Lever's postings API returns a bare JSON array:
//! `GET {base}/{company}?mode=json`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::classify;
use crate::error::{AppError, Result};
use crate::fetch::Fetcher;
use crate::models::{Job, Platform};
use crate::services::PostingSource;
use crate::utils::title_case;

/// Wire shape of a single Lever posting.
#[derive(Debug, Deserialize)]
struct LeverJob {
    /// Job title
    #[serde(default)]
    text: String,

    /// Job posting URL
    #[serde(default, rename = "hostedUrl")]
    hosted_url: String,

    #[serde(default)]
    categories: LeverCategories,
}

#[derive(Debug, Default, Deserialize)]
struct LeverCategories {
    #[serde(default)]
    location: String,

    #[serde(default)]
    team: String,
}

/// Adapter for the Lever postings API.
pub struct LeverSource {
    fetcher: Fetcher,
    api_base: String,
}

impl LeverSource {
    /// Create an adapter against an API base like
    /// `https://api.lever.co/v0/postings`.
    pub fn new(fetcher: Fetcher, api_base: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_base: api_base.into(),
        }
    }

    fn postings_url(&self, company: &str) -> String {
        format!(
            "{}/{}?mode=json",
            self.api_base.trim_end_matches('/'),
            company
        )
    }
}

#[async_trait]
impl PostingSource for LeverSource {
    fn platform(&self) -> Platform {
        Platform::Lever
    }

    async fn scrape(&self, company: &str) -> Result<Vec<Job>> {
        let url = self.postings_url(company);
        let resp = self.fetcher.get(&url).await?;
        if !resp.is_success() {
            return Err(AppError::status(url, resp.status));
        }

        let postings: Vec<LeverJob> = serde_json::from_slice(&resp.body)?;
        let company_name = title_case(company);

        let jobs = postings
            .into_iter()
            .filter(|p| classify::is_relevant(&p.text, &p.categories.location))
            .map(|p| Job {
                title: p.text,
                company: company_name.clone(),
                location: p.categories.location,
                job_type: p.categories.team,
                url: p.hosted_url,
            })
            .collect();

        Ok(jobs)
    }
}
