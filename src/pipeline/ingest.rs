// src/pipeline/ingest.rs

//! Job ingestion pipeline.
//!
//! Iterates configured companies per platform, scrapes each through its
//! adapter, and forwards results to the store's dedup-insert. A single
//! company's failure is logged and skipped; only store failures abort
//! the run.

use std::time::Duration;

use crate::error::Result;
use crate::fetch::Fetcher;
use crate::models::{Config, Platform};
use crate::services::{GreenhouseSource, LeverSource, PostingSource};
use crate::storage::JobStore;

/// One platform adapter paired with its ordered company targets.
pub struct PlatformSource {
    pub source: Box<dyn PostingSource>,
    pub companies: Vec<String>,
}

/// Per-platform ingestion counters.
#[derive(Debug, Clone)]
pub struct PlatformStats {
    pub platform: Platform,
    /// Companies attempted
    pub companies: usize,
    /// Rows actually inserted (duplicates are not counted)
    pub jobs_inserted: usize,
    /// Companies whose scrape failed
    pub failures: usize,
}

/// Aggregate result of an ingestion run.
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub platforms: Vec<PlatformStats>,
}

impl IngestOutcome {
    pub fn total_inserted(&self) -> usize {
        self.platforms.iter().map(|p| p.jobs_inserted).sum()
    }

    pub fn total_failures(&self) -> usize {
        self.platforms.iter().map(|p| p.failures).sum()
    }
}

/// Build platform sources for every platform with at least one target.
pub fn build_sources(config: &Config) -> Result<Vec<PlatformSource>> {
    let fetcher = Fetcher::from_config(&config.scraper)?;
    let mut sources = Vec::new();

    if !config.targets.greenhouse.is_empty() {
        sources.push(PlatformSource {
            source: Box::new(GreenhouseSource::new(
                fetcher.clone(),
                config.scraper.greenhouse_api_base.clone(),
            )),
            companies: config.targets.greenhouse.clone(),
        });
    }

    if !config.targets.lever.is_empty() {
        sources.push(PlatformSource {
            source: Box::new(LeverSource::new(
                fetcher.clone(),
                config.scraper.lever_api_base.clone(),
            )),
            companies: config.targets.lever.clone(),
        });
    }

    Ok(sources)
}

/// Run the ingestion pipeline over all configured platforms.
///
/// Companies are scraped sequentially in configured order with a fixed
/// delay after every attempt, success or failure. Store errors propagate;
/// everything scoped to a single company is logged and skipped.
pub async fn run_ingest(
    config: &Config,
    sources: &[PlatformSource],
    store: &dyn JobStore,
) -> Result<IngestOutcome> {
    let delay = Duration::from_secs(config.scraper.request_delay_secs);
    let mut outcome = IngestOutcome::default();

    for platform_source in sources {
        let platform = platform_source.source.platform();
        let total = platform_source.companies.len();
        log::info!("Found {} {} companies to scrape", total, platform);

        let mut stats = PlatformStats {
            platform,
            companies: total,
            jobs_inserted: 0,
            failures: 0,
        };

        for (i, company) in platform_source.companies.iter().enumerate() {
            log::info!("[{}/{}] scraping {}", i + 1, total, company);

            match platform_source.source.scrape(company).await {
                Ok(jobs) => {
                    for job in &jobs {
                        if store.insert_if_absent(job).await? {
                            stats.jobs_inserted += 1;
                        }
                    }
                }
                Err(e) => {
                    stats.failures += 1;
                    log::warn!("error scraping {}: {}", company, e);
                }
            }

            // Be respectful to the API host.
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        log::info!(
            "Processed {} {} jobs ({} companies, {} failed)",
            stats.jobs_inserted,
            platform,
            stats.companies,
            stats.failures
        );
        outcome.platforms.push(stats);
    }

    Ok(outcome)
}
