//! Application configuration structures.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Supported ATS platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Greenhouse,
    Lever,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Greenhouse => "greenhouse",
            Platform::Lever => "lever",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "greenhouse" => Ok(Platform::Greenhouse),
            "lever" => Ok(Platform::Lever),
            other => Err(AppError::config(format!("unknown platform: {other}"))),
        }
    }
}

/// A single company to scrape on a given platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyTarget {
    pub platform: Platform,
    pub identifier: String,
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and scraping behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Company identifiers to scrape, per platform
    #[serde(default)]
    pub targets: Targets,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if self.scraper.max_attempts == 0 {
            return Err(AppError::validation("scraper.max_attempts must be > 0"));
        }
        url::Url::parse(&self.scraper.greenhouse_api_base)
            .map_err(|e| AppError::validation(format!("scraper.greenhouse_api_base: {e}")))?;
        url::Url::parse(&self.scraper.lever_api_base)
            .map_err(|e| AppError::validation(format!("scraper.lever_api_base: {e}")))?;
        if self.targets.is_empty() {
            return Err(AppError::validation("No target companies defined"));
        }
        Ok(())
    }
}

/// HTTP client and scraping behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Per-attempt request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Total attempts per request (first try included)
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: u32,

    /// Base backoff delay between retries in milliseconds
    #[serde(default = "defaults::backoff_base")]
    pub backoff_base_ms: u64,

    /// Delay between company scrapes in seconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_secs: u64,

    /// Greenhouse board API base URL
    #[serde(default = "defaults::greenhouse_api_base")]
    pub greenhouse_api_base: String,

    /// Lever postings API base URL
    #[serde(default = "defaults::lever_api_base")]
    pub lever_api_base: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_attempts: defaults::max_attempts(),
            backoff_base_ms: defaults::backoff_base(),
            request_delay_secs: defaults::request_delay(),
            greenhouse_api_base: defaults::greenhouse_api_base(),
            lever_api_base: defaults::lever_api_base(),
        }
    }
}

/// Ordered company identifiers per platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Targets {
    #[serde(default)]
    pub greenhouse: Vec<String>,

    #[serde(default)]
    pub lever: Vec<String>,
}

impl Targets {
    pub fn is_empty(&self) -> bool {
        self.greenhouse.is_empty() && self.lever.is_empty()
    }

    /// Flatten into an ordered target list, Greenhouse first.
    pub fn company_targets(&self) -> Vec<CompanyTarget> {
        let greenhouse = self.greenhouse.iter().map(|id| CompanyTarget {
            platform: Platform::Greenhouse,
            identifier: id.clone(),
        });
        let lever = self.lever.iter().map(|id| CompanyTarget {
            platform: Platform::Lever,
            identifier: id.clone(),
        });
        greenhouse.chain(lever).collect()
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "jobscraper/1.0 (+https://github.com/jobscraper/jobscraper)".into()
    }
    pub fn timeout() -> u64 {
        20
    }
    pub fn max_attempts() -> u32 {
        3
    }
    pub fn backoff_base() -> u64 {
        500
    }
    pub fn request_delay() -> u64 {
        2
    }
    pub fn greenhouse_api_base() -> String {
        "https://api.greenhouse.io/v1/boards".into()
    }
    pub fn lever_api_base() -> String {
        "https://api.lever.co/v0/postings".into()
    }
}
