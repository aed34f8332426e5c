// src/models/mod.rs

//! Domain models for the scraper application.

mod config;
mod job;

// Re-export all public types
pub use config::{CompanyTarget, Config, Platform, ScraperConfig, Targets};
pub use job::{DEFAULT_STATUS, Job, JobFilter, StoredJob};
