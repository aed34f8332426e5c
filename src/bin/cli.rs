//! Job Scraper CLI
//!
//! Local execution entry point for scraping ATS job boards into the
//! local store.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobscraper::{
    error::Result,
    models::{Config, JobFilter},
    pipeline,
    storage::{JobStore, LocalJobStore},
};

/// jobscraper - early-career job board scraper
#[derive(Parser, Debug)]
#[command(name = "jobscraper", version, about = "ATS job board scraper")]
struct Cli {
    /// Path to data directory containing config and the job store
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape all configured companies and persist matching jobs
    Scrape,

    /// List stored jobs, newest first
    List {
        /// Filter by exact status (e.g. "Not Applied")
        #[arg(long, default_value = "")]
        status: String,

        /// Substring match on title or company
        #[arg(long, default_value = "")]
        search: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = 20)]
        page_size: usize,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.data_dir.join("config.toml");
    let store_path = cli.data_dir.join("jobs.json");

    match cli.command {
        Command::Scrape => {
            log::info!("Starting job scraper");

            let config = Config::load(&config_path)?;
            config.validate()?;
            log::info!("Loaded configuration from {}", config_path.display());

            let store = LocalJobStore::open(&store_path).await?;
            let sources = pipeline::build_sources(&config)?;

            if sources.is_empty() {
                log::warn!("No target companies configured; nothing to scrape");
                return Ok(());
            }

            tokio::select! {
                result = pipeline::run_ingest(&config, &sources, &store) => {
                    let outcome = result?;
                    for stats in &outcome.platforms {
                        log::info!(
                            "{}: {} companies, {} inserted, {} failed",
                            stats.platform,
                            stats.companies,
                            stats.jobs_inserted,
                            stats.failures
                        );
                    }
                    log::info!(
                        "Scrape complete: {} new jobs ({} total in store)",
                        outcome.total_inserted(),
                        store.len().await
                    );
                }
                _ = tokio::signal::ctrl_c() => {
                    log::warn!("Interrupted; stopping scrape. Inserted rows are kept.");
                }
            }
        }

        Command::List {
            status,
            search,
            page,
            page_size,
        } => {
            let store = LocalJobStore::open(&store_path).await?;
            let filter = JobFilter { status, search };
            let jobs = store.list_jobs(&filter, page.max(1), page_size).await?;

            if jobs.is_empty() {
                println!("No jobs found.");
                return Ok(());
            }

            for job in &jobs {
                println!(
                    "#{} [{}] {} @ {} ({}) {}",
                    job.id,
                    job.status,
                    job.title,
                    job.company,
                    job.location,
                    job.url
                );
            }
            println!("Page {} ({} rows)", page.max(1), jobs.len());
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            let config = Config::load(&config_path)?;
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            let targets = config.targets.company_targets();
            log::info!("✓ Config OK ({} target companies)", targets.len());
        }
    }

    Ok(())
}
