//! # Headline Digest
//!
//! A batch crawler that collects recent headlines from Mashable SEA and
//! publishes them as a single static HTML page.
//!
//! ## Pipeline
//!
//! 1. **Listing**: scrape each configured category page for article links
//!    (deduplicated across categories)
//! 2. **Detail**: visit each article sequentially and read its byline
//!    publication timestamp
//! 3. **Filter/sort**: drop articles older than the cutoff, sort the rest
//!    newest-first
//! 4. **Render**: write the result as a styled HTML digest
//!
//! ## Usage
//!
//! ```sh
//! headline_digest -o mashable_headlines.html
//! ```
//!
//! Recoverable failures (one listing page, one article page, one malformed
//! date) are logged and skipped; only configuration problems and an
//! unwritable output file end the run with an error.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod outputs;
mod pipeline;
mod scrape;

use cli::Cli;
use config::DigestConfig;
use pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_digest starting up");

    let args = Cli::parse();
    debug!(?args.output, ?args.config, "Parsed CLI arguments");

    let config = match DigestConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(path = ?args.config, error = %e, "Failed to load configuration");
            return Err(e);
        }
    };
    info!(
        categories = config.categories.len(),
        cutoff = %config.cutoff,
        "Configuration ready"
    );

    let cutoff = config.cutoff;
    let pipeline = Pipeline::new(config)?;
    let articles = pipeline.run().await;

    let html = outputs::html::render_digest(&articles, cutoff);

    if let Err(e) = outputs::html::write_digest(&args.output, &html).await {
        error!(path = %args.output, error = %e, "Could not write HTML file");
        return Err(e.into());
    }
    info!(path = %args.output, count = articles.len(), "Successfully created HTML digest");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
