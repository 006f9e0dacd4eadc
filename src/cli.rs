//! Command-line interface definitions for Headline Digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the Headline Digest application.
///
/// # Examples
///
/// ```sh
/// # Default run against Mashable SEA
/// headline_digest
///
/// # Custom output file
/// headline_digest -o digest.html
///
/// # Override the built-in site configuration
/// headline_digest --config site.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output path for the rendered HTML digest
    #[arg(short, long, default_value = "mashable_headlines.html")]
    pub output: String,

    /// Optional YAML file overriding the built-in site configuration
    #[arg(short, long)]
    pub config: Option<String>,
}
