//! Run configuration for the digest pipeline.
//!
//! The pipeline takes an explicit, immutable [`DigestConfig`] at
//! construction rather than reading process-wide globals, so it can be
//! pointed at a mock server in tests. The compiled-in defaults target
//! Mashable SEA; operators can override any subset of fields with a YAML
//! file passed via `--config`.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// Browser identity sent with every request. The site serves an error page
/// to default client user agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// A named category listing page to crawl.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Display name used in progress logs.
    pub name: String,
    /// Absolute URL of the category's listing page.
    pub url: String,
}

/// Immutable configuration for one digest run.
///
/// `Default` carries the production constants; [`DigestConfig::load`]
/// layers a YAML file over them. Categories are an ordered list; the
/// pipeline scans them in the order given here, which also fixes which
/// category a duplicated link is attributed to (first scan wins).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Base URL that relative listing hrefs are resolved against.
    pub base_url: String,
    /// Category listing pages, scanned in order.
    pub categories: Vec<Category>,
    /// Earliest publication timestamp kept in the digest.
    pub cutoff: DateTime<Utc>,
    /// `User-Agent` header value sent with every request.
    pub user_agent: String,
    /// Per-request timeout for category listing pages, in seconds.
    pub listing_timeout_secs: u64,
    /// Per-request timeout for article pages, in seconds.
    pub article_timeout_secs: u64,
    /// Polite delay between successive article fetches, in milliseconds.
    pub fetch_delay_ms: u64,
}

impl Default for DigestConfig {
    fn default() -> Self {
        let category = |name: &str, path: &str| Category {
            name: name.to_string(),
            url: format!("https://sea.mashable.com/{path}/"),
        };
        Self {
            base_url: "https://sea.mashable.com/".to_string(),
            categories: vec![
                category("Tech", "tech"),
                category("Life", "life"),
                category("Science", "science"),
                category("Entertainment", "entertainment"),
                category("Social Good", "social-good"),
            ],
            cutoff: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            user_agent: USER_AGENT.to_string(),
            listing_timeout_secs: 20,
            article_timeout_secs: 25,
            fetch_delay_ms: 500,
        }
    }
}

impl DigestConfig {
    /// Load configuration, layering an optional YAML file over the defaults.
    ///
    /// A missing key in the file keeps its default value. An unreadable
    /// file or invalid YAML is a startup error, not a per-item one.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                let config: DigestConfig = serde_yaml::from_str(&raw)?;
                info!(path, categories = config.categories.len(), "Loaded configuration file");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Per-request timeout for category listing pages.
    pub fn listing_timeout(&self) -> Duration {
        Duration::from_secs(self.listing_timeout_secs)
    }

    /// Per-request timeout for article pages.
    pub fn article_timeout(&self) -> Duration {
        Duration::from_secs(self.article_timeout_secs)
    }

    /// Polite delay between successive article fetches.
    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}
