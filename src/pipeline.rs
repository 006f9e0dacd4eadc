//! The four-phase digest pipeline.
//!
//! Phases run strictly in sequence with no backward transitions:
//!
//! 1. **Listing**: scan every configured category page and collect
//!    deduplicated article stubs
//! 2. **Detail**: visit each stub's article page, one request in flight at
//!    a time, and keep the articles dated at or after the cutoff
//! 3. **Filter/sort**: stable-sort the kept articles newest-first
//! 4. **Done**: hand the sorted list back to the caller for rendering
//!
//! Every per-item failure (one listing page, one article page, one date
//! string) is logged with its URL and converted into "skip this item"; the
//! run itself never aborts on fetch or parse trouble.

use crate::config::DigestConfig;
use crate::fetch::{self, build_client};
use crate::models::{Article, ArticleStub};
use crate::scrape::{article, listing};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::collections::HashSet;
use std::error::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Drives one digest run against an immutable configuration.
pub struct Pipeline {
    config: DigestConfig,
    base_url: Url,
    client: Client,
}

impl Pipeline {
    /// Validate the configured base URL and build the shared HTTP client.
    pub fn new(config: DigestConfig) -> Result<Self, Box<dyn Error>> {
        let base_url = Url::parse(&config.base_url)?;
        let client = build_client(&config)?;
        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Run all phases and return the filtered articles, newest first.
    #[instrument(level = "info", skip_all)]
    pub async fn run(&self) -> Vec<Article> {
        let stubs = self.collect_stubs().await;
        info!(count = stubs.len(), "Total unique article links to check");

        let mut articles = self.resolve_articles(stubs).await;
        info!(count = articles.len(), "Articles matching the date criteria");

        sort_newest_first(&mut articles);
        articles
    }

    /// Listing phase: scan each category page in configured order.
    ///
    /// A category whose listing fetch fails contributes zero stubs; the
    /// scan continues with the next category. The seen-link set spans the
    /// whole phase, so a link shared between categories is attributed to
    /// whichever scan reaches it first.
    async fn collect_stubs(&self) -> Vec<ArticleStub> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut stubs = Vec::new();

        for category in &self.config.categories {
            info!(category = %category.name, url = %category.url, "Processing category listing");
            let html = match fetch::fetch_page(&self.client, &category.url, self.config.listing_timeout())
                .await
            {
                Ok(html) => html,
                Err(e) => {
                    error!(
                        category = %category.name,
                        url = %category.url,
                        error = %e,
                        "Failed to fetch listing page; skipping category"
                    );
                    continue;
                }
            };
            let found = listing::extract_article_links(&html, &self.base_url, &mut seen);
            info!(category = %category.name, count = found.len(), "New article links in category");
            stubs.extend(found);
        }
        stubs
    }

    /// Detail phase: visit each article page sequentially.
    ///
    /// One request is in flight at a time, with the configured polite
    /// delay after every stub regardless of outcome.
    async fn resolve_articles(&self, stubs: Vec<ArticleStub>) -> Vec<Article> {
        let total = stubs.len();
        let delay = self.config.fetch_delay();

        stream::iter(stubs.into_iter().enumerate())
            .then(|(index, stub)| async move {
                info!(current = index + 1, total, url = %stub.link, "Checking article");
                let kept = self.resolve_one(&stub).await;
                sleep(delay).await;
                kept
            })
            .filter_map(std::future::ready)
            .collect()
            .await
    }

    /// Fetch one article page and keep it only when its byline timestamp
    /// is present and at or after the cutoff.
    async fn resolve_one(&self, stub: &ArticleStub) -> Option<Article> {
        let html = match fetch::fetch_page(&self.client, &stub.link, self.config.article_timeout())
            .await
        {
            Ok(html) => html,
            Err(e) => {
                error!(url = %stub.link, title = %stub.title, error = %e, "Failed to fetch article; skipping");
                return None;
            }
        };

        let Some(date) = article::extract_publication_date(&html) else {
            info!(title = %stub.title, "Date tag not found in byline; skipping");
            return None;
        };

        if date < self.config.cutoff {
            debug!(title = %stub.title, date = %date.date_naive(), "Too old; skipping");
            return None;
        }

        info!(title = %stub.title, date = %date.date_naive(), "Adding article");
        Some(Article {
            title: stub.title.clone(),
            link: stub.link.clone(),
            date,
        })
    }
}

/// Stable sort by publication date, newest first. Articles sharing a date
/// keep their detail-phase emission order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}
