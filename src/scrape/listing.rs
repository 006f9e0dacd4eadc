//! Article link extraction from category listing pages.
//!
//! Listing pages present each article as a `div.grid-item` preview card
//! whose headline anchor carries the `box_title` class. The anchor's href
//! may be relative and is resolved against the site base URL.

use crate::models::ArticleStub;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

static PREVIEW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.grid-item").unwrap());
static TITLE_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.box_title[href]").unwrap());

/// Extract deduplicated article stubs from a category listing page.
///
/// Walks every preview container in document order. A container without
/// the expected headline anchor is skipped; a link already present in
/// `seen` is skipped; otherwise the resolved URL is added to `seen` and a
/// stub is emitted. `seen` is shared across all categories of a run, so a
/// link appearing on two listing pages is kept once, by whichever scan
/// reaches it first.
pub fn extract_article_links(
    html: &str,
    base_url: &Url,
    seen: &mut HashSet<String>,
) -> Vec<ArticleStub> {
    let document = Html::parse_document(html);
    let containers: Vec<_> = document.select(&PREVIEW_SELECTOR).collect();
    info!(count = containers.len(), "Found potential articles on listing page");

    let mut stubs = Vec::new();
    for container in containers {
        let Some(anchor) = container.select(&TITLE_LINK_SELECTOR).next() else {
            debug!("Preview container without a title anchor; skipping");
            continue;
        };
        // The selector guarantees href is present
        let href = anchor.value().attr("href").unwrap_or_default();
        let link = match base_url.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(e) => {
                warn!(href, error = %e, "Unresolvable article href; skipping");
                continue;
            }
        };

        if !seen.insert(link.clone()) {
            debug!(%link, "Already seen on an earlier listing; skipping");
            continue;
        }

        let title = anchor.text().collect::<String>().trim().to_string();
        stubs.push(ArticleStub { title, link });
    }
    stubs
}
