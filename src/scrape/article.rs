//! Publication date extraction from article pages.
//!
//! Article pages carry their publication timestamp as the machine-readable
//! `datetime` attribute of a `<time>` element inside the byline region
//! (`div.byline.font-default`). Pages missing the region, the element, or
//! a parseable timestamp are treated as undated.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, warn};

static BYLINE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.byline.font-default").unwrap());
static TIME_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("time[datetime]").unwrap());

/// Extract the publication timestamp from an article page.
///
/// Returns `None` when the byline region, its `<time>` element, or a
/// parseable `datetime` attribute is absent. The caller treats `None` as
/// "not dated, skip this article".
pub fn extract_publication_date(html: &str) -> Option<DateTime<Utc>> {
    let document = Html::parse_document(html);
    let Some(byline) = document.select(&BYLINE_SELECTOR).next() else {
        debug!("No byline region on article page");
        return None;
    };
    let time_tag = byline.select(&TIME_SELECTOR).next()?;
    let raw = time_tag.value().attr("datetime")?;
    parse_datetime(raw)
}

/// Parse an ISO-8601 timestamp into UTC.
///
/// Accepts the forms found in `datetime` attributes in the wild:
/// - full RFC 3339 with `Z` or a numeric offset (normalized to UTC)
/// - a naive datetime, with or without fractional seconds (assumed UTC)
/// - a bare `YYYY-MM-DD` date (midnight UTC)
///
/// A malformed value logs a warning and returns `None`; it never aborts
/// the run.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Some(zoned.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0).unwrap().and_utc());
    }
    warn!(datetime = raw, "Could not parse date string");
    None
}
