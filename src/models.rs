//! Data models for discovered and dated articles.
//!
//! This module defines the two records that flow through the pipeline:
//! - [`ArticleStub`]: a link discovered on a category listing page, before
//!   its article page has been visited
//! - [`Article`]: a stub whose publication date was confirmed to fall
//!   inside the cutoff window
//!
//! Both are immutable once created; nothing is persisted between runs, so
//! neither type is serialized.

use chrono::{DateTime, Utc};

/// A provisional article discovered on a category listing page.
///
/// Carries only what the listing page provides: the headline text and the
/// resolved absolute URL. The publication date is unknown until the
/// article page itself is fetched.
#[derive(Debug, Clone)]
pub struct ArticleStub {
    /// The headline text from the listing anchor, whitespace-trimmed.
    pub title: String,
    /// The absolute URL of the article page.
    pub link: String,
}

/// An article whose publication date was extracted and passed the cutoff.
///
/// The sorted list of these is the sole input to the HTML renderer.
#[derive(Debug, Clone)]
pub struct Article {
    /// The headline text, carried over from the stub.
    pub title: String,
    /// The absolute URL of the article page.
    pub link: String,
    /// The publication timestamp, normalized to UTC.
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_article_stub_creation() {
        let stub = ArticleStub {
            title: "Headline".to_string(),
            link: "https://sea.mashable.com/tech/article".to_string(),
        };
        assert_eq!(stub.title, "Headline");
        assert!(stub.link.starts_with("https://"));
    }

    #[test]
    fn test_article_carries_stub_fields() {
        let stub = ArticleStub {
            title: "Headline".to_string(),
            link: "https://sea.mashable.com/tech/article".to_string(),
        };
        let article = Article {
            title: stub.title.clone(),
            link: stub.link.clone(),
            date: Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
        };
        assert_eq!(article.title, stub.title);
        assert_eq!(article.link, stub.link);
        assert_eq!(article.date.to_rfc3339(), "2023-05-01T10:00:00+00:00");
    }
}
