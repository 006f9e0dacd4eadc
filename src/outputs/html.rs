//! Static HTML rendering and output writing.
//!
//! Produces a plain black-and-white page: an `<h1>` stating the cutoff
//! date, then one `<li>` per article with a headline link and a
//! `Published:` caption. Angle brackets in headlines are escaped so a
//! hostile title cannot inject markup into the digest.

use crate::models::Article;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use tracing::{info, instrument};

const PAGE_STYLE: &str = r#"    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background-color: #ffffff; color: #000000; max-width: 800px; margin: 20px auto; padding: 15px; line-height: 1.6; }
        h1 { text-align: center; border-bottom: 1px solid #000000; padding-bottom: 10px; margin-bottom: 25px; }
        ul { list-style-type: none; padding: 0; }
        li { margin-bottom: 18px; padding-bottom: 10px; border-bottom: 1px dotted #cccccc; }
        li:last-child { border-bottom: none; }
        a { text-decoration: none; color: #000000; font-weight: bold; font-size: 1.1em; }
        a:hover, a:focus { text-decoration: underline; }
        small { display: block; color: #555555; font-size: 0.85em; margin-top: 4px; }
    </style>
"#;

/// Render the article list as a complete HTML document.
///
/// Pure and deterministic: the same input list always produces the same
/// document, in the same order (no re-sorting here). An empty list renders
/// a single explanatory entry instead of an empty `<ul>`.
pub fn render_digest(articles: &[Article], cutoff: DateTime<Utc>) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("    <meta charset=\"UTF-8\">\n");
    page.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    page.push_str("    <title>Mashable SEA Headlines Aggregator</title>\n");
    page.push_str(PAGE_STYLE);
    page.push_str("</head>\n<body>\n");
    writeln!(
        page,
        "    <h1>Mashable SEA Headlines (Since {})</h1>",
        cutoff.format("%Y-%m-%d")
    )
    .unwrap();
    page.push_str("    <ul>\n");

    if articles.is_empty() {
        page.push_str(
            "        <li>No articles found matching the criteria after checking article pages.</li>\n",
        );
    } else {
        for article in articles {
            writeln!(page, "        <li>").unwrap();
            writeln!(
                page,
                "            <a href=\"{}\" target=\"_blank\">{}</a>",
                article.link,
                escape_angle_brackets(&article.title)
            )
            .unwrap();
            writeln!(
                page,
                "            <small>Published: {}</small>",
                article.date.format("%Y-%m-%d %H:%M %Z")
            )
            .unwrap();
            writeln!(page, "        </li>").unwrap();
        }
    }

    page.push_str("    </ul>\n</body>\n</html>\n");
    page
}

/// Write the rendered document to `path`, overwriting any existing file.
#[instrument(level = "info", skip(html))]
pub async fn write_digest(path: &str, html: &str) -> std::io::Result<()> {
    tokio::fs::write(path, html).await?;
    info!(bytes = html.len(), "Wrote HTML digest");
    Ok(())
}

fn escape_angle_brackets(title: &str) -> String {
    title.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cutoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
    }

    fn article(title: &str, link: &str, date: DateTime<Utc>) -> Article {
        Article {
            title: title.to_string(),
            link: link.to_string(),
            date,
        }
    }

    #[test]
    fn test_header_states_cutoff_date() {
        let html = render_digest(&[], cutoff());
        assert!(html.contains("<h1>Mashable SEA Headlines (Since 2022-01-01)</h1>"));
    }

    #[test]
    fn test_empty_list_renders_placeholder_entry() {
        let html = render_digest(&[], cutoff());
        assert!(html.contains("<li>No articles found matching the criteria"));
        // Exactly the one placeholder entry
        assert_eq!(html.matches("<li>").count(), 1);
    }

    #[test]
    fn test_article_entry_has_link_and_caption() {
        let articles = vec![article(
            "Big News",
            "https://sea.mashable.com/tech/big-news",
            Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
        )];
        let html = render_digest(&articles, cutoff());
        assert!(html.contains(
            r#"<a href="https://sea.mashable.com/tech/big-news" target="_blank">Big News</a>"#
        ));
        assert!(html.contains("<small>Published: 2023-05-01 10:00 UTC</small>"));
    }

    #[test]
    fn test_title_angle_brackets_are_escaped() {
        let articles = vec![article(
            "<script>alert('x')</script>",
            "https://sea.mashable.com/tech/xss",
            Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
        )];
        let html = render_digest(&articles, cutoff());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert('x')&lt;/script&gt;"));
    }

    #[test]
    fn test_input_order_is_preserved() {
        let articles = vec![
            article("First", "https://x/1", Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
            article("Second", "https://x/2", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        ];
        let html = render_digest(&articles, cutoff());
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_is_deterministic() {
        let articles = vec![article(
            "Same",
            "https://x/same",
            Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap(),
        )];
        assert_eq!(render_digest(&articles, cutoff()), render_digest(&articles, cutoff()));
    }

    #[tokio::test]
    async fn test_write_digest_roundtrip_and_overwrite() {
        let dir = std::env::temp_dir().join("headline_digest_test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("digest.html");
        let path = path.to_str().unwrap();

        write_digest(path, "<html>first</html>").await.unwrap();
        write_digest(path, "<html>second</html>").await.unwrap();
        let written = tokio::fs::read_to_string(path).await.unwrap();
        assert_eq!(written, "<html>second</html>");
    }

    #[tokio::test]
    async fn test_write_digest_invalid_path_surfaces_error() {
        let result = write_digest("/nonexistent-dir/deep/digest.html", "<html></html>").await;
        assert!(result.is_err());
    }
}
