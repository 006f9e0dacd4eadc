//! HTTP page fetching.
//!
//! A single shared [`reqwest::Client`] is built once per run with a fixed
//! browser-like `User-Agent`, since the site rejects default client
//! identities. [`fetch_page`] performs one GET with a per-request timeout
//! and no retries; a failed fetch only loses the page being fetched.

use crate::config::DigestConfig;
use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Build the HTTP client used for the whole run.
///
/// All requests carry the configured `User-Agent` as a default header.
pub fn build_client(config: &DigestConfig) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(&config.user_agent).build()
}

/// Fetch a page and return its body text.
///
/// # Errors
///
/// - [`FetchError::Timeout`] if the request exceeds `timeout`
/// - [`FetchError::HttpStatus`] for a non-2xx response
/// - [`FetchError::Transport`] for connection-level failures
pub async fn fetch_page(client: &Client, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.text().await.map_err(classify)?;
    debug!(%url, bytes = body.len(), "Fetched page");
    Ok(body)
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> DigestConfig {
        DigestConfig::default()
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tech/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = build_client(&test_config()).unwrap();
        let body = fetch_page(&client, &format!("{}/tech/", server.uri()), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_page_sends_browser_user_agent() {
        let server = MockServer::start().await;
        let config = test_config();
        Mock::given(method("GET"))
            .and(header("User-Agent", config.user_agent.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_client(&config).unwrap();
        let result = fetch_page(&client, &server.uri(), Duration::from_secs(5)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_non_2xx_is_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client(&test_config()).unwrap();
        let err = fetch_page(&client, &server.uri(), Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            FetchError::HttpStatus(404) => {}
            e => panic!("Expected HttpStatus(404), got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let client = build_client(&test_config()).unwrap();
        let err = fetch_page(&client, &server.uri(), Duration::from_millis(100))
            .await
            .unwrap_err();
        match err {
            FetchError::Timeout => {}
            e => panic!("Expected Timeout, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused_is_transport() {
        // Port 1 is never listening
        let client = build_client(&test_config()).unwrap();
        let err = fetch_page(&client, "http://127.0.0.1:1/", Duration::from_secs(5))
            .await
            .unwrap_err();
        match err {
            FetchError::Transport(_) => {}
            e => panic!("Expected Transport, got {:?}", e),
        }
    }
}
