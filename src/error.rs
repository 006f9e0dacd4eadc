//! Error taxonomy for page fetching.
//!
//! Every per-item failure in the pipeline (one listing page, one article
//! page) is represented as a [`FetchError`] inspected by the driver loop
//! and converted into "skip this item". Missing markup and malformed date
//! strings are not errors at this level; the extractors model those as
//! absent values.

use thiserror::Error;

/// Errors that can occur while fetching a single page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request exceeded its per-request deadline.
    #[error("request timed out")]
    Timeout,
    /// HTTP response with a non-2xx status code.
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Connection-level failure (DNS, TLS, connect, body read).
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
}
