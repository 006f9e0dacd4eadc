//! Pure HTML extractors for listing and article pages.
//!
//! Both submodules take already-fetched HTML and return structured data;
//! neither performs I/O, so they can be exercised against static fixtures
//! without network access.
//!
//! # Submodules
//!
//! - [`listing`]: finds article preview containers on a category listing
//!   page and yields deduplicated title/link stubs
//! - [`article`]: finds the byline region on an article page and parses
//!   its machine-readable publication timestamp
//!
//! # Failure policy
//!
//! Missing markup (a preview without its title anchor, a page without a
//! byline) and malformed date strings are logged and reported as absent
//! values, never as errors. A broken page excludes only itself.

pub mod article;
pub mod listing;
