//! Output generation for the digest.
//!
//! A single submodule today:
//!
//! - [`html`]: renders the filtered article list into a static HTML page
//!   and writes it to disk
//!
//! Rendering is a pure function over the article list so it can be tested
//! without touching the filesystem; only the write step performs I/O.

pub mod html;
