//! Utility modules supporting the pipeline.
//!
//! - [`EntryFilter`]: Author whitelist and identifier blacklist applied to feed records
//! - [`HttpClient`]: Blocking HTTP client with sensible defaults

pub mod filter;
mod http;

pub use filter::{join_authors, normalize_title, EntryFilter};
pub use http::HttpClient;
