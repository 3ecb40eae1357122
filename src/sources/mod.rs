//! Feed retrieval and parsing.
//!
//! [`ArxivSource`] performs the single query against the arXiv API and
//! [`parse_records`] turns the returned Atom document into raw
//! [`FeedRecord`]s. Filtering and normalization happen in
//! [`crate::utils::filter`].

mod arxiv;
mod atom;

pub use arxiv::ArxivSource;
pub use atom::{parse_records, FeedRecord};

/// Errors that abort the pipeline
///
/// None of these are recovered from; the page is only written once every
/// stage has succeeded.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Transport failure (connect, DNS, reading the body)
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The document is not well-formed XML or not an Atom feed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A record lacks a field the listing needs
    #[error("Entry #{record} has no {field}")]
    MissingField { field: &'static str, record: usize },

    /// The configured query endpoint is not a valid URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The `id` field does not contain an abstract-page URL
    #[error("Malformed arXiv id: {0}")]
    MalformedId(String),

    /// IO error (reading a saved feed)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
