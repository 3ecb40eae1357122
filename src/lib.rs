//! # publist
//!
//! Builds a static HTML listing of an author's arXiv publications.
//!
//! ## Architecture
//!
//! The run is a single synchronous pass:
//!
//! - [`sources`]: arXiv query and Atom feed parsing
//! - [`utils`]: author whitelist / identifier blacklist filtering, HTTP client
//! - [`models`]: the [`Entry`] record
//! - [`render`]: HTML page output
//! - [`pipeline`]: the stages wired together
//! - [`config`]: configuration management

pub mod config;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod sources;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use models::Entry;
pub use sources::{ArxivSource, FeedError};
