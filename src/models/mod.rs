//! Core data model for the publication listing.

mod entry;

pub use entry::{Entry, ARXIV_ABS_URL, DOI_RESOLVER_URL};
