//! Record filtering and normalization.
//!
//! The arXiv author query is name based and returns false positives, so each
//! record is checked against an author whitelist (substring match) and an
//! identifier blacklist (exact match) before it becomes an [`Entry`].

use tracing::debug;

use crate::config::FilterConfig;
use crate::models::Entry;
use crate::sources::{ArxivSource, FeedError, FeedRecord};

/// Line-continuation artifact arXiv inserts into long titles
const TITLE_CONTINUATION: &str = "\n ";

/// Author whitelist and identifier blacklist
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    author_whitelist: Vec<String>,
    id_blacklist: Vec<String>,
}

impl EntryFilter {
    /// Create a filter from explicit lists
    pub fn new(author_whitelist: Vec<String>, id_blacklist: Vec<String>) -> Self {
        Self {
            author_whitelist,
            id_blacklist,
        }
    }

    /// Create a filter from configuration
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.author_whitelist.clone(), config.id_blacklist.clone())
    }

    /// Whether any whitelisted name occurs in the joined author string
    pub fn accepts_authors(&self, authors: &str) -> bool {
        self.author_whitelist
            .iter()
            .any(|name| authors.contains(name.as_str()))
    }

    /// Whether the identifier is explicitly suppressed
    pub fn is_blacklisted(&self, arxiv_id: &str) -> bool {
        self.id_blacklist.iter().any(|id| id == arxiv_id)
    }

    /// Turn raw feed records into entries, keeping feed order
    ///
    /// Records failing the whitelist or hitting the blacklist are skipped.
    /// A missing title or author list, or a missing/malformed `id` on a
    /// whitelisted record, aborts with an error.
    pub fn apply(&self, records: Vec<FeedRecord>) -> Result<Vec<Entry>, FeedError> {
        let mut entries = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let position = index + 1;

            let title = record
                .title
                .map(|t| normalize_title(&t))
                .ok_or(FeedError::MissingField {
                    field: "title",
                    record: position,
                })?;

            if record.authors.is_empty() {
                return Err(FeedError::MissingField {
                    field: "author",
                    record: position,
                });
            }
            let authors = join_authors(&record.authors);

            if !self.accepts_authors(&authors) {
                debug!("Skipping entry #{} by {}: no whitelisted author", position, authors);
                continue;
            }

            let raw_id = record.id.ok_or(FeedError::MissingField {
                field: "id",
                record: position,
            })?;
            let arxiv_id = ArxivSource::parse_id(&raw_id)?;

            if self.is_blacklisted(&arxiv_id) {
                debug!("Skipping blacklisted entry {}", arxiv_id);
                continue;
            }

            entries.push(Entry {
                title,
                authors,
                arxiv_id,
                doi: record.doi,
                journal_ref: record.journal_ref,
            });
        }

        Ok(entries)
    }
}

/// Remove the newline-plus-space sequences arXiv uses to wrap titles
pub fn normalize_title(title: &str) -> String {
    title.replace(TITLE_CONTINUATION, "")
}

/// Trim each author name and join them with ", "
pub fn join_authors<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .collect::<Vec<_>>()
        .join(", ")
}
