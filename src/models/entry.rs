//! Publication entry rendered into the listing.

/// Base URL for arXiv abstract pages
pub const ARXIV_ABS_URL: &str = "https://arxiv.org/abs";
/// Base URL of the DOI resolver
pub const DOI_RESOLVER_URL: &str = "https://doi.org";

/// A single publication that survived filtering
///
/// Entries are built once from a feed record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Publication title, line continuations removed
    pub title: String,

    /// Author names joined with ", " in feed order
    pub authors: String,

    /// arXiv identifier including version (e.g. "2301.00001v2")
    pub arxiv_id: String,

    /// Registered DOI, if the feed supplies one
    pub doi: Option<String>,

    /// Published venue citation, if the feed supplies one
    pub journal_ref: Option<String>,
}

impl Entry {
    /// Create an entry without DOI or journal reference
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        arxiv_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            arxiv_id: arxiv_id.into(),
            doi: None,
            journal_ref: None,
        }
    }

    /// Set the DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Set the journal reference
    pub fn with_journal_ref(mut self, journal_ref: impl Into<String>) -> Self {
        self.journal_ref = Some(journal_ref.into());
        self
    }

    /// Public abstract page for this entry
    pub fn abs_url(&self) -> String {
        format!("{}/{}", ARXIV_ABS_URL, self.arxiv_id)
    }

    /// DOI resolver link, when a DOI is known
    pub fn doi_url(&self) -> Option<String> {
        self.doi
            .as_ref()
            .map(|doi| format!("{}/{}", DOI_RESOLVER_URL, doi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = Entry::new("Foo", "Ray Ganardi", "2301.00001v2")
            .with_doi("10.1103/PhysRevA.1")
            .with_journal_ref("Phys. Rev. A 1, 1 (2023)");

        assert_eq!(entry.title, "Foo");
        assert_eq!(entry.doi.as_deref(), Some("10.1103/PhysRevA.1"));
        assert_eq!(
            entry.journal_ref.as_deref(),
            Some("Phys. Rev. A 1, 1 (2023)")
        );
    }

    #[test]
    fn test_entry_urls() {
        let entry = Entry::new("Foo", "Ray Ganardi", "2301.00001v2");
        assert_eq!(entry.abs_url(), "https://arxiv.org/abs/2301.00001v2");
        assert_eq!(entry.doi_url(), None);

        let entry = entry.with_doi("10.1000/xyz");
        assert_eq!(entry.doi_url().as_deref(), Some("https://doi.org/10.1000/xyz"));
    }
}
