//! Static HTML page with one list item per entry.

use quick_xml::escape::escape;
use std::fmt::Write;

use crate::config::PageConfig;
use crate::models::Entry;

const STYLE: &str = r#"  <style>
    code{white-space: pre-wrap;}
    span.smallcaps{font-variant: small-caps;}
    div.columns{display: flex; gap: min(4vw, 1.5em);}
    div.column{flex: auto; overflow-x: auto;}
    div.hanging-indent{margin-left: 1.5em; text-indent: -1.5em;}
    /* The extra [class] is a hack that increases specificity enough to
       override a similar rule in reveal.js */
    ul.task-list[class]{list-style: none;}
    ul.task-list li input[type="checkbox"] {
      font-size: inherit;
      width: 0.8em;
      margin: 0 0.8em 0.2em -1.6em;
      vertical-align: middle;
    }
    .display.math{display: block; text-align: center; margin: 0.5rem auto;}
  </style>"#;

const FOOTER: &str = "\n</ul>\n</body>\n</html>\n";

/// Renders entries into a complete HTML document
///
/// Entries are sorted by identifier, newest first. All feed and
/// configuration text is escaped before it is written.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<'a> {
    page: &'a PageConfig,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(page: &'a PageConfig) -> Self {
        Self { page }
    }

    /// Render the full document
    pub fn render(&self, mut entries: Vec<Entry>) -> String {
        sort_entries(&mut entries);

        let mut out = self.header();
        out.push('\n');
        for entry in &entries {
            out.push_str(&Self::render_entry(entry));
            out.push('\n');
        }
        out.push_str(FOOTER);
        out.push('\n');
        out
    }

    /// Document head, title block and the opening `<ul>`
    pub fn header(&self) -> String {
        let mut out = String::new();
        out.push_str("\n<!DOCTYPE html>\n");
        out.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\" lang=\"\" xml:lang=\"\">\n");
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"generator\" content=\"pandoc\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, user-scalable=yes\" />\n");
        let _ = writeln!(out, "  <title>{}</title>", escape(self.page.title.as_str()));
        out.push_str(STYLE);
        out.push('\n');
        let _ = writeln!(
            out,
            "  <p><link rel=\"stylesheet\" href=\"{}\"></p>",
            escape(self.page.stylesheet.as_str())
        );
        out.push_str("</head>\n<body>\n");
        out.push_str("<header id=\"title-block-header\">\n");
        let _ = writeln!(
            out,
            "<h1 class=\"title\">{}</h1>\n",
            escape(self.page.heading.as_str())
        );
        out.push_str("<p>\n");
        let _ = writeln!(
            out,
            "All of my publications can also be found in <a href=\"{}\">arxiv</a>.",
            escape(self.page.search_url.as_str())
        );
        out.push_str("</p>\n\n<ul>\n");
        out
    }

    /// One `<li>` block for an entry
    ///
    /// The reference line appears only when a journal reference exists; it
    /// links to the DOI resolver when a DOI is known as well.
    pub fn render_entry(entry: &Entry) -> String {
        let mut lines = Vec::with_capacity(6);

        lines.push("<p><li>".to_string());
        lines.push(escape(entry.title.as_str()).into_owned());
        lines.push(format!("<div>{}</div>", escape(entry.authors.as_str())));

        if let Some(journal_ref) = &entry.journal_ref {
            let journal_ref = escape(journal_ref.as_str());
            match entry.doi_url() {
                Some(doi_url) => lines.push(format!(
                    "<div><a href=\"{}\">{}</a></div>",
                    escape(doi_url.as_str()),
                    journal_ref
                )),
                None => lines.push(format!("<div>{}</div>", journal_ref)),
            }
        }

        let arxiv_id = escape(entry.arxiv_id.as_str());
        lines.push(format!(
            "<div><a href=\"{}\">arxiv:{}</a></div>",
            escape(entry.abs_url().as_str()),
            arxiv_id
        ));
        lines.push("</p></li>".to_string());

        lines.join("\n")
    }
}

/// Sort by identifier, lexicographically descending; ties keep feed order
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.arxiv_id.cmp(&a.arxiv_id));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_one(entry: Entry) -> String {
        HtmlRenderer::render_entry(&entry)
    }

    #[test]
    fn test_entry_without_reference() {
        let html = render_one(Entry::new("Foo", "Ray Ganardi", "2301.00001v2"));
        assert_eq!(
            html,
            "<p><li>\nFoo\n<div>Ray Ganardi</div>\n\
             <div><a href=\"https://arxiv.org/abs/2301.00001v2\">arxiv:2301.00001v2</a></div>\n\
             </p></li>"
        );
    }

    #[test]
    fn test_entry_with_journal_ref_only() {
        let html = render_one(
            Entry::new("Foo", "Ray Ganardi", "2301.00001v2").with_journal_ref("J. Foo 1 (2023)"),
        );
        assert!(html.contains("<div>J. Foo 1 (2023)</div>"));
        assert!(!html.contains("doi.org"));
    }

    #[test]
    fn test_entry_with_journal_ref_and_doi() {
        let html = render_one(
            Entry::new("Foo", "Ray Ganardi", "2301.00001v2")
                .with_journal_ref("J. Foo 1 (2023)")
                .with_doi("10.1000/xyz"),
        );
        assert!(html.contains("<div><a href=\"https://doi.org/10.1000/xyz\">J. Foo 1 (2023)</a></div>"));
    }

    #[test]
    fn test_entry_with_doi_only_has_no_reference_line() {
        let html = render_one(Entry::new("Foo", "Ray Ganardi", "2301.00001v2").with_doi("10.1000/xyz"));
        assert!(!html.contains("doi.org"));
        assert_eq!(html.matches("<div>").count(), 2);
    }

    #[test]
    fn test_entry_escapes_feed_text() {
        let html = render_one(Entry::new("A <b> & C", "Alice & Bob", "2301.00001v2"));
        assert!(html.contains("A &lt;b&gt; &amp; C"));
        assert!(html.contains("<div>Alice &amp; Bob</div>"));
    }

    #[test]
    fn test_single_abs_link_per_entry() {
        let html = render_one(
            Entry::new("Foo", "Ray Ganardi", "2301.00001v2")
                .with_journal_ref("J")
                .with_doi("10.1/2"),
        );
        assert_eq!(html.matches("https://arxiv.org/abs/").count(), 1);
        assert!(html.contains(">arxiv:2301.00001v2</a>"));
    }

    #[test]
    fn test_sort_descending() {
        let mut entries = vec![
            Entry::new("A", "x", "2101.00001v1"),
            Entry::new("B", "x", "2302.00001v1"),
            Entry::new("C", "x", "2205.00001v3"),
        ];
        sort_entries(&mut entries);
        let ids: Vec<_> = entries.iter().map(|e| e.arxiv_id.as_str()).collect();
        assert_eq!(ids, vec!["2302.00001v1", "2205.00001v3", "2101.00001v1"]);
    }

    #[test]
    fn test_render_document() {
        let page = PageConfig::default();
        let html = HtmlRenderer::new(&page).render(vec![
            Entry::new("Older", "Ray Ganardi", "2101.00001v1"),
            Entry::new("Newer", "Ray Ganardi", "2302.00001v1"),
        ]);

        assert!(html.starts_with("\n<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Ray Ganardi – Publications</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"main.css\">"));
        assert!(html.contains(
            "href=\"https://arxiv.org/search/?searchtype=author&amp;query=Ganardi%2C+R\""
        ));
        assert!(html.ends_with("</ul>\n</body>\n</html>\n\n"));

        let newer = html.find("Newer").unwrap();
        let older = html.find("Older").unwrap();
        assert!(newer < older);
        assert_eq!(html.matches("<p><li>").count(), 2);
    }

    #[test]
    fn test_render_empty_listing() {
        let page = PageConfig::default();
        let html = HtmlRenderer::new(&page).render(Vec::new());
        assert!(html.contains("<ul>\n"));
        assert!(!html.contains("<li>"));
    }
}
