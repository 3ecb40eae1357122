//! Atom feed parsing.
//!
//! The arXiv API returns an Atom feed whose `entry` elements carry the
//! standard `title`, `id` and `author/name` children plus `arxiv:doi` and
//! `arxiv:journal_ref` extensions. Elements are matched by local name, so the
//! namespace prefix does not matter.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::sources::FeedError;

/// One `entry` element as it appears in the feed, before filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedRecord {
    pub title: Option<String>,
    /// Raw `author/name` texts, untrimmed, in document order
    pub authors: Vec<String>,
    pub id: Option<String>,
    pub doi: Option<String>,
    pub journal_ref: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    AuthorName,
    Id,
    Doi,
    JournalRef,
}

impl Field {
    fn from_local_name(name: &[u8], in_author: bool) -> Option<Self> {
        match name {
            b"name" if in_author => Some(Field::AuthorName),
            _ if in_author => None,
            b"title" => Some(Field::Title),
            b"id" => Some(Field::Id),
            b"doi" => Some(Field::Doi),
            b"journal_ref" => Some(Field::JournalRef),
            _ => None,
        }
    }
}

impl FeedRecord {
    fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Title => self.title = Some(text),
            Field::AuthorName => self.authors.push(text),
            Field::Id => self.id = Some(text),
            Field::Doi => self.doi = Some(text),
            Field::JournalRef => self.journal_ref = Some(text),
        }
    }
}

/// Parse an Atom document into its entry records, in document order
///
/// Fails on malformed XML, when the document has no `feed` root, or when it
/// ends before `</feed>`. Self-closing fields yield empty strings.
pub fn parse_records(xml: &str) -> Result<Vec<FeedRecord>, FeedError> {
    let mut reader = Reader::from_str(xml);

    let mut records = Vec::new();
    let mut seen_feed = false;
    let mut closed_feed = false;
    let mut current: Option<FeedRecord> = None;
    let mut in_author = false;
    let mut field: Option<Field> = None;
    let mut text = String::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            FeedError::Parse(format!(
                "XML error at position {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        match event {
            Event::Start(e) => {
                let local = e.local_name();
                let name = local.as_ref();
                if current.is_none() {
                    match name {
                        b"feed" => seen_feed = true,
                        b"entry" => current = Some(FeedRecord::default()),
                        _ => {}
                    }
                } else if name == b"author" {
                    in_author = true;
                } else if field.is_none() {
                    field = Field::from_local_name(name, in_author);
                    text.clear();
                }
            }
            Event::Text(e) if field.is_some() => {
                let unescaped = e
                    .unescape()
                    .map_err(|e| FeedError::Parse(format!("Invalid text: {}", e)))?;
                text.push_str(&unescaped);
            }
            Event::Empty(e) if current.is_some() && field.is_none() => {
                let local = e.local_name();
                if let (Some(empty), Some(record)) = (
                    Field::from_local_name(local.as_ref(), in_author),
                    current.as_mut(),
                ) {
                    record.set(empty, String::new());
                }
            }
            Event::CData(e) if field.is_some() => {
                text.push_str(&String::from_utf8_lossy(&e));
            }
            Event::End(e) => {
                let local = e.local_name();
                let name = local.as_ref();
                if current.is_none() {
                    if name == b"feed" {
                        closed_feed = true;
                    }
                    continue;
                }
                if let Some(open) = field {
                    if Field::from_local_name(name, in_author) == Some(open) {
                        if let Some(record) = current.as_mut() {
                            record.set(open, std::mem::take(&mut text));
                        }
                        field = None;
                    }
                } else if name == b"author" {
                    in_author = false;
                } else if name == b"entry" {
                    records.extend(current.take());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_feed {
        return Err(FeedError::Parse("document is not an Atom feed".to_string()));
    }
    if current.is_some() {
        return Err(FeedError::Parse("unterminated entry element".to_string()));
    }
    if !closed_feed {
        return Err(FeedError::Parse("unterminated feed element".to_string()));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title type="html">ArXiv Query: search_query=au:Ganardi_Ray</title>
  <id>http://arxiv.org/api/query</id>
  <entry>
    <id>http://arxiv.org/abs/2301.00001v2</id>
    <title>Quantum Foo and
  Classical Bar</title>
    <author>
      <name>Ray Ganardi</name>
      <arxiv:affiliation>University of Somewhere</arxiv:affiliation>
    </author>
    <author>
      <name> Alice &amp; Bob </name>
    </author>
    <arxiv:doi>10.1103/PhysRevA.1.1</arxiv:doi>
    <arxiv:journal_ref>Phys. Rev. A 1, 1 (2023)</arxiv:journal_ref>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2302.08120v1</id>
    <title>Bar</title>
    <author><name>Ray Ganardi</name></author>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_records() {
        let records = parse_records(FEED).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.id.as_deref(), Some("http://arxiv.org/abs/2301.00001v2"));
        assert_eq!(
            first.title.as_deref(),
            Some("Quantum Foo and\n  Classical Bar")
        );
        assert_eq!(first.authors, vec!["Ray Ganardi", " Alice & Bob "]);
        assert_eq!(first.doi.as_deref(), Some("10.1103/PhysRevA.1.1"));
        assert_eq!(first.journal_ref.as_deref(), Some("Phys. Rev. A 1, 1 (2023)"));

        let second = &records[1];
        assert_eq!(second.title.as_deref(), Some("Bar"));
        assert_eq!(second.doi, None);
        assert_eq!(second.journal_ref, None);
    }

    #[test]
    fn test_feed_level_fields_ignored() {
        let records = parse_records(FEED).unwrap();
        assert!(records
            .iter()
            .all(|r| r.id.as_deref() != Some("http://arxiv.org/api/query")));
    }

    #[test]
    fn test_parse_empty_feed() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#;
        assert!(parse_records(xml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_title_is_none() {
        let xml = r#"<feed><entry><id>http://arxiv.org/abs/1</id><author><name>X</name></author></entry></feed>"#;
        let records = parse_records(xml).unwrap();
        assert_eq!(records[0].title, None);
        assert_eq!(records[0].authors, vec!["X"]);
    }

    #[test]
    fn test_parse_malformed_xml() {
        let xml = r#"<feed><entry><title>Foo</entry></feed>"#;
        assert!(matches!(parse_records(xml), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_parse_truncated_after_entry() {
        let xml = r#"<feed><entry><id>http://arxiv.org/abs/1</id><title>Foo</title><author><name>Ray Ganardi</name></author></entry>"#;
        assert!(matches!(parse_records(xml), Err(FeedError::Parse(_))));
    }

    #[test]
    fn test_parse_self_closing_fields() {
        let xml = r#"<feed xmlns:arxiv="http://arxiv.org/schemas/atom"><entry><id>http://arxiv.org/abs/1</id><title/><author><name>X</name></author><arxiv:doi/></entry></feed>"#;
        let records = parse_records(xml).unwrap();
        assert_eq!(records[0].title.as_deref(), Some(""));
        assert_eq!(records[0].doi.as_deref(), Some(""));
        assert_eq!(records[0].journal_ref, None);
    }

    #[test]
    fn test_parse_not_a_feed() {
        let xml = r#"<html><body>Service unavailable</body></html>"#;
        assert!(matches!(parse_records(xml), Err(FeedError::Parse(_))));
    }
}
