//! Fetch → parse → filter → render.

use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::models::Entry;
use crate::render::HtmlRenderer;
use crate::sources::{parse_records, ArxivSource, FeedError};
use crate::utils::EntryFilter;

/// Parse a feed document and keep the records that pass `filter`
pub fn collect_entries(xml: &str, filter: &EntryFilter) -> Result<Vec<Entry>, FeedError> {
    let records = parse_records(xml)?;
    let total = records.len();
    let entries = filter.apply(records)?;
    info!("Kept {} of {} feed entries", entries.len(), total);
    Ok(entries)
}

/// Render the page for an already retrieved feed document
pub fn render_feed(xml: &str, config: &Config) -> Result<String, FeedError> {
    let filter = EntryFilter::from_config(&config.filter);
    let entries = collect_entries(xml, &filter)?;
    Ok(HtmlRenderer::new(&config.page).render(entries))
}

/// Render the page for a feed document saved on disk
pub fn render_file(path: &Path, config: &Config) -> Result<String, FeedError> {
    info!("Reading feed from {}", path.display());
    let xml = std::fs::read_to_string(path)?;
    render_feed(&xml, config)
}

/// Query the feed and render the page
///
/// Nothing is returned unless every stage succeeded.
pub fn fetch_and_render(source: &ArxivSource, config: &Config) -> Result<String, FeedError> {
    let xml = source.fetch()?;
    render_feed(&xml, config)
}
