//! HTML rendering of the publication listing.

mod html;

pub use html::{sort_entries, HtmlRenderer};
