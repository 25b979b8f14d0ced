//! Index-document parsing.
//!
//! A date folder carries one `index.html` that links to every article
//! published that day, one anchor per article sub-folder. This module turns
//! that page into the ordered list of folder names that drives the rest of
//! the pipeline.
//!
//! Discovery order is load-bearing: an article's position in this list
//! becomes its `article_daily_id`, so the list preserves document order and
//! duplicates, and only recognized anchors occupy a position.

use tracing::warn;

use crate::Result;
use crate::parse::Document;

/// One recognized link from the index document.
///
/// `folder_name` is the path segment preceding the first `/` of the anchor's
/// `href`, i.e. the article sub-folder relative to the date folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub folder_name: String,
}

/// Parses the index document into an ordered list of article links.
///
/// Every anchor whose `href` ends in `index.html` yields one [`ArticleLink`],
/// in document order. Any other anchor, including one with no `href` at all,
/// is reported through a `warn!` diagnostic and skipped without occupying a
/// position in the result.
///
/// # Errors
///
/// Individual malformed anchors never fail the call; the returned error can
/// only be a selector-level [`DiurnaError::HtmlParseError`].
///
/// [`DiurnaError::HtmlParseError`]: crate::DiurnaError::HtmlParseError
pub fn parse_index(html: &str) -> Result<Vec<ArticleLink>> {
    let doc = Document::parse(html)?;
    let mut links = Vec::new();

    for anchor in doc.select("a")? {
        match anchor.attr("href") {
            Some(href) if href.ends_with("index.html") => {
                let folder_name = href.split('/').next().unwrap_or(href).to_string();
                links.push(ArticleLink { folder_name });
            }
            _ => warn!(link = %anchor.outer_html(), "Unknown link tag in index document"),
        }
    }

    Ok(links)
}
