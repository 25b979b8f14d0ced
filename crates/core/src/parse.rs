//! HTML parsing and document traversal.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the tree using CSS selectors. Archive pages are often
//! truncated or otherwise malformed; parsing is lenient and never fails on
//! bad markup.
//!
//! # Example
//!
//! ```rust
//! use diurna_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Front page</title></head>
//!         <body><a href="a/index.html">story</a></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! assert_eq!(doc.title().as_deref().map(str::trim), Some("Front page"));
//! let anchors = doc.select("a").unwrap();
//! assert_eq!(anchors[0].attr("href"), Some("a/index.html"));
//! ```

use scraper::{Html, Node, Selector};

use crate::{DiurnaError, Result};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors and collecting visible text.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Malformed markup is repaired by the underlying parser rather than
    /// rejected, matching browser behavior.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Arguments
    ///
    /// * `selector` - A CSS selector string (e.g., "a", "p.content")
    ///
    /// # Errors
    ///
    /// Returns [`DiurnaError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| DiurnaError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the raw text content of the first `<title>` element if
    /// present, without any normalization.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets the visible text of the document, excluding the title.
    ///
    /// Collects every text node that is not a descendant of a `<title>`
    /// element, in document order, joined by single spaces. This is the
    /// body-text half of an article: the title is reported separately and
    /// must not leak into it.
    pub fn text_outside_title(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        for node in self.html.tree.root().descendants() {
            if let Node::Text(text) = node.value() {
                let in_title = node
                    .ancestors()
                    .any(|a| a.value().as_element().is_some_and(|el| el.name() == "title"));
                if !in_title {
                    parts.push(&text.text);
                }
            }
        }

        parts.join(" ")
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single node in the HTML document tree and provides
/// access to its attributes, text content, and serialized form.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl Element<'_> {
    /// Gets the outer HTML of this element.
    ///
    /// Returns the HTML content including this element's own tags. Used to
    /// identify an element in diagnostics.
    pub fn outer_html(&self) -> String {
        self.element.html()
    }

    /// Gets the text content of this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }
}
