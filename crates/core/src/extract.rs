//! Per-article content extraction.
//!
//! Loads one article document and reduces it to a normalized
//! `(title, text)` pair. Every failure here is recoverable by design: the
//! caller logs it, the article contributes no row, and the run moves on to
//! the next link.

use std::fs;
use std::path::Path;

use crate::normalize::clean_line;
use crate::parse::Document;
use crate::{DiurnaError, Result};

/// The result of extracting one article document.
///
/// Both fields are single-line strings: carriage returns, line feeds, and
/// byte-order marks are stripped by [`clean_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Normalized text of the document's `<title>` element.
    pub title: String,
    /// Normalized visible text of everything outside the title element,
    /// text nodes joined by single spaces.
    pub text: String,
}

/// Extracts title and body text from one article document.
///
/// # Errors
///
/// - [`DiurnaError::ArticleNotFound`] if `path` is not a regular file.
/// - [`DiurnaError::Io`] if the file exists but cannot be read.
/// - [`DiurnaError::HtmlParseError`] if the document has no `<title>`
///   element.
///
/// All of these are recoverable at the pipeline level; none should abort a
/// run.
pub fn extract_article(path: &Path) -> Result<ExtractedContent> {
    if !path.is_file() {
        return Err(DiurnaError::ArticleNotFound(path.to_path_buf()));
    }

    let html = fs::read_to_string(path)?;
    let doc = Document::parse(&html)?;

    let title = doc
        .title()
        .ok_or_else(|| DiurnaError::HtmlParseError(format!("missing <title> element in {}", path.display())))?;

    Ok(ExtractedContent { title: clean_line(&title), text: clean_line(&doc.text_outside_title()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_article(dir: &TempDir, name: &str, html: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(html.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_extract_title_and_text() {
        let dir = TempDir::new().unwrap();
        let path = write_article(
            &dir,
            "index.html",
            "<html><head><title>T1</title></head><body>Hello</body></html>",
        );

        let content = extract_article(&path).unwrap();
        assert_eq!(content.title, "T1");
        assert_eq!(content.text, "Hello");
    }

    #[test]
    fn test_title_does_not_leak_into_text() {
        let dir = TempDir::new().unwrap();
        let path = write_article(
            &dir,
            "index.html",
            "<html><head><title>Headline</title></head><body><p>Body only</p></body></html>",
        );

        let content = extract_article(&path).unwrap();
        assert!(!content.text.contains("Headline"));
        assert!(content.text.contains("Body only"));
    }

    #[test]
    fn test_normalization_strips_line_breaks_and_bom() {
        let dir = TempDir::new().unwrap();
        let path = write_article(
            &dir,
            "index.html",
            "<html><head><title>\u{feff}Two\nLines</title></head><body>a\r\nb</body></html>",
        );

        let content = extract_article(&path).unwrap();
        assert_eq!(content.title, "TwoLines");
        assert!(!content.text.contains('\n'));
        assert!(!content.text.contains('\r'));
    }

    #[test]
    fn test_missing_file_is_recoverable_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent").join("index.html");

        let err = extract_article(&path).unwrap_err();
        assert!(matches!(err, DiurnaError::ArticleNotFound(_)));
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_directory_instead_of_file() {
        let dir = TempDir::new().unwrap();
        let err = extract_article(dir.path()).unwrap_err();
        assert!(matches!(err, DiurnaError::ArticleNotFound(_)));
    }

    #[test]
    fn test_missing_title_element() {
        let dir = TempDir::new().unwrap();
        let path = write_article(&dir, "index.html", "<html><body>No head at all</body></html>");

        let err = extract_article(&path).unwrap_err();
        assert!(matches!(err, DiurnaError::HtmlParseError(_)));
    }

    #[test]
    fn test_malformed_markup_still_extracts() {
        let dir = TempDir::new().unwrap();
        let path = write_article(
            &dir,
            "index.html",
            "<html><head><title>Broken</title><body><p>unclosed <b>text",
        );

        let content = extract_article(&path).unwrap();
        assert_eq!(content.title, "Broken");
        assert!(content.text.contains("unclosed"));
    }
}
