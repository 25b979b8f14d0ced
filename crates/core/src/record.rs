//! Output record assembly.
//!
//! One [`ArticleRecord`] is one row of the output table. Assembly is a pure
//! function of the archive date, the article's discovery position, and the
//! extracted content; it has no failure modes and is only invoked after a
//! successful extraction.

use serde::Serialize;

use crate::extract::ExtractedContent;

/// One row of the output table.
///
/// Field declaration order matches the table's column order
/// (`key, date, article_daily_id, title, text`); the CSV serializer relies
/// on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// Stable row key: `<date>-<article_daily_id>`.
    pub key: String,
    /// Archive date, the 8-digit name of the date folder. Constant for a
    /// whole run.
    pub date: String,
    /// Zero-based position of the article's link in index-discovery order.
    ///
    /// This is the discovery counter, not a count of successful
    /// extractions: a failed article leaves a gap, and later records keep
    /// their true position so that ids stay stable across re-runs with
    /// different failure patterns.
    pub article_daily_id: usize,
    /// Normalized article title.
    pub title: String,
    /// Normalized article body text.
    pub text: String,
}

impl ArticleRecord {
    /// Assembles a record from its parts.
    pub fn new(date: &str, article_daily_id: usize, content: ExtractedContent) -> Self {
        Self {
            key: format!("{date}-{article_daily_id}"),
            date: date.to_string(),
            article_daily_id,
            title: content.title,
            text: content.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &str, text: &str) -> ExtractedContent {
        ExtractedContent { title: title.to_string(), text: text.to_string() }
    }

    #[test]
    fn test_key_concatenates_date_and_id() {
        let record = ArticleRecord::new("20020101", 0, content("T1", "Hello"));
        assert_eq!(record.key, "20020101-0");
        assert_eq!(record.date, "20020101");
        assert_eq!(record.article_daily_id, 0);
    }

    #[test]
    fn test_key_uses_given_id_not_a_dense_sequence() {
        let record = ArticleRecord::new("20210620", 17, content("T", "x"));
        assert_eq!(record.key, "20210620-17");
        assert_eq!(record.article_daily_id, 17);
    }

    #[test]
    fn test_content_carried_through() {
        let record = ArticleRecord::new("20020101", 3, content("Title", "Body text"));
        assert_eq!(record.title, "Title");
        assert_eq!(record.text, "Body text");
    }
}
