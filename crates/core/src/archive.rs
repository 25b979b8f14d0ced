//! Day-conversion pipeline.
//!
//! Wires the components together for one date folder: parse the index,
//! walk the discovered links in order, extract each article, and append the
//! surviving records to the output table.
//!
//! The sequence counter is the heart of the module's contract: every
//! discovered link consumes exactly one `article_daily_id`, whether or not
//! its article extracts. Iterating the links with `enumerate()` makes the
//! id the link's true discovery position by construction, so a failed
//! article leaves a gap in the output rather than shifting later ids.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::extract::extract_article;
use crate::index::parse_index;
use crate::record::ArticleRecord;
use crate::table::TableWriter;
use crate::{DiurnaError, Result};

/// Checks whether `name` is an archive-date folder name.
///
/// Archive days are named `YYYYMMDD`; the pattern is anchored, so trailing
/// garbage after eight digits is rejected.
pub fn is_archive_date(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^20\d{6}$").unwrap())
        .is_match(name)
}

/// Extracts and validates the date-folder basename of `path`.
///
/// # Errors
///
/// Returns [`DiurnaError::InvalidArchiveDate`] if the basename is missing,
/// is not valid UTF-8, or does not match the 8-digit date pattern.
pub fn date_folder_name(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DiurnaError::InvalidArchiveDate(path.display().to_string()))?;

    if !is_archive_date(name) {
        return Err(DiurnaError::InvalidArchiveDate(name.to_string()));
    }

    Ok(name.to_string())
}

/// Converts one date folder into `<out_dir>/<date>.csv`.
///
/// The index document is read and parsed before the output file is created,
/// so a fatal index failure produces no output at all. After that point the
/// run always completes: per-article failures are logged and skipped, and
/// rows already written stay in the file.
///
/// The header row is written iff at least one link was discovered,
/// independent of whether any article ultimately extracts. Zero links means
/// an empty output file.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// - [`DiurnaError::InvalidArchiveDate`] for a bad date-folder basename.
/// - [`DiurnaError::IndexUnreadable`] if the index document cannot be read.
/// - [`DiurnaError::Io`] / [`DiurnaError::Csv`] for output-file failures.
pub fn convert_day(date_dir: &Path, out_dir: &Path) -> Result<PathBuf> {
    let date = date_folder_name(date_dir)?;

    let index_path = date_dir.join("index.html");
    let index_html = fs::read_to_string(&index_path)
        .map_err(|source| DiurnaError::IndexUnreadable { path: index_path, source })?;

    let links = parse_index(&index_html)?;
    debug!(date = %date, links = links.len(), "parsed index document");

    let output_path = out_dir.join(format!("{date}.csv"));
    let mut writer = TableWriter::create(&output_path)?;

    if !links.is_empty() {
        writer.write_header()?;
    }

    let mut written = 0usize;
    for (article_daily_id, link) in links.iter().enumerate() {
        let article_path = date_dir.join(&link.folder_name).join("index.html");

        match extract_article(&article_path) {
            Ok(content) => {
                writer.write_article(&ArticleRecord::new(&date, article_daily_id, content))?;
                written += 1;
            }
            Err(err) => {
                warn!(article = %article_path.display(), error = %err, "Error parsing article, skipping");
            }
        }
    }

    writer.finish()?;
    debug!(rows = written, output = %output_path.display(), "finished day");

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("20020101", true)]
    #[case("20210620", true)]
    #[case("20991231", true)]
    #[case("19991231", false)]
    #[case("2002010", false)]
    #[case("200201011", false)]
    #[case("20020101x", false)]
    #[case("abc", false)]
    #[case("", false)]
    fn test_is_archive_date(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_archive_date(name), expected);
    }

    #[test]
    fn test_date_folder_name_takes_basename() {
        let name = date_folder_name(Path::new("/data/archive/20020101")).unwrap();
        assert_eq!(name, "20020101");
    }

    #[test]
    fn test_date_folder_name_rejects_bad_basename() {
        let err = date_folder_name(Path::new("/data/archive/abc")).unwrap_err();
        assert!(matches!(err, DiurnaError::InvalidArchiveDate(_)));
    }
}
