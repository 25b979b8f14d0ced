//! Error types for archive conversion operations.
//!
//! This module defines the main error type [`DiurnaError`] which represents
//! all possible errors that can occur while reading a date folder, extracting
//! articles, and serializing the output table.
//!
//! # Example
//!
//! ```rust
//! use diurna_core::{DiurnaError, Result};
//!
//! fn check_date(name: &str) -> Result<()> {
//!     if name.len() != 8 {
//!         return Err(DiurnaError::InvalidArchiveDate(name.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for archive conversion operations.
///
/// Variants split into two groups by how the pipeline treats them: the index
/// document and the output table are run-level concerns (fatal), while
/// anything raised for a single article document is recoverable and only
/// skips that article.
#[derive(Error, Debug)]
pub enum DiurnaError {
    /// The per-date index document could not be read.
    ///
    /// Fatal for the whole run: without the index there is no discovery
    /// order and no output is produced.
    #[error("Failed to read index document {path}: {source}")]
    IndexUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An article document is absent or is not a regular file.
    ///
    /// Recoverable: the article contributes no row, but its sequence slot
    /// is still consumed.
    #[error("File is not an html: {0}")]
    ArticleNotFound(PathBuf),

    /// HTML parsing errors.
    ///
    /// Returned when a document cannot be interrogated as expected, for
    /// example an invalid CSS selector or a missing `<title>` element.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The date-folder basename does not look like an archive date.
    ///
    /// Archive folders are named by day as an 8-digit `YYYYMMDD` string.
    #[error("Not an 8-digit archive date folder: {0}")]
    InvalidArchiveDate(String),

    /// File I/O errors.
    ///
    /// Wraps standard I/O errors for reads and writes outside the index
    /// document special case.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table serialization errors from the CSV writer.
    #[error("Failed to write table row: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for DiurnaError.
///
/// This is a convenience alias for `std::result::Result<T, DiurnaError>`.
pub type Result<T> = std::result::Result<T, DiurnaError>;
