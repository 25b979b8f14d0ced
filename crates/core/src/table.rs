//! Fixed-schema CSV output.
//!
//! [`TableWriter`] owns the output file handle for the duration of a run and
//! serializes records with minimal quoting: a field is quoted only when it
//! contains the delimiter, the quote character, or a line break. Rows are
//! terminated with a single `\n` regardless of host platform.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::Result;
use crate::record::ArticleRecord;

/// Column order of the output table.
pub const COLUMNS: [&str; 5] = ["key", "date", "article_daily_id", "title", "text"];

/// Serializes article records into the fixed-schema output file.
///
/// The header row is not written implicitly: the pipeline decides whether a
/// header belongs in the file at all (it does iff at least one link was
/// discovered), so [`TableWriter::write_header`] is an explicit call.
pub struct TableWriter {
    inner: csv::Writer<File>,
}

impl TableWriter {
    /// Creates the output file at `path`, truncating any previous content.
    pub fn create(path: &Path) -> Result<Self> {
        let inner = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_path(path)?;

        Ok(Self { inner })
    }

    /// Writes the header row. Called at most once per file.
    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_record(COLUMNS)?;
        Ok(())
    }

    /// Appends one record as a data row.
    pub fn write_article(&mut self, record: &ArticleRecord) -> Result<()> {
        self.inner.serialize(record)?;
        Ok(())
    }

    /// Flushes buffered rows and releases the file handle.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
