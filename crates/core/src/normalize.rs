//! Single-line text normalization.
//!
//! Every string that ends up in the output table passes through
//! [`clean_line`] so that a field can never smuggle a line break or a
//! byte-order mark into the CSV.

/// Normalize a string to a single line.
///
/// Strips carriage returns, line feeds, and U+FEFF byte-order marks.
/// All other characters, including runs of spaces and tabs, are preserved
/// as-is.
pub fn clean_line(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '\r' | '\n' | '\u{feff}')).collect()
}
