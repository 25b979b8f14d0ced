pub mod archive;
pub mod error;
pub mod extract;
pub mod index;
pub mod normalize;
pub mod parse;
pub mod record;
pub mod table;

pub use archive::{convert_day, date_folder_name, is_archive_date};
pub use error::{DiurnaError, Result};
pub use extract::{ExtractedContent, extract_article};
pub use index::{ArticleLink, parse_index};
pub use normalize::clean_line;
pub use parse::{Document, Element};
pub use record::ArticleRecord;
pub use table::{COLUMNS, TableWriter};
