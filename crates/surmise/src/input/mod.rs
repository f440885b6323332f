//! Input producers: every one of them emits the same row-record shape,
//! so inference stays agnostic to where the rows came from.

mod lines;
mod parser;
mod source;

pub use lines::{MIN_TABLE_COLUMNS, rows_from_lines, rows_from_text, split_table_line};
pub use parser::{Parser, ParserConfig};
pub use source::SourceMetadata;
