//! Content transformation shared by every collector.
//!
//! Local files and GitHub files both pass through the line filter; `href`
//! bodies only go through the bounded reader.

mod limited_reader;
mod line_filter;

pub use limited_reader::{read_up_to, LimitedReadError};
pub use line_filter::{filter_bytes, filter_lines, is_retained, retained_lines};
