//! Final composition and delivery of the aggregated text.

pub(crate) mod header;
pub mod merge;
pub mod writer;

pub use merge::{merge_with_clipboard, MergeMode};
pub use writer::deliver;
