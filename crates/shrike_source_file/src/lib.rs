//! Utilities for querying source files by byte offset: range slicing, line
//! boundaries, and offset-to-line:column translation.

pub use crate::line_index::{LineIndex, OneIndexed, SourceLocation};
pub use crate::locator::Locator;

mod line_index;
mod locator;
