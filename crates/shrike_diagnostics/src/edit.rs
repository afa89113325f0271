use shrike_text_size::{Ranged, TextRange, TextSize};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A text edit to be applied to a source file. Inserts, deletes, or replaces
/// content over a given range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edit {
    /// The range to replace.
    range: TextRange,
    /// The replacement content, or `None` for a deletion.
    content: Option<Box<str>>,
}

impl Edit {
    /// Create an edit that replaces the content in `range` with `content`.
    pub fn range_replacement(content: String, range: TextRange) -> Self {
        debug_assert!(!content.is_empty(), "Prefer `Edit::range_deletion`");
        Self {
            range,
            content: Some(Box::from(content)),
        }
    }

    /// Create an edit that replaces the content between `start` and `end`
    /// with `content`.
    pub fn replacement(content: String, start: TextSize, end: TextSize) -> Self {
        Self::range_replacement(content, TextRange::new(start, end))
    }

    /// Create an edit that deletes the content in `range`.
    pub const fn range_deletion(range: TextRange) -> Self {
        Self {
            range,
            content: None,
        }
    }

    /// Create an edit that deletes the content between `start` and `end`.
    pub fn deletion(start: TextSize, end: TextSize) -> Self {
        Self::range_deletion(TextRange::new(start, end))
    }

    /// Create an edit that inserts `content` at the offset `at`.
    pub fn insertion(content: String, at: TextSize) -> Self {
        debug_assert!(!content.is_empty(), "Insert content is empty");
        Self {
            range: TextRange::empty(at),
            content: Some(Box::from(content)),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_deletion(&self) -> bool {
        self.content.is_none()
    }

    pub fn is_insertion(&self) -> bool {
        self.range.is_empty() && self.content.is_some()
    }
}

impl Ranged for Edit {
    fn range(&self) -> TextRange {
        self.range
    }
}
