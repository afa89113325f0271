use shrike_text_size::{Ranged, TextSize};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit::Edit;

/// Indicates the level of confidence that applying a fix will not change the
/// meaning of the program.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Applicability {
    /// The fix is likely to be wrong, or applying it would produce invalid
    /// code. It should only ever be shown, never applied.
    DisplayOnly,
    /// The fix may change runtime behavior (for example, it moves statements
    /// across a comment that belonged to one of them).
    Unsafe,
    /// The fix is safe to apply automatically.
    Safe,
}

/// A collection of [`Edit`] elements to be applied to a source file.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// The [`Edit`] elements of the fix, sorted by start offset.
    edits: Vec<Edit>,
    /// The [`Applicability`] of the fix.
    applicability: Applicability,
}

impl Fix {
    fn with_edits(
        edit: Edit,
        rest: impl IntoIterator<Item = Edit>,
        applicability: Applicability,
    ) -> Self {
        let mut edits: Vec<Edit> = std::iter::once(edit).chain(rest).collect();
        edits.sort_by_key(|edit| (edit.start(), edit.end()));
        Self {
            edits,
            applicability,
        }
    }

    /// Create a new [`Fix`] that is [safe](Applicability::Safe) to apply from
    /// an [`Edit`] element.
    pub fn safe_edit(edit: Edit) -> Self {
        Self::with_edits(edit, [], Applicability::Safe)
    }

    /// Create a new [`Fix`] that is [safe](Applicability::Safe) to apply from
    /// multiple [`Edit`] elements.
    pub fn safe_edits(edit: Edit, rest: impl IntoIterator<Item = Edit>) -> Self {
        Self::with_edits(edit, rest, Applicability::Safe)
    }

    /// Create a new [`Fix`] that is [unsafe](Applicability::Unsafe) to apply
    /// from an [`Edit`] element.
    pub fn unsafe_edit(edit: Edit) -> Self {
        Self::with_edits(edit, [], Applicability::Unsafe)
    }

    /// Create a new [`Fix`] that is [unsafe](Applicability::Unsafe) to apply
    /// from multiple [`Edit`] elements.
    pub fn unsafe_edits(edit: Edit, rest: impl IntoIterator<Item = Edit>) -> Self {
        Self::with_edits(edit, rest, Applicability::Unsafe)
    }

    /// Create a new [`Fix`] with the given [`Applicability`] from an [`Edit`]
    /// element.
    pub fn applicable_edit(edit: Edit, applicability: Applicability) -> Self {
        Self::with_edits(edit, [], applicability)
    }

    /// Return the [`TextSize`] of the first [`Edit`] in the [`Fix`].
    pub fn min_start(&self) -> Option<TextSize> {
        self.edits.first().map(Edit::start)
    }

    /// Return a slice of the [`Edit`] elements in the [`Fix`].
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }

    /// The [`Applicability`] of the [`Fix`].
    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    /// Returns `true` if this fix should be applied when `required` is the
    /// minimum acceptable applicability.
    pub fn applies(&self, required: Applicability) -> bool {
        self.applicability >= required
    }
}
