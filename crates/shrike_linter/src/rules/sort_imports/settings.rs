//! Settings for the `sort_imports` rule family.

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use super::categorize::MemberSyntax;

/// Where type-only imports are placed relative to value imports.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeSortStrategy {
    /// Type-only imports sort together with value imports.
    #[default]
    Mixed,
    /// All type-only imports come before all value imports in a run.
    Before,
    /// All type-only imports come after all value imports in a run.
    After,
}

impl Display for TypeSortStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mixed => write!(f, "mixed"),
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// A permutation of the four member-syntax categories, most significant
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSyntaxOrder([MemberSyntax; 4]);

impl MemberSyntaxOrder {
    /// The rank of `syntax` in the configured precedence; lower sorts first.
    pub fn rank(&self, syntax: MemberSyntax) -> usize {
        self.0
            .iter()
            .position(|&candidate| candidate == syntax)
            .unwrap_or(self.0.len())
    }
}

impl Default for MemberSyntaxOrder {
    fn default() -> Self {
        Self([
            MemberSyntax::None,
            MemberSyntax::All,
            MemberSyntax::Multiple,
            MemberSyntax::Single,
        ])
    }
}

impl TryFrom<Vec<MemberSyntax>> for MemberSyntaxOrder {
    type Error = SettingsError;

    fn try_from(order: Vec<MemberSyntax>) -> Result<Self, SettingsError> {
        let [first, second, third, fourth] = order.as_slice() else {
            return Err(SettingsError::IncompleteSyntaxOrder);
        };
        if MemberSyntax::iter().any(|syntax| !order.contains(&syntax)) {
            return Err(SettingsError::IncompleteSyntaxOrder);
        }
        Ok(Self([*first, *second, *third, *fourth]))
    }
}

impl Display for MemberSyntaxOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [first, second, third, fourth] = &self.0;
        write!(f, "[{first}, {second}, {third}, {fourth}]")
    }
}

/// Error returned when resolving [`SortImportsOptions`] into [`Settings`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error(
        "`memberSyntaxSortOrder` must list each of 'none', 'all', 'multiple', and 'single' exactly once"
    )]
    IncompleteSyntaxOrder,
}

/// Caller-supplied options, spelled the way the host configuration spells
/// them. Resolved into [`Settings`] before any file is analyzed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct SortImportsOptions {
    /// Case-fold all name comparisons. Emitted text is never re-cased.
    pub ignore_case: bool,
    /// Disable ordering checks and fixes for the named bindings within each
    /// declaration.
    pub ignore_member_sort: bool,
    /// Precedence of the four member-syntax categories. Must name each
    /// category exactly once.
    pub member_syntax_sort_order: Option<Vec<MemberSyntax>>,
    /// Placement of TypeScript `import type` declarations.
    pub type_sort_strategy: TypeSortStrategy,
    /// Treat any commented or otherwise non-blank gap between two imports as
    /// a run boundary, instead of only blank lines.
    pub split_on_comments: bool,
}

/// Immutable policy snapshot for one analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ignore_case: bool,
    pub ignore_member_sort: bool,
    pub member_syntax_sort_order: MemberSyntaxOrder,
    pub type_sort_strategy: TypeSortStrategy,
    pub split_on_comments: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore_case: false,
            ignore_member_sort: false,
            member_syntax_sort_order: MemberSyntaxOrder::default(),
            type_sort_strategy: TypeSortStrategy::default(),
            split_on_comments: false,
        }
    }
}

impl Settings {
    /// Validate and freeze caller-supplied options.
    ///
    /// A malformed option set is a configuration error surfaced once, up
    /// front; it never becomes a per-file diagnostic.
    pub fn resolve(options: SortImportsOptions) -> Result<Self, SettingsError> {
        let member_syntax_sort_order = match options.member_syntax_sort_order {
            Some(order) => MemberSyntaxOrder::try_from(order)?,
            None => MemberSyntaxOrder::default(),
        };
        Ok(Self {
            ignore_case: options.ignore_case,
            ignore_member_sort: options.ignore_member_sort,
            member_syntax_sort_order,
            type_sort_strategy: options.type_sort_strategy,
            split_on_comments: options.split_on_comments,
        })
    }
}

impl Display for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "ignore_case = {}", self.ignore_case)?;
        writeln!(f, "ignore_member_sort = {}", self.ignore_member_sort)?;
        writeln!(
            f,
            "member_syntax_sort_order = {}",
            self.member_syntax_sort_order
        )?;
        writeln!(f, "type_sort_strategy = {}", self.type_sort_strategy)?;
        writeln!(f, "split_on_comments = {}", self.split_on_comments)?;
        Ok(())
    }
}
