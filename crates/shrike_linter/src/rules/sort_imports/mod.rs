//! Rules enforcing a consistent ordering of `import` declarations, modeled
//! on ESLint's [`sort-imports`].
//!
//! Declarations are grouped into runs (broken by blank lines), compared by
//! type-import placement, member-syntax category, and first bound name, and
//! rewritten with a single whole-run replacement when out of order. The
//! original text between statements is preserved byte for byte and re-used by
//! position.
//!
//! [`sort-imports`]: https://eslint.org/docs/latest/rules/sort-imports

pub(crate) mod block;
pub mod categorize;
pub(crate) mod members;
pub(crate) mod order;
pub mod rules;
pub mod settings;
pub(crate) mod sorting;

pub use categorize::MemberSyntax;
