//! Data model for ECMAScript/TypeScript `import` declarations, together with
//! a tolerant scanner that extracts them from source text.

use shrike_text_size::{Ranged, TextRange};

pub mod parser;

/// How a binding is introduced by an import declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, is_macro::Is)]
pub enum BindingKind {
    /// `import foo from 'mod'`
    Default,
    /// `import * as foo from 'mod'`
    Namespace,
    /// `import { foo } from 'mod'` or `import { foo as bar } from 'mod'`
    Named,
}

/// A single name introduced by an import declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub kind: BindingKind,
    /// The local name bound in this module (the alias for `a as b` forms).
    pub local_name: String,
    /// The span of the whole specifier, including any `as` clause.
    pub range: TextRange,
}

impl Ranged for Binding {
    fn range(&self) -> TextRange {
        self.range
    }
}

/// One `import` declaration.
///
/// Immutable once constructed: rewrites produce new text, never in-place
/// mutation of the statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportStatement {
    /// The value of the module-path string literal.
    pub module_path: String,
    /// The bindings introduced by the declaration, in source order. Empty for
    /// side-effect imports.
    pub bindings: Vec<Binding>,
    /// Whether the declaration is a TypeScript `import type` declaration.
    pub is_type_only: bool,
    /// The span of the declaration, including a trailing semicolon when one
    /// directly follows.
    pub range: TextRange,
}

impl ImportStatement {
    /// The brace-delimited named bindings, in source order.
    pub fn named_bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(|binding| binding.kind.is_named())
    }
}

impl Ranged for ImportStatement {
    fn range(&self) -> TextRange {
        self.range
    }
}
