use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use shrike_js_ast::{BindingKind, ImportStatement};

/// The shape of the bindings introduced by an import declaration.
///
/// Exactly one category applies to every declaration, derived from the shape
/// of its first binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum MemberSyntax {
    /// A side-effect import with no bindings: `import './polyfill.js'`.
    None,
    /// A namespace import: `import * as fs from 'fs'`.
    All,
    /// Named bindings in braces: `import { a, b } from 'mod'`.
    Multiple,
    /// A lone default binding: `import def from 'mod'`.
    Single,
}

impl MemberSyntax {
    /// Classify a declaration by the shape of its first binding.
    pub fn of(statement: &ImportStatement) -> Self {
        match statement.bindings.first() {
            None => Self::None,
            Some(binding) => match binding.kind {
                BindingKind::Namespace => Self::All,
                BindingKind::Default => Self::Single,
                BindingKind::Named => Self::Multiple,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::All => "all",
            Self::Multiple => "multiple",
            Self::Single => "single",
        }
    }
}

impl fmt::Display for MemberSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use shrike_js_ast::parser::parse_imports;

    use super::MemberSyntax;

    #[test_case("import './side-effect.js';", MemberSyntax::None)]
    #[test_case("import * as ns from 'mod';", MemberSyntax::All)]
    #[test_case("import { a, b } from 'mod';", MemberSyntax::Multiple)]
    #[test_case("import def from 'mod';", MemberSyntax::Single)]
    #[test_case("import def, { a } from 'mod';", MemberSyntax::Single)]
    #[test_case("import def, * as ns from 'mod';", MemberSyntax::Single)]
    #[test_case("import type { T } from 'mod';", MemberSyntax::Multiple)]
    fn classify(source: &str, expected: MemberSyntax) {
        let statements = parse_imports(source);
        assert_eq!(statements.len(), 1);
        assert_eq!(MemberSyntax::of(&statements[0]), expected);
    }
}
