//! Comparators for ordering import declarations within a run.
//!
//! The total order is, most to least significant: type-import placement,
//! member-syntax precedence, then the statement's name key. Every comparator
//! returns `Ordering::Equal` for ties so that a stable sort preserves the
//! original relative order.

use std::borrow::Cow;
use std::cmp::Ordering;

use shrike_js_ast::ImportStatement;

use super::categorize::MemberSyntax;
use super::settings::{MemberSyntaxOrder, TypeSortStrategy};

/// Fold `name` for comparison. Display text is never re-cased; folding is
/// comparison-only.
pub(crate) fn fold_case(name: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

/// The key a declaration sorts by: its first bound local name, or the module
/// path for side-effect imports. `None` when there is nothing comparable; a
/// pair involving such a statement counts as already ordered.
pub(crate) fn sort_key<'a>(
    statement: &'a ImportStatement,
    ignore_case: bool,
) -> Option<Cow<'a, str>> {
    let name = match statement.bindings.first() {
        Some(binding) => binding.local_name.as_str(),
        None => statement.module_path.as_str(),
    };
    if name.is_empty() {
        return None;
    }
    Some(fold_case(name, ignore_case))
}

/// Compare two declarations by the configured type-import placement. Under
/// the `mixed` strategy this criterion never decides.
pub(crate) fn cmp_type_placement(
    a: &ImportStatement,
    b: &ImportStatement,
    strategy: TypeSortStrategy,
) -> Ordering {
    match strategy {
        TypeSortStrategy::Mixed => Ordering::Equal,
        TypeSortStrategy::Before => b.is_type_only.cmp(&a.is_type_only),
        TypeSortStrategy::After => a.is_type_only.cmp(&b.is_type_only),
    }
}

/// Compare two declarations by the configured member-syntax precedence.
pub(crate) fn cmp_member_syntax(
    a: &ImportStatement,
    b: &ImportStatement,
    order: &MemberSyntaxOrder,
) -> Ordering {
    order
        .rank(MemberSyntax::of(a))
        .cmp(&order.rank(MemberSyntax::of(b)))
}

/// Compare two declarations by name key.
pub(crate) fn cmp_names(a: &ImportStatement, b: &ImportStatement, ignore_case: bool) -> Ordering {
    match (sort_key(a, ignore_case), sort_key(b, ignore_case)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use shrike_js_ast::parser::parse_imports;
    use shrike_js_ast::ImportStatement;

    use super::super::settings::{MemberSyntaxOrder, TypeSortStrategy};
    use super::{cmp_member_syntax, cmp_names, cmp_type_placement, sort_key};

    fn statement(source: &str) -> ImportStatement {
        let mut statements = parse_imports(source);
        assert_eq!(statements.len(), 1, "fixture must be one declaration");
        statements.remove(0)
    }

    #[test]
    fn keys() {
        let default = statement("import foo from 'mod';");
        assert_eq!(sort_key(&default, false).as_deref(), Some("foo"));

        let named = statement("import { b as c, a } from 'mod';");
        assert_eq!(sort_key(&named, false).as_deref(), Some("c"));

        let side_effect = statement("import './setup.js';");
        assert_eq!(sort_key(&side_effect, false).as_deref(), Some("./setup.js"));

        let folded = statement("import Foo from 'mod';");
        assert_eq!(sort_key(&folded, true).as_deref(), Some("foo"));
        assert_eq!(sort_key(&folded, false).as_deref(), Some("Foo"));
    }

    #[test]
    fn name_comparison_is_case_sensitive_by_default() {
        let lower = statement("import a from 'a';");
        let upper = statement("import A from 'b';");
        // Uppercase letters sort before lowercase ones by code unit.
        assert_eq!(cmp_names(&upper, &lower, false), Ordering::Less);
        assert_eq!(cmp_names(&upper, &lower, true), Ordering::Equal);
    }

    #[test]
    fn type_placement() {
        let value = statement("import bar from 'bar';");
        let type_only = statement("import type foo from 'foo';");

        assert_eq!(
            cmp_type_placement(&value, &type_only, TypeSortStrategy::Mixed),
            Ordering::Equal
        );
        assert_eq!(
            cmp_type_placement(&type_only, &value, TypeSortStrategy::Before),
            Ordering::Less
        );
        assert_eq!(
            cmp_type_placement(&type_only, &value, TypeSortStrategy::After),
            Ordering::Greater
        );
    }

    #[test]
    fn syntax_precedence_uses_configured_ranks() {
        let single = statement("import def from 'mod';");
        let multiple = statement("import { a } from 'mod';");

        let order = MemberSyntaxOrder::default();
        assert_eq!(cmp_member_syntax(&multiple, &single, &order), Ordering::Less);
    }
}
