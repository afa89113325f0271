//! Reconstruction of a corrected run of import declarations.

use std::borrow::Cow;
use std::cmp::Ordering;

use shrike_source_file::Locator;

use super::block::Block;
use super::members::sorted_members_text;
use super::settings::Settings;
use super::sorting::{cmp_member_syntax, cmp_type_placement, fold_case, sort_key};

/// Rebuild `block`'s text with its statements in policy order.
///
/// Each statement's own text is first rewritten with sorted named bindings
/// (where enabled and safe), then the statements are stably sorted and
/// reassembled with the original gap text re-inserted by position: whatever
/// separated run positions `i` and `i + 1` before still separates positions
/// `i` and `i + 1` afterwards.
pub(crate) fn order_imports(block: &Block, locator: &Locator, settings: &Settings) -> String {
    let mut texts: Vec<Cow<'_, str>> = Vec::with_capacity(block.statements.len());
    let mut keys: Vec<Option<Cow<'_, str>>> = Vec::with_capacity(block.statements.len());
    for statement in &block.statements {
        let rewritten = if settings.ignore_member_sort {
            None
        } else {
            sorted_members_text(statement, locator, settings.ignore_case)
        };
        // Sort by the name the emitted statement will lead with, so that a
        // fixed run re-checks clean.
        let key = match &rewritten {
            Some(_)
                if statement
                    .bindings
                    .first()
                    .is_some_and(|binding| binding.kind.is_named()) =>
            {
                statement
                    .named_bindings()
                    .map(|binding| fold_case(&binding.local_name, settings.ignore_case))
                    .min()
            }
            _ => sort_key(statement, settings.ignore_case),
        };
        texts.push(match rewritten {
            Some(text) => Cow::Owned(text),
            None => Cow::Borrowed(locator.slice(*statement)),
        });
        keys.push(key);
    }

    let mut order: Vec<usize> = (0..block.statements.len()).collect();
    order.sort_by(|&left, &right| {
        cmp_type_placement(
            block.statements[left],
            block.statements[right],
            settings.type_sort_strategy,
        )
        .then_with(|| {
            cmp_member_syntax(
                block.statements[left],
                block.statements[right],
                &settings.member_syntax_sort_order,
            )
        })
        .then_with(|| match (&keys[left], &keys[right]) {
            (Some(left), Some(right)) => left.cmp(right),
            _ => Ordering::Equal,
        })
    });

    let mut result = String::new();
    for (position, &index) in order.iter().enumerate() {
        if position > 0 {
            result.push_str(locator.slice(block.gaps[position - 1]));
        }
        result.push_str(&texts[index]);
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use shrike_js_ast::parser::parse_imports;
    use shrike_source_file::Locator;

    use super::super::block::import_blocks;
    use super::super::settings::Settings;
    use super::order_imports;

    fn reorder(source: &str, settings: &Settings) -> String {
        let statements = parse_imports(source);
        let locator = Locator::new(source);
        let blocks = import_blocks(&statements, &locator, settings);
        assert_eq!(blocks.len(), 1, "fixture must form a single run");
        order_imports(&blocks[0], &locator, settings)
    }

    #[test]
    fn statements_are_reordered_with_positional_gaps() {
        let reordered = reorder(
            "import b from 'b';\nimport a from 'a';",
            &Settings::default(),
        );
        assert_eq!(reordered, "import a from 'a';\nimport b from 'b';");
    }

    #[test]
    fn gap_text_keeps_its_position() {
        // The comment separated positions 0 and 1 before; it still does.
        let reordered = reorder(
            "import b from 'b'; // two\nimport a from 'a';",
            &Settings::default(),
        );
        assert_eq!(reordered, "import a from 'a'; // two\nimport b from 'b';");
    }

    #[test]
    fn members_are_sorted_during_reconstruction() {
        let reordered = reorder(
            "import { d, c } from 'y';\nimport { b, a } from 'x';",
            &Settings::default(),
        );
        assert_eq!(
            reordered,
            "import { a, b } from 'x';\nimport { c, d } from 'y';"
        );
    }

    #[test]
    fn reorders_by_post_rewrite_keys() {
        // `{ z, a }` leads with `a` once its members are sorted, so it comes
        // before `{ b }`.
        let reordered = reorder(
            "import { z, a } from 'm1';\nimport { b } from 'm2';",
            &Settings::default(),
        );
        assert_eq!(
            reordered,
            "import { a, z } from 'm1';\nimport { b } from 'm2';"
        );
    }

    #[test]
    fn equal_keys_keep_source_order() {
        let source = "import a from 'first';\nimport a from 'second';";
        assert_eq!(reorder(source, &Settings::default()), source);
    }

    #[test]
    fn ignore_member_sort_leaves_statement_texts_alone() {
        let settings = Settings {
            ignore_member_sort: true,
            ..Settings::default()
        };
        let reordered = reorder(
            "import { d, c } from 'y';\nimport { b, a } from 'x';",
            &settings,
        );
        assert_eq!(
            reordered,
            "import { b, a } from 'x';\nimport { d, c } from 'y';"
        );
    }
}
