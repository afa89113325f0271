//! Ordering of the named bindings within one import declaration.

use std::borrow::Cow;

use shrike_js_ast::{Binding, ImportStatement};
use shrike_source_file::Locator;
use shrike_text_size::{Ranged, TextRange};

use super::sorting::fold_case;

fn member_key<'a>(binding: &'a Binding, ignore_case: bool) -> Cow<'a, str> {
    fold_case(&binding.local_name, ignore_case)
}

/// The first named binding whose key sorts strictly before its predecessor's,
/// if any.
pub(crate) fn first_unsorted_member<'a>(
    statement: &'a ImportStatement,
    ignore_case: bool,
) -> Option<&'a Binding> {
    let named: Vec<&Binding> = statement.named_bindings().collect();
    named
        .windows(2)
        .find(|window| member_key(window[1], ignore_case) < member_key(window[0], ignore_case))
        .map(|window| window[1])
}

/// Returns `true` if a comment sits inside the statement's brace-delimited
/// binding list. Reordering would detach the comment from its binding, so
/// such statements are reported but never rewritten.
pub(crate) fn has_member_comments(statement: &ImportStatement, locator: &Locator) -> bool {
    let text = locator.slice(statement);
    let Some(open) = text.find('{') else {
        return false;
    };
    let Some(close) = text.rfind('}') else {
        return false;
    };
    if close < open {
        return false;
    }
    let members = &text[open..close];
    members.contains("//") || members.contains("/*")
}

/// Rewrite `statement`'s text with its named bindings in ascending key order.
///
/// The sort is stable, and the separator text between adjacent bindings is
/// re-used by position, not carried along with either neighbor. Returns
/// `None` when there is nothing to do (fewer than two named bindings, or
/// already sorted) or when a comment inside the binding list makes the
/// rewrite unsafe.
pub(crate) fn sorted_members_text(
    statement: &ImportStatement,
    locator: &Locator,
    ignore_case: bool,
) -> Option<String> {
    let named: Vec<&Binding> = statement.named_bindings().collect();
    if named.len() < 2 {
        return None;
    }
    if has_member_comments(statement, locator) {
        return None;
    }

    let mut sorted = named.clone();
    sorted.sort_by(|a, b| member_key(a, ignore_case).cmp(&member_key(b, ignore_case)));
    if sorted
        .iter()
        .zip(&named)
        .all(|(sorted, original)| std::ptr::eq(*sorted, *original))
    {
        return None;
    }

    let mut result = String::with_capacity(locator.slice(statement).len());
    result.push_str(locator.slice(TextRange::new(statement.start(), named[0].start())));
    for (index, binding) in sorted.iter().enumerate() {
        if index > 0 {
            let separator = TextRange::new(named[index - 1].end(), named[index].start());
            result.push_str(locator.slice(separator));
        }
        result.push_str(locator.slice(*binding));
    }
    result.push_str(locator.slice(TextRange::new(
        named[named.len() - 1].end(),
        statement.end(),
    )));
    Some(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use shrike_js_ast::parser::parse_imports;
    use shrike_js_ast::ImportStatement;
    use shrike_source_file::Locator;

    use super::{first_unsorted_member, has_member_comments, sorted_members_text};

    fn statement(source: &str) -> ImportStatement {
        let mut statements = parse_imports(source);
        assert_eq!(statements.len(), 1, "fixture must be one declaration");
        statements.remove(0)
    }

    #[test]
    fn detects_first_unsorted_member() {
        let source = "import { b, a, d, c } from 'foo.js';";
        let statement = statement(source);
        let binding = first_unsorted_member(&statement, false).unwrap();
        assert_eq!(binding.local_name, "a");
    }

    #[test]
    fn sorted_members_are_clean() {
        let source = "import { a, b, c } from 'foo.js';";
        let statement = statement(source);
        assert!(first_unsorted_member(&statement, false).is_none());
        assert!(sorted_members_text(&statement, &Locator::new(source), false).is_none());
    }

    #[test]
    fn rewrites_members_in_place() {
        let source = "import { b, a, d, c } from 'foo.js';";
        let statement = statement(source);
        let rewritten = sorted_members_text(&statement, &Locator::new(source), false).unwrap();
        assert_eq!(rewritten, "import { a, b, c, d } from 'foo.js';");
    }

    #[test]
    fn separators_are_positional() {
        // The uneven spacing stays where it was; only the names move.
        let source = "import { b,a,  c } from 'foo.js';";
        let statement = statement(source);
        let rewritten = sorted_members_text(&statement, &Locator::new(source), false).unwrap();
        assert_eq!(rewritten, "import { a,b,  c } from 'foo.js';");
    }

    #[test]
    fn aliases_move_as_a_unit() {
        let source = "import { c as z, a as y } from 'mod';";
        let statement = statement(source);
        // Keys are the local aliases: z then y is out of order.
        let rewritten = sorted_members_text(&statement, &Locator::new(source), false).unwrap();
        assert_eq!(rewritten, "import { a as y, c as z } from 'mod';");
    }

    #[test]
    fn sort_is_stable_under_case_folding() {
        let source = "import { B, a, b } from 'mod';";
        let statement = statement(source);
        let rewritten = sorted_members_text(&statement, &Locator::new(source), true).unwrap();
        // `B` and `b` fold to the same key; their relative order survives.
        assert_eq!(rewritten, "import { a, B, b } from 'mod';");
    }

    #[test]
    fn comments_block_the_rewrite() {
        let source = "import { b, /* keep me */ a } from 'mod';";
        let statement = statement(source);
        let locator = Locator::new(source);
        assert!(has_member_comments(&statement, &locator));
        assert!(sorted_members_text(&statement, &locator, false).is_none());
        // The violation itself is still detectable.
        assert!(first_unsorted_member(&statement, false).is_some());
    }

    #[test]
    fn multiline_members() {
        let source = "import {\n  b,\n  a,\n} from 'mod';";
        let statement = statement(source);
        let rewritten = sorted_members_text(&statement, &Locator::new(source), false).unwrap();
        assert_eq!(rewritten, "import {\n  a,\n  b,\n} from 'mod';");
    }
}
