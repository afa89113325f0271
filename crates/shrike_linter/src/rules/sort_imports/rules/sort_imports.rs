use std::cmp::Ordering;

use log::debug;

use shrike_diagnostics::{Applicability, Diagnostic, Edit, Fix, FixAvailability, Violation};
use shrike_js_ast::ImportStatement;
use shrike_source_file::Locator;
use shrike_text_size::Ranged;

use super::super::block::{import_blocks, Block};
use super::super::categorize::MemberSyntax;
use super::super::members::{first_unsorted_member, has_member_comments};
use super::super::order::order_imports;
use super::super::settings::{Settings, TypeSortStrategy};
use super::super::sorting::{cmp_names, cmp_type_placement};

/// ## What it does
/// Checks that the import declarations of a run are alphabetized by their
/// first bound name (or module path, for side-effect imports).
///
/// ## Why is this bad?
/// Consistency is good. A predictable import order makes it easier to scan a
/// module's dependencies.
///
/// ## Example
/// ```js
/// import b from 'b';
/// import a from 'a';
/// ```
///
/// Use instead:
/// ```js
/// import a from 'a';
/// import b from 'b';
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct UnsortedImport;

impl Violation for UnsortedImport {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Sometimes;

    fn rule_name(&self) -> &'static str {
        "UnsortedImport"
    }

    fn message(&self) -> String {
        "Imports should be sorted alphabetically".to_string()
    }

    fn fix_title(&self) -> Option<String> {
        Some("Reorder the import run".to_string())
    }
}

/// ## What it does
/// Checks that import declarations appear in the configured member-syntax
/// order (by default: side-effect, namespace, named, then default imports).
#[derive(Debug, PartialEq, Eq)]
pub struct UnexpectedSyntaxOrder {
    current: MemberSyntax,
    previous: MemberSyntax,
}

impl Violation for UnexpectedSyntaxOrder {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Sometimes;

    fn rule_name(&self) -> &'static str {
        "UnexpectedSyntaxOrder"
    }

    fn message(&self) -> String {
        let UnexpectedSyntaxOrder { current, previous } = self;
        format!("Expected '{current}' syntax before '{previous}' syntax")
    }

    fn fix_title(&self) -> Option<String> {
        Some("Reorder the import run".to_string())
    }
}

/// ## What it does
/// Checks that TypeScript `import type` declarations are grouped on the
/// configured side of the value imports in their run.
#[derive(Debug, PartialEq, Eq)]
pub struct MisplacedTypeImport {
    strategy: TypeSortStrategy,
}

impl Violation for MisplacedTypeImport {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Sometimes;

    fn rule_name(&self) -> &'static str {
        "MisplacedTypeImport"
    }

    fn message(&self) -> String {
        // Only the `before` and `after` strategies ever produce this
        // violation.
        match self.strategy {
            TypeSortStrategy::After => "Expected type imports after value imports".to_string(),
            _ => "Expected type imports before value imports".to_string(),
        }
    }

    fn fix_title(&self) -> Option<String> {
        Some("Reorder the import run".to_string())
    }
}

/// ## What it does
/// Checks that the named bindings of an import declaration are alphabetized.
///
/// ## Example
/// ```js
/// import { b, a } from 'mod';
/// ```
///
/// Use instead:
/// ```js
/// import { a, b } from 'mod';
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct UnsortedImportMembers {
    name: String,
}

impl Violation for UnsortedImportMembers {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Sometimes;

    fn rule_name(&self) -> &'static str {
        "UnsortedImportMembers"
    }

    fn message(&self) -> String {
        let UnsortedImportMembers { name } = self;
        format!("Member '{name}' of the import declaration should be sorted alphabetically")
    }

    fn fix_title(&self) -> Option<String> {
        Some("Sort the import members".to_string())
    }
}

/// Check a file's import declarations against the configured ordering
/// policy.
///
/// `statements` must be in source order. Diagnostics come back in source
/// order as well; every diagnostic for a run carries the same whole-run
/// replacement fix, so applying any one of them corrects the entire run.
pub fn sort_imports(
    statements: &[ImportStatement],
    locator: &Locator,
    settings: &Settings,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for block in import_blocks(statements, locator, settings) {
        check_block(&block, locator, settings, &mut diagnostics);
    }
    diagnostics
}

fn check_block(
    block: &Block,
    locator: &Locator,
    settings: &Settings,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let fix = block_fix(block, locator, settings);

    let mut previous: Option<&ImportStatement> = None;
    for &statement in &block.statements {
        if let Some(previous) = previous {
            if let Some(mut diagnostic) = check_pair(previous, statement, settings) {
                if let Some(fix) = &fix {
                    diagnostic.set_fix(fix.clone());
                }
                diagnostics.push(diagnostic);
            }
        }

        if !settings.ignore_member_sort {
            if let Some(binding) = first_unsorted_member(statement, settings.ignore_case) {
                let mut diagnostic = Diagnostic::new(
                    UnsortedImportMembers {
                        name: binding.local_name.clone(),
                    },
                    binding.range(),
                );
                if has_member_comments(statement, locator) {
                    // A comment inside the binding list pins the bindings in
                    // place: report, but offer no fix.
                    debug!(
                        "withholding fix for {}: comment inside the binding list",
                        diagnostic.kind.name
                    );
                } else if let Some(fix) = &fix {
                    diagnostic.set_fix(fix.clone());
                }
                diagnostics.push(diagnostic);
            }
        }

        previous = Some(statement);
    }
}

/// The shared whole-run replacement for any violation in `block`, or `None`
/// when reordering would change nothing.
fn block_fix(block: &Block, locator: &Locator, settings: &Settings) -> Option<Fix> {
    let content = order_imports(block, locator, settings);
    let range = block.range();
    if content == locator.slice(range) {
        return None;
    }
    // Reordering moves statements across gap text by position; when that gap
    // text contains a comment, the comment may end up attached to a
    // different statement.
    let applicability = if block.gaps.iter().any(|gap| {
        let text = locator.slice(*gap);
        text.contains("//") || text.contains("/*")
    }) {
        Applicability::Unsafe
    } else {
        Applicability::Safe
    };
    Some(Fix::applicable_edit(
        Edit::range_replacement(content, range),
        applicability,
    ))
}

/// Compare one adjacent pair within a run, reporting at most one violation at
/// the most significant criterion that disagrees with the required order.
fn check_pair(
    previous: &ImportStatement,
    current: &ImportStatement,
    settings: &Settings,
) -> Option<Diagnostic> {
    match cmp_type_placement(previous, current, settings.type_sort_strategy) {
        Ordering::Greater => {
            return Some(Diagnostic::new(
                MisplacedTypeImport {
                    strategy: settings.type_sort_strategy,
                },
                current.range(),
            ));
        }
        // Ordered at the most significant criterion; nothing below applies.
        Ordering::Less => return None,
        Ordering::Equal => {}
    }

    let previous_syntax = MemberSyntax::of(previous);
    let current_syntax = MemberSyntax::of(current);
    let order = &settings.member_syntax_sort_order;
    match order.rank(previous_syntax).cmp(&order.rank(current_syntax)) {
        Ordering::Greater => {
            return Some(Diagnostic::new(
                UnexpectedSyntaxOrder {
                    current: current_syntax,
                    previous: previous_syntax,
                },
                current.range(),
            ));
        }
        Ordering::Less => return None,
        Ordering::Equal => {}
    }

    if cmp_names(previous, current, settings.ignore_case) == Ordering::Greater {
        return Some(Diagnostic::new(UnsortedImport, current.range()));
    }
    None
}
