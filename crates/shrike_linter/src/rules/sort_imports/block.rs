//! Partitioning of a file's import declarations into contiguous runs.

use shrike_js_ast::ImportStatement;
use shrike_source_file::Locator;
use shrike_text_size::{Ranged, TextRange};

use super::settings::Settings;

/// A maximal contiguous run of import declarations.
///
/// `gaps[i]` is the verbatim source between statements `i` and `i + 1` in
/// original order. When a run is reordered, gap text is re-inserted by
/// position, never regenerated.
#[derive(Debug)]
pub(crate) struct Block<'a> {
    pub(crate) statements: Vec<&'a ImportStatement>,
    pub(crate) gaps: Vec<TextRange>,
}

impl Block<'_> {
    /// The span a fix for this run replaces: from the first statement's start
    /// to the last statement's end.
    pub(crate) fn range(&self) -> TextRange {
        match (self.statements.first(), self.statements.last()) {
            (Some(first), Some(last)) => TextRange::new(first.start(), last.end()),
            _ => TextRange::default(),
        }
    }
}

/// Split `statements` into maximal runs with a single left-to-right scan.
///
/// A new run starts when consecutive statements are separated by more than
/// one line ending (at least one full blank or non-import line sits between
/// them), or, under `split_on_comments`, by any gap with non-blank content.
pub(crate) fn import_blocks<'a>(
    statements: &'a [ImportStatement],
    locator: &Locator,
    settings: &Settings,
) -> Vec<Block<'a>> {
    let mut blocks: Vec<Block<'a>> = Vec::new();
    for statement in statements {
        if let Some(block) = blocks.last_mut() {
            if let Some(previous) = block.statements.last() {
                if previous.end() <= statement.start() {
                    let gap = TextRange::new(previous.end(), statement.start());
                    if !is_boundary(gap, locator, settings) {
                        block.gaps.push(gap);
                        block.statements.push(statement);
                        continue;
                    }
                }
            }
        }
        blocks.push(Block {
            statements: vec![statement],
            gaps: Vec::new(),
        });
    }
    blocks
}

fn is_boundary(gap: TextRange, locator: &Locator, settings: &Settings) -> bool {
    if locator.count_lines(gap) > 1 {
        return true;
    }
    if settings.split_on_comments {
        let text = locator.slice(gap);
        if text.chars().any(|c| !c.is_whitespace() && c != ';') {
            return true;
        }
    }
    false
}
