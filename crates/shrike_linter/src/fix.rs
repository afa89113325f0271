//! Application of diagnostic fixes to source text.

use itertools::Itertools;

use shrike_diagnostics::{Applicability, Diagnostic};
use shrike_source_file::Locator;
use shrike_text_size::{Ranged, TextRange, TextSize};

/// Apply the fixes attached to `diagnostics` to `source`, honoring the
/// `required` applicability threshold. Returns the rewritten text and the
/// number of edits applied.
///
/// Edits are applied in source order. Duplicates collapse (every violation of
/// a run shares the same whole-run replacement), and of two distinct
/// overlapping edits the first wins; the loser's violation shows up again on
/// the next check pass.
pub fn apply_fixes(
    diagnostics: &[Diagnostic],
    required: Applicability,
    source: &str,
) -> (String, usize) {
    let locator = Locator::new(source);
    let mut output = String::with_capacity(source.len());
    let mut last_end = TextSize::default();
    let mut applied = 0;

    let edits = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .filter(|fix| fix.applies(required))
        .flat_map(|fix| fix.edits().iter())
        .sorted_by_key(|edit| (edit.start(), edit.end()))
        .dedup();

    for edit in edits {
        if edit.start() < last_end {
            continue;
        }
        output.push_str(locator.slice(TextRange::new(last_end, edit.start())));
        output.push_str(edit.content().unwrap_or_default());
        last_end = edit.end();
        applied += 1;
    }
    output.push_str(locator.slice(TextRange::new(last_end, locator.text_len())));
    (output, applied)
}
