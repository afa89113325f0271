//! Lint rules for the ordering of ECMAScript/TypeScript `import`
//! declarations.

pub mod fix;
pub mod rules;

pub use shrike_source_file::Locator;

use shrike_diagnostics::Diagnostic;
use shrike_js_ast::parser::parse_imports;

use crate::rules::sort_imports::settings::Settings;

/// Scan `source` for import declarations and check them against the
/// configured ordering policy. Diagnostics are returned in source order.
pub fn check_source(source: &str, settings: &Settings) -> Vec<Diagnostic> {
    let statements = parse_imports(source);
    let locator = Locator::new(source);
    rules::sort_imports::rules::sort_imports(&statements, &locator, settings)
}
