//! Command-line frontend for the `shrike` import-order linter.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use shrike_diagnostics::{Applicability, Diagnostic};
use shrike_linter::check_source;
use shrike_linter::fix::apply_fixes;
use shrike_linter::rules::sort_imports::settings::{Settings, SortImportsOptions};
use shrike_source_file::LineIndex;
use shrike_text_size::Ranged;

use crate::args::Args;

pub mod args;
mod logging;

#[derive(Copy, Clone, Debug)]
pub enum ExitStatus {
    /// Checking was successful and there were no violations.
    Success,
    /// Checking was successful but there were violations.
    Failure,
    /// Checking failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn run(args: &Args) -> Result<ExitStatus> {
    logging::set_up_logging(args.verbose)?;

    let settings = resolve_settings(args.config.as_deref())?;

    let mut any_violations = false;
    for path in &args.files {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let diagnostics = check_source(&source, &settings);
        let (source, remaining) = if args.fix {
            let required = if args.unsafe_fixes {
                Applicability::Unsafe
            } else {
                Applicability::Safe
            };
            let (fixed, applied) = apply_fixes(&diagnostics, required, &source);
            if applied > 0 {
                fs::write(path, &fixed)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            let remaining = check_source(&fixed, &settings);
            (fixed, remaining)
        } else {
            (source, diagnostics)
        };

        if !remaining.is_empty() {
            any_violations = true;
        }
        print_diagnostics(path, &source, &remaining);
    }

    Ok(if any_violations {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}

fn resolve_settings(config: Option<&Path>) -> Result<Settings> {
    let Some(path) = config else {
        return Ok(Settings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration at {}", path.display()))?;
    let options: SortImportsOptions = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse configuration at {}", path.display()))?;
    let settings = Settings::resolve(options)
        .with_context(|| format!("Invalid configuration at {}", path.display()))?;
    Ok(settings)
}

#[allow(clippy::print_stdout)]
fn print_diagnostics(path: &Path, source: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let index = LineIndex::from_source_text(source);
    for diagnostic in diagnostics {
        let location = index.source_location(diagnostic.start(), source);
        println!(
            "{}:{}:{}: {} {}",
            path.display(),
            location.row,
            location.column,
            diagnostic.kind.name.red().bold(),
            diagnostic.kind.body
        );
    }
}
