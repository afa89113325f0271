use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "An import-order linter for ECMAScript and TypeScript modules."
)]
pub struct Args {
    /// Files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Apply available fixes in place.
    #[arg(long)]
    pub fix: bool,
    /// Also apply fixes that may move comments between statements.
    #[arg(long, requires = "fix")]
    pub unsafe_fixes: bool,
    /// Path to a JSON file with sort-imports options (`ignoreCase`,
    /// `ignoreMemberSort`, `memberSyntaxSortOrder`, `typeSortStrategy`,
    /// `splitOnComments`).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}
