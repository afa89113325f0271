use anyhow::Result;
use colored::Colorize;
use log::{Level, LevelFilter};

pub(crate) fn set_up_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            let label = match record.level() {
                Level::Error => "error:".red().bold(),
                Level::Warn => "warn:".yellow().bold(),
                Level::Info => "info:".bold(),
                Level::Debug | Level::Trace => "debug:".dimmed(),
            };
            out.finish(format_args!("{label} {message}"));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
