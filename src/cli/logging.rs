//! Logger setup for the binary

use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Level implied by the global `--verbose`/`--quiet` flags.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Warn,
        (false, false) => LevelFilter::Info,
    }
}

/// Install the process-wide logger. Call once, before any command runs.
pub fn init(verbose: bool, quiet: bool) -> Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(level_for(verbose, quiet))
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Debug);
        assert_eq!(level_for(false, true), LevelFilter::Warn);
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }
}
