//! Colored stderr logging for the generator tools.

use fern::{Dispatch, InitError};
use log::{Level, LevelFilter};
use std::{env, io};
use yansi::Paint;

/// Environment variable which overrides the default log level.
pub const LOG_VAR: &str = "GSV_GEN_LOG";

/// The level requested through `GSV_GEN_LOG`, or `Info`.
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_VAR).ok().and_then(|level| level.parse().ok()).unwrap_or(LevelFilter::Info)
}

/// Installs the fern logger for the `tool` binary.
pub fn install(tool: &'static str, filter: LevelFilter) -> Result<(), InitError> {
    Dispatch::new()
        // Exclude logs for crates that we use
        .level(LevelFilter::Off)
        .level_for("gtksourceview_gen", filter)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:5}] {}",
                Paint::new(tool).bold(),
                paint_level(record.level()),
                message
            ))
        })
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

/// Whether error records currently reach the installed logger.
pub fn reports_errors() -> bool { log::max_level() >= LevelFilter::Error }

fn paint_level(level: Level) -> Paint<Level> {
    match level {
        Level::Trace | Level::Debug => Paint::cyan(level).bold(),
        Level::Info => Paint::green(level).bold(),
        Level::Warn => Paint::yellow(level).bold(),
        Level::Error => Paint::red(level).bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_info() {
        env::remove_var(LOG_VAR);
        assert_eq!(level_from_env(), LevelFilter::Info);
    }

    #[test]
    fn errors_are_not_reported_without_a_logger() {
        // No logger is installed in the test harness, so records are discarded.
        assert!(!reports_errors());
    }
}
