//! Generators for the gtksourceview build files that are produced from `.in`
//! templates: the version header and the pkg-config file.

#[macro_use]
extern crate log;
#[macro_use]
extern crate shrinkwraprs;

pub mod base;
pub mod logging;
pub mod pkgconfig;
pub mod replace;
pub mod version_header;

mod error;

pub use self::{
    base::BaseConfig,
    error::Error,
    replace::{replace_multi, replace_str, Placeholders},
    version_header::VersionTriple,
};

/// Runs a generator with the command line of this process, and exits with a
/// failure status if it could not generate its file.
pub fn run_tool<F>(tool: &'static str, generate: F)
where
    F: FnOnce(std::env::ArgsOs) -> Result<std::path::PathBuf, Error>,
{
    if let Err(why) = logging::install(tool, logging::level_from_env()) {
        eprintln!("{}: failed to install logger: {}", tool, why);
    }

    match generate(std::env::args_os()) {
        Ok(_) => (),
        // Lets clap print help and usage messages with its own exit status.
        Err(Error::Args(why)) => why.exit(),
        Err(why) => {
            if logging::reports_errors() {
                error!("{}", error_chain(&why));
            } else {
                eprintln!("{}: {}", tool, error_chain(&why));
            }

            std::process::exit(1);
        }
    }
}

/// Formats an error along with each of its causes, separated by colons.
pub fn error_chain(why: &dyn std::error::Error) -> String {
    let mut error_message = format!("{}", why);
    let mut cause = why.source();
    while let Some(error) = cause {
        error_message.push_str(format!(": {}", error).as_str());
        cause = error.source();
    }

    error_message
}
