use std::{io, path::PathBuf};
use thiserror::Error;

/// An error that may occur while generating a build file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("template {} not found", path.display())]
    NotFound {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("permission denied when writing {}", path.display())]
    PermissionDenied {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read template {}", path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("placeholder tokens must not be empty")]
    EmptyToken,
    /// Tokens are escaped, so this only arises when the combined pattern
    /// exceeds the regex size limit.
    #[error("failed to compile placeholder tokens")]
    Pattern(#[source] regex::Error),
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),
    #[error("malformed version '{0}': expected major.minor.micro")]
    MalformedVersion(String),
    #[error("specified {name} '{value}' is invalid")]
    InvalidPath { name: &'static str, value: String },
    #[error("invalid arguments")]
    Args(#[source] clap::Error),
}

impl Error {
    /// Classifies a failure to read the template at `path`.
    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            _ => Error::Read { path, source },
        }
    }

    /// Classifies a failure to write the output at `path`.
    pub(crate) fn write(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            _ => Error::Write { path, source },
        }
    }
}

impl From<clap::Error> for Error {
    fn from(why: clap::Error) -> Self { Error::Args(why) }
}
