//! Generates `gtksourceversion.h` from its template.

use crate::{replace_multi, Error, Placeholders};
use clap::Parser;
use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

pub const MAJOR_TOKEN: &str = "@GTK_SOURCE_MAJOR_VERSION@";
pub const MINOR_TOKEN: &str = "@GTK_SOURCE_MINOR_VERSION@";
pub const MICRO_TOKEN: &str = "@GTK_SOURCE_MICRO_VERSION@";

/// Generate gtksourceversion.h
#[derive(Debug, Parser)]
#[command(name = "version-header")]
pub struct Args {
    /// Version of the package
    #[arg(long)]
    pub version: Option<String>,

    /// Top-level source directory of gtksourceview
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub top_srcdir: PathBuf,
}

/// The major, minor, and micro components of a `major.minor.micro` version.
///
/// Components are kept as they were written; they are not required to be numeric.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionTriple {
    pub major: String,
    pub minor: String,
    pub micro: String,
}

impl VersionTriple {
    pub fn replace_items(&self) -> Placeholders {
        vec![
            (MAJOR_TOKEN, self.major.as_str()),
            (MINOR_TOKEN, self.minor.as_str()),
            (MICRO_TOKEN, self.micro.as_str()),
        ]
        .into_iter()
        .collect()
    }
}

impl FromStr for VersionTriple {
    type Err = Error;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedVersion(version.to_owned());

        let mut components = version.split('.');
        let mut next = || components.next().filter(|c| !c.is_empty()).map(String::from);

        let triple = VersionTriple {
            major: next().ok_or_else(malformed)?,
            minor: next().ok_or_else(malformed)?,
            micro: next().ok_or_else(malformed)?,
        };

        match components.next() {
            Some(_) => Err(malformed()),
            None => Ok(triple),
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Parses the command line of the `version-header` tool and generates the header.
pub fn run<I, T>(argv: I) -> Result<PathBuf, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv)?;
    let version = args.version.ok_or(Error::MissingArgument("--version"))?;
    generate(&args.top_srcdir, &version.parse::<VersionTriple>()?)
}

/// Writes `gtksourceview/gtksourceversion.h` beneath `top_srcdir`, returning its path.
pub fn generate(top_srcdir: &Path, version: &VersionTriple) -> Result<PathBuf, Error> {
    let dir = top_srcdir.join("gtksourceview");
    let output = dir.join("gtksourceversion.h");

    replace_multi(dir.join("gtksourceversion.h.in"), &output, &version.replace_items())?;

    info!("generated {} for version {}", output.display(), version);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TEMPLATE: &str = "#define GTK_SOURCE_MAJOR_VERSION (@GTK_SOURCE_MAJOR_VERSION@)\n\
                            #define GTK_SOURCE_MINOR_VERSION (@GTK_SOURCE_MINOR_VERSION@)\n\
                            #define GTK_SOURCE_MICRO_VERSION (@GTK_SOURCE_MICRO_VERSION@)\n";

    fn source_tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("gtksourceview")).unwrap();
        fs::write(dir.path().join("gtksourceview/gtksourceversion.h.in"), TEMPLATE).unwrap();
        dir
    }

    fn argv(top: &Path, extra: &[&str]) -> Vec<OsString> {
        let mut argv: Vec<OsString> = vec!["version-header".into(), "--top-srcdir".into()];
        argv.push(top.into());
        argv.extend(extra.iter().map(OsString::from));
        argv
    }

    #[test]
    fn parse_version_triple() {
        let version: VersionTriple = "3.24.11".parse().unwrap();
        assert_eq!(version.major, "3");
        assert_eq!(version.minor, "24");
        assert_eq!(version.micro, "11");
        assert_eq!(version.to_string(), "3.24.11");
    }

    #[test]
    fn components_are_opaque() {
        let version: VersionTriple = "4.beta.rc1".parse().unwrap();
        assert_eq!(version.minor, "beta");
        assert_eq!(version.micro, "rc1");
    }

    #[test]
    fn malformed_versions() {
        for input in &["", "4", "4.1", "4.1.", "4..2", "4.1.2.3"] {
            match input.parse::<VersionTriple>() {
                Err(Error::MalformedVersion(version)) => assert_eq!(version, *input),
                other => panic!("{:?} parsed as {:?}", input, other),
            }
        }
    }

    #[test]
    fn generates_header() {
        let top = source_tree();
        let output = run(argv(top.path(), &["--version", "4.1.2"])).unwrap();

        let header = fs::read_to_string(&output).unwrap();
        assert_eq!(output, top.path().join("gtksourceview/gtksourceversion.h"));
        assert!(header.contains("GTK_SOURCE_MAJOR_VERSION (4)"));
        assert!(header.contains("GTK_SOURCE_MINOR_VERSION (1)"));
        assert!(header.contains("GTK_SOURCE_MICRO_VERSION (2)"));
        assert!(!header.contains("@GTK_SOURCE_"));
    }

    #[test]
    fn generation_is_idempotent() {
        let top = source_tree();
        let version: VersionTriple = "3.24.11".parse().unwrap();

        let first = fs::read(generate(top.path(), &version).unwrap()).unwrap();
        let second = fs::read(generate(top.path(), &version).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn two_components_write_nothing() {
        let top = source_tree();
        let result = run(argv(top.path(), &["--version", "4.1"]));

        assert!(matches!(result, Err(Error::MalformedVersion(_))));
        assert!(!top.path().join("gtksourceview/gtksourceversion.h").exists());
    }

    #[test]
    fn missing_version_writes_nothing() {
        let top = source_tree();
        let result = run(argv(top.path(), &[]));

        assert!(matches!(result, Err(Error::MissingArgument("--version"))));
        assert!(!top.path().join("gtksourceview/gtksourceversion.h").exists());
    }

    #[test]
    fn missing_template() {
        let top = tempfile::tempdir().unwrap();
        let result = run(argv(top.path(), &["--version", "4.1.2"]));
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let top = source_tree();
        let result = run(argv(top.path(), &["--version", "4.1.2", "--prefix", "/usr"]));
        assert!(matches!(result, Err(Error::Args(_))));
    }
}
