//! Basic information shared by the generated pkg-config files: the source
//! directories, the package version, and the installation directories.

use crate::{Error, Placeholders};
use clap::Parser;
use std::{
    ffi::OsString,
    path::{self, Path, PathBuf},
};

/// Used when `--prefix` is not given.
pub const DEFAULT_PREFIX: &str = "/usr/local";

const PREFIX_VAR: &str = "${prefix}";
const EXEC_PREFIX_VAR: &str = "${exec_prefix}";

/// Setup basic .pc file info
#[derive(Debug, Parser)]
#[command(name = "pkgconfig")]
pub struct Args {
    /// Version of the package
    #[arg(long)]
    pub version: Option<String>,

    /// Prefix of the installed library
    #[arg(long, value_name = "DIR")]
    pub prefix: Option<String>,

    /// Prefix of the installed programs, if different from the prefix
    #[arg(long, value_name = "DIR")]
    pub exec_prefix: Option<String>,

    /// Includedir of the installed library, if different from ${prefix}/include
    #[arg(long, value_name = "DIR")]
    pub includedir: Option<String>,

    /// Libdir of the installed library, if different from ${exec_prefix}/lib
    #[arg(long, value_name = "DIR")]
    pub libdir: Option<String>,

    /// Top-level source directory of gtksourceview
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub top_srcdir: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BaseConfig {
    pub top_srcdir:  PathBuf,
    /// Location of the win32 build files, where generated `.pc` files are placed.
    pub srcdir:      PathBuf,
    pub version:     String,
    pub prefix:      String,
    pub exec_prefix: String,
    pub includedir:  String,
    pub libdir:      String,
}

/// An installation directory as it will be written, and the path that it refers to.
struct InstallDir {
    expanded: String,
    value:    String,
}

impl BaseConfig {
    /// Parses the command line given to a pkg-config generator.
    pub fn setup<I, T>(argv: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_args(Args::try_parse_from(argv)?)
    }

    pub fn from_args(args: Args) -> Result<Self, Error> {
        let version = args
            .version
            .filter(|version| !version.is_empty())
            .ok_or(Error::MissingArgument("--version"))?;

        let prefix = install_dir("prefix", args.prefix, DEFAULT_PREFIX, &[])?;

        let exec_prefix =
            install_dir("exec_prefix", args.exec_prefix, PREFIX_VAR, &[(PREFIX_VAR, &prefix)])?;

        let shorthands = [(PREFIX_VAR, &prefix), (EXEC_PREFIX_VAR, &exec_prefix)];
        let includedir = install_dir("includedir", args.includedir, "${prefix}/include", &shorthands)?;
        let libdir = install_dir("libdir", args.libdir, "${exec_prefix}/lib", &shorthands)?;

        let top_srcdir = args.top_srcdir;
        let srcdir = top_srcdir.join("win32");

        Ok(BaseConfig {
            top_srcdir,
            srcdir,
            version,
            prefix: prefix.value,
            exec_prefix: exec_prefix.value,
            includedir: includedir.value,
            libdir: libdir.value,
        })
    }

    /// Items which every generated `.pc` file substitutes.
    pub fn base_replace_items(&self) -> Placeholders {
        vec![
            ("@VERSION@", self.version.clone()),
            ("@top_srcdir@", slashed(&self.top_srcdir)),
            ("@srcdir@", slashed(&self.srcdir)),
            ("@prefix@", self.prefix.clone()),
            ("@exec_prefix@", self.exec_prefix.clone()),
            ("@includedir@", self.includedir.clone()),
            ("@libdir@", self.libdir.clone()),
        ]
        .into_iter()
        .collect()
    }
}

/// Resolves an installation directory argument.
///
/// A value beginning with one of the `shorthands` variables is written as given,
/// but the directory it expands to must exist. Any other value must exist, and is
/// written as an absolute path. Defaults are never checked.
fn install_dir(
    name: &'static str,
    arg: Option<String>,
    default: &str,
    shorthands: &[(&str, &InstallDir)],
) -> Result<InstallDir, Error> {
    let expand = |value: &str| {
        shorthands.iter().find_map(|(var, dir)| {
            value.strip_prefix(var).map(|rest| [dir.expanded.as_str(), rest].concat())
        })
    };

    let value = match arg {
        Some(value) => value,
        None => {
            let expanded = expand(default).unwrap_or_else(|| default.to_owned());
            return Ok(InstallDir { expanded, value: default.to_owned() });
        }
    };

    let invalid = || Error::InvalidPath { name, value: value.clone() };

    match expand(&value) {
        Some(expanded) => {
            if !Path::new(&expanded).exists() {
                return Err(invalid());
            }

            Ok(InstallDir { expanded, value: value.replace('\\', "/") })
        }
        None => {
            if !Path::new(&value).exists() {
                return Err(invalid());
            }

            let absolute = path::absolute(&value).map_err(|_| invalid())?;
            Ok(InstallDir { expanded: value.clone(), value: slashed(&absolute) })
        }
    }
}

fn slashed(path: &Path) -> String { path.to_string_lossy().replace('\\', "/") }
