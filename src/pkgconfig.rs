//! Generates the `gtksourceview-<API_VERSION>.pc` pkg-config file.

use crate::{replace_multi, BaseConfig, Error, Placeholders};
use std::{ffi::OsString, path::PathBuf};

pub const PACKAGE_NAME: &str = "gtksourceview";
pub const API_VERSION: &str = "3.0";

pub const GLIB_REQ_VERSION: &str = "2.48";
pub const GTK_REQ_VERSION: &str = "3.20";
pub const LIBXML2_REQ_VERSION: &str = "2.6";

/// Public `Requires` of the package.
pub fn requires() -> String {
    [
        ("glib-2.0", GLIB_REQ_VERSION),
        ("gio-2.0", GLIB_REQ_VERSION),
        ("gtk+-3.0", GTK_REQ_VERSION),
    ]
    .iter()
    .map(|(name, version)| [*name, " >= ", *version].concat())
    .collect::<Vec<_>>()
    .join(" ")
}

/// `Requires.private` of the package.
pub fn requires_private() -> String { ["libxml-2.0 >= ", LIBXML2_REQ_VERSION].concat() }

/// File name of the generated pkg-config file.
pub fn file_name() -> String { [PACKAGE_NAME, "-", API_VERSION, ".pc"].concat() }

/// Items substituted in `gtksourceview.pc.in`.
///
/// The items of `base` take precedence over the package items.
pub fn replace_items(base: &BaseConfig) -> Placeholders {
    let mut items: Placeholders = vec![
        ("@PACKAGE_NAME@", PACKAGE_NAME.to_owned()),
        ("@AX_PACKAGE_REQUIRES@", requires()),
        ("@AX_PACKAGE_REQUIRES_PRIVATE@", requires_private()),
        ("@GSV_API_VERSION@", API_VERSION.to_owned()),
        ("@PACKAGE_VERSION@", base.version.clone()),
    ]
    .into_iter()
    .collect();

    items.merge(base.base_replace_items());
    items
}

/// Parses the command line of the `pkgconfig` tool and generates the `.pc` file.
pub fn run<I, T>(argv: I) -> Result<PathBuf, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    generate(&BaseConfig::setup(argv)?)
}

/// Writes the `.pc` file into the `srcdir` of `base`, returning its path.
pub fn generate(base: &BaseConfig) -> Result<PathBuf, Error> {
    let output = base.srcdir.join(file_name());

    replace_multi(base.top_srcdir.join("gtksourceview.pc.in"), &output, &replace_items(base))?;

    info!("generated {}", output.display());
    Ok(output)
}
