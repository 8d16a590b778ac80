//! Literal placeholder substitution for `.in` templates.

use crate::Error;
use regex::{Captures, Regex};
use std::{collections::BTreeMap, fs, path::Path};

/// Maps placeholder tokens, such as `@VERSION@`, to their replacement values.
#[derive(Clone, Debug, Default, PartialEq, Shrinkwrap)]
pub struct Placeholders(BTreeMap<String, String>);

impl Placeholders {
    pub fn new() -> Self { Self::default() }

    /// Adds every item of `other`, whose values take precedence on a collision.
    pub fn merge(&mut self, other: Placeholders) { self.0.extend(other.0); }

    /// Compiles the tokens into a single alternation, longest tokens first, so
    /// that the longest token wins where several start at the same position.
    fn pattern(&self) -> Result<Regex, Error> {
        let mut tokens: Vec<&str> = self.keys().map(String::as_str).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()));

        let pattern = tokens.into_iter().map(regex::escape).collect::<Vec<_>>().join("|");
        Regex::new(&pattern).map_err(Error::Pattern)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Placeholders(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Replaces every token of `placeholders` found in `content`.
///
/// The content is scanned once. Substituted values are never scanned again, so a
/// value containing the text of another token is emitted as is. Tokens which
/// have no entry in `placeholders` are left untouched.
pub fn replace_str(content: &str, placeholders: &Placeholders) -> Result<String, Error> {
    if placeholders.is_empty() {
        return Ok(content.to_owned());
    }

    if placeholders.keys().any(String::is_empty) {
        return Err(Error::EmptyToken);
    }

    let pattern = placeholders.pattern()?;
    let replaced = pattern.replace_all(content, |caps: &Captures| {
        placeholders.get(&caps[0]).cloned().unwrap_or_default()
    });

    Ok(replaced.into_owned())
}

/// Reads the template at `input`, substitutes its placeholders, and writes the
/// result to `output`, replacing any existing file.
pub fn replace_multi<I: AsRef<Path>, O: AsRef<Path>>(
    input: I,
    output: O,
    placeholders: &Placeholders,
) -> Result<(), Error> {
    let (input, output) = (input.as_ref(), output.as_ref());

    debug!("substituting {} placeholders from {}", placeholders.len(), input.display());

    let content =
        fs::read_to_string(input).map_err(|why| Error::read(input.to_path_buf(), why))?;
    let content = replace_str(&content, placeholders)?;

    fs::write(output, content).map_err(|why| Error::write(output.to_path_buf(), why))?;

    debug!("wrote {}", output.display());
    Ok(())
}
