//! Template filling: line-by-line placeholder substitution.
//!
//! A token is `<<`, one or more identifier characters (letters, digits,
//! underscore), then `>>`. Each line is scanned left to right for
//! non-overlapping matches; a match that is a key in the token map is
//! replaced by its value, anything else (unknown tokens included) is copied
//! through unchanged. An unterminated `<<Foo` or a bare `Foo>>` never
//! matches and passes through literally.
//!
//! Two entry points share the per-line logic: [`generate_from_file`] reads
//! the template from disk, [`generate_from_str`] takes it in memory. Both
//! normalize any line-ending convention to `\n` and terminate every output
//! line with exactly one `\n`, the final line included, so identical
//! template content produces byte-identical output from either entry point.

use crate::zpl::error::GenerateError;
use crate::zpl::fields::TokenMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy-compiled token pattern, shared by every generation call
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<<[A-Za-z0-9_]+>>").unwrap());

/// Read a label template from disk and fill it with the given token map.
///
/// Fails with [`GenerateError::FileAccess`] when the file cannot be opened
/// and [`GenerateError::Io`] on a read failure mid-stream. The file handle
/// is released on every exit path.
pub fn generate_from_file(
    path: impl AsRef<Path>,
    details: &TokenMap,
) -> Result<String, GenerateError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|_| GenerateError::FileAccess(path.to_path_buf()))?;

    let mut output = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(GenerateError::Io)?;
        output.push_str(&replace_placeholders(&line, details));
        output.push('\n');
    }

    Ok(output)
}

/// Fill an in-memory label template with the given token map.
///
/// Substitution semantics are identical to [`generate_from_file`]; with no
/// I/O involved this cannot fail.
pub fn generate_from_str(template: &str, details: &TokenMap) -> String {
    let mut output = String::new();
    for line in template.lines() {
        output.push_str(&replace_placeholders(line, details));
        output.push('\n');
    }

    output
}

/// Replace every mapped token in a single line, leaving unknown tokens and
/// all non-token text untouched.
fn replace_placeholders(line: &str, details: &TokenMap) -> String {
    TOKEN_REGEX
        .replace_all(line, |caps: &regex::Captures| {
            let token = &caps[0];
            match details.get(token) {
                Some(value) => value.to_string(),
                None => token.to_string(),
            }
        })
        .into_owned()
}
