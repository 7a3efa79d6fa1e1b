//! Errors during label generation

use std::fmt;
use std::path::PathBuf;

/// Errors a generation call can return.
///
/// Only I/O can fail: either the template file cannot be opened, or reading
/// it fails mid-stream. Unknown or malformed tokens, empty records, and
/// empty templates are normal data conditions, not errors.
#[derive(Debug)]
pub enum GenerateError {
    /// The template file could not be opened
    FileAccess(PathBuf),
    /// Reading the template file failed after it was opened
    Io(std::io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::FileAccess(path) => {
                write!(f, "cannot open template file at path {}", path.display())
            }
            GenerateError::Io(err) => write!(f, "error reading template file: {}", err),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::FileAccess(_) => None,
            GenerateError::Io(err) => Some(err),
        }
    }
}
