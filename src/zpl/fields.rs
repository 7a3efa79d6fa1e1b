//! Field mapping: turning a record of named label fields into the token map
//! consumed by the filler.
//!
//! ## Design
//!
//! Every token key is the field name wrapped in the fixed `<<` / `>>`
//! delimiters, and every value is carried verbatim (no escaping, no
//! trimming). Field names are trusted identifiers (letters, digits,
//! underscore); they are not sanitized here.
//!
//! The record side is deliberately static: instead of walking an arbitrary
//! value's fields at runtime, a record type implements [`Record`] and lists
//! its `(name, value)` pairs explicitly. A non-string field therefore cannot
//! reach the mapper at all; callers convert to text at the call site.

use std::collections::HashMap;

/// The mapping from `<<FieldName>>` token strings to their substitution
/// values for one generation call.
///
/// Built either from a [`Record`] via [`detail_map`], or populated
/// field-by-field with [`TokenMap::set`]. Keys are unique by construction as
/// long as field names are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMap {
    entries: HashMap<String, String>,
}

impl TokenMap {
    /// Create an empty token map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one field, wrapping the name in the token delimiters.
    ///
    /// `set("LotNo", "123")` maps the token `<<LotNo>>` to `123`.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.entries
            .insert(format!("<<{}>>", field), value.into());
    }

    /// Look up the value for an exact token string, delimiters included
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(|s| s.as_str())
    }

    /// Number of mapped tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map holds no tokens
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A flat record of named, string-valued label fields.
///
/// Implementors enumerate their `(field name, value)` pairs; names must be
/// valid token identifiers and unique within the record.
pub trait Record {
    /// The record's fields in declaration order
    fn fields(&self) -> Vec<(&'static str, &str)>;
}

/// Build the token map for a record: one entry per field, key
/// `<<FieldName>>`, value taken verbatim.
pub fn detail_map(record: &impl Record) -> TokenMap {
    let mut map = TokenMap::new();
    for (name, value) in record.fields() {
        map.set(name, value);
    }
    map
}
