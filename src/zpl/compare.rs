//! Label comparison for validation tooling.
//!
//! ZPL fields end with the `^FS` field separator, so two labels are compared
//! field-by-field after trimming and stripping non-printable characters.
//! This keeps the comparison robust against fixtures that differ only in
//! trailing whitespace or invisible formatting noise, and reports the first
//! field that actually differs instead of a whole-document mismatch.

use crate::zpl::clean::strip_unprintable;
use std::fmt;

/// The first point at which two labels diverge
#[derive(Debug, Clone, PartialEq)]
pub enum LabelDiff {
    /// The labels contain a different number of `^FS`-separated fields
    FieldCount { generated: usize, expected: usize },
    /// The field at `index` differs between the two labels
    Field {
        index: usize,
        generated: String,
        expected: String,
    },
}

impl fmt::Display for LabelDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelDiff::FieldCount {
                generated,
                expected,
            } => write!(
                f,
                "labels have different field counts: generated {}, expected {}",
                generated, expected
            ),
            LabelDiff::Field {
                index,
                generated,
                expected,
            } => write!(
                f,
                "field {} differs: generated {:?}, expected {:?}",
                index, generated, expected
            ),
        }
    }
}

/// Compare a generated label against an expected one, field by field.
///
/// Returns `None` when the labels match modulo non-printable characters and
/// surrounding whitespace, otherwise the first difference found.
pub fn first_mismatch(generated: &str, expected: &str) -> Option<LabelDiff> {
    let generated = strip_unprintable(generated.trim());
    let expected = strip_unprintable(expected.trim());

    let generated_fields: Vec<&str> = generated.split("^FS").collect();
    let expected_fields: Vec<&str> = expected.split("^FS").collect();

    if generated_fields.len() != expected_fields.len() {
        return Some(LabelDiff::FieldCount {
            generated: generated_fields.len(),
            expected: expected_fields.len(),
        });
    }

    for (index, (gen, exp)) in generated_fields.iter().zip(&expected_fields).enumerate() {
        if gen != exp {
            return Some(LabelDiff::Field {
                index,
                generated: gen.to_string(),
                expected: exp.to_string(),
            });
        }
    }

    None
}
