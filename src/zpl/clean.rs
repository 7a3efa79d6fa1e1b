//! Text cleaning for label comparison.
//!
//! Not part of the substitution path: generated and expected labels are
//! stripped of non-printable characters before being compared, so fixtures
//! that differ only in formatting noise (a BOM, a stray zero-width space)
//! still match.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Remove every non-printable character from a string.
///
/// Printability follows the Unicode general category: letters, marks,
/// numbers, punctuation, and symbols are printable, plus the ASCII space.
/// Everything else (controls, format characters, separators, private-use
/// and unassigned code points) is stripped.
pub fn strip_unprintable(text: &str) -> String {
    text.chars().filter(|&c| is_printable(c)).collect()
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_text_is_unchanged() {
        assert_eq!(
            strip_unprintable("^FO40,40^FDCase Qty: 6^FS"),
            "^FO40,40^FDCase Qty: 6^FS"
        );
    }

    #[test]
    fn control_characters_are_stripped() {
        assert_eq!(strip_unprintable("a\tb\r\nc\u{0}d"), "abcd");
    }

    #[test]
    fn format_characters_are_stripped() {
        // BOM, soft hyphen, zero-width space
        assert_eq!(strip_unprintable("\u{FEFF}a\u{00AD}b\u{200B}c"), "abc");
    }

    #[test]
    fn bom_prefixed_label_text_is_cleaned() {
        assert_eq!(strip_unprintable("\u{FEFF}^XA"), "^XA");
    }

    #[test]
    fn ascii_space_survives_other_whitespace_does_not() {
        assert_eq!(strip_unprintable("a b\u{a0}c\u{2028}d"), "a bcd");
    }

    #[test]
    fn private_use_code_points_are_stripped() {
        assert_eq!(strip_unprintable("a\u{E000}b"), "ab");
    }

    #[test]
    fn non_ascii_letters_and_symbols_are_printable() {
        assert_eq!(strip_unprintable("Größe: 200g ±5%"), "Größe: 200g ±5%");
    }
}
