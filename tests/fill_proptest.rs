//! Property-based tests for template filling
//!
//! These tests pin down the substitution contract:
//! - Text without tokens passes through unchanged, whatever the map holds
//! - Tokens absent from the map are preserved literally
//! - A mapped token is replaced by exactly its value, nothing more

use proptest::prelude::*;
use zplate::{generate_from_str, TokenMap};

/// Generate template text guaranteed to contain no token: the token syntax
/// needs `<` and `>`, so any line without them is pure pass-through.
fn token_free_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain label text
        "[A-Za-z0-9 ,.:/-]{0,40}",
        // ZPL-looking command lines
        "\\^[A-Z]{2}[0-9]{0,3},[0-9]{0,3}",
        // Text with stray delimiter halves on their own
        "[A-Za-z0-9 ]{0,10}(<<|>>)?[A-Za-z0-9 ]{0,10}",
    ]
}

/// Generate valid token identifiers
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,12}"
}

/// Generate substitution values (printable, no token delimiters)
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ./-]{0,16}"
}

proptest! {
    #[test]
    fn token_free_text_passes_through(
        lines in prop::collection::vec(token_free_line_strategy(), 0..8),
        fields in prop::collection::vec((identifier_strategy(), value_strategy()), 0..6),
    ) {
        let mut details = TokenMap::new();
        for (field, value) in &fields {
            details.set(field, value.as_str());
        }

        let template = lines.join("\n");
        let output = generate_from_str(&template, &details);

        let expected: String = template.lines().map(|l| format!("{}\n", l)).collect();
        prop_assert_eq!(output, expected);
    }

    #[test]
    fn unknown_tokens_are_preserved(ident in identifier_strategy()) {
        let template = format!("^FD<<{}>>^FS", ident);
        let output = generate_from_str(&template, &TokenMap::new());

        prop_assert_eq!(output, format!("^FD<<{}>>^FS\n", ident));
    }

    #[test]
    fn mapped_token_is_replaced_by_its_value(
        prefix in "[A-Za-z0-9 ,.:]{0,20}",
        suffix in "[A-Za-z0-9 ,.:]{0,20}",
        ident in identifier_strategy(),
        value in value_strategy(),
    ) {
        let mut details = TokenMap::new();
        details.set(&ident, value.as_str());

        let template = format!("{}<<{}>>{}", prefix, ident, suffix);
        let output = generate_from_str(&template, &details);

        prop_assert_eq!(output, format!("{}{}{}\n", prefix, value, suffix));
    }

    #[test]
    fn output_always_ends_lines_with_one_terminator(
        lines in prop::collection::vec(token_free_line_strategy(), 1..8),
        trailing_newline in proptest::bool::ANY,
    ) {
        let mut template = lines.join("\n");
        if trailing_newline {
            template.push('\n');
        }

        let output = generate_from_str(&template, &TokenMap::new());

        if template.is_empty() {
            prop_assert!(output.is_empty());
        } else {
            prop_assert!(output.ends_with('\n'));
            prop_assert!(!output.ends_with("\n\n") || template.ends_with("\n\n"));
        }
        prop_assert_eq!(output.lines().count(), template.lines().count());
    }
}
