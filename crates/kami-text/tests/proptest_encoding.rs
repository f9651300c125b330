//! Property-based tests for color-code encoding.
//!
//! Uses proptest to generate arbitrary chat text and verify that:
//! 1. Text without `&` is returned unchanged
//! 2. Encoding preserves the character count
//! 3. Re-deriving from the same raw text is byte-identical
//! 4. Stripping the encoded form equals stripping the raw form
//! 5. No `&X` pair survives encoding
//! 6. Escaped text displays exactly as typed

use kami_text::{
    encode, escape_codes, ColorCode, FormattedStringExt, FormattedText, CODE_CHARS, SECTION_SIGN,
};
use proptest::prelude::*;

/// Chat text biased towards ampersands and code characters.
fn chat_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => Just('&'),
            3 => prop::sample::select(CODE_CHARS.to_vec()),
            1 => prop::sample::select(vec!['A', 'F', 'R', 'g', 'z', ' ', '[', ']']),
            2 => any::<char>().prop_filter("no marker", |c| *c != SECTION_SIGN),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn no_ampersand_is_identity(s in "[^&]{0,200}") {
        prop_assert_eq!(encode(&s), s.as_str());
    }

    #[test]
    fn char_count_is_preserved(s in chat_text_strategy()) {
        let encoded = encode(&s);
        prop_assert_eq!(encoded.chars().count(), s.chars().count());
    }

    #[test]
    fn copies_are_identical(s in chat_text_strategy()) {
        let text = FormattedText::new(s.clone());
        let copy = text.clone();
        prop_assert_eq!(copy.encoded(), text.encoded());
        let again = FormattedText::new(s);
        prop_assert_eq!(again.encoded(), text.encoded());
    }

    #[test]
    fn strip_agrees_on_both_forms(s in chat_text_strategy()) {
        let text = FormattedText::new(s);
        let from_encoded = text.encoded().strip_formatting().into_owned();
        prop_assert_eq!(from_encoded, text.strip());
    }

    #[test]
    fn no_escaped_pair_survives(s in chat_text_strategy()) {
        let encoded = encode(&s).into_owned();
        let mut chars = encoded.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '&' {
                if let Some(next) = chars.peek() {
                    prop_assert!(!CODE_CHARS.contains(next));
                }
            }
        }
    }

    #[test]
    fn escaped_text_displays_literally(s in chat_text_strategy()) {
        let text = FormattedText::new(format!("&7{}", escape_codes(&s, ColorCode::Gray)));
        prop_assert_eq!(text.strip(), s);
    }
}
