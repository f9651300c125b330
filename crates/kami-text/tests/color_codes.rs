//! Integration tests for chat color-code encoding.
//!
//! These tests verify that:
//! 1. Every recognised `&X` pair becomes `§X`
//! 2. Everything else passes through unchanged
//! 3. Copies of a text value carry identical, independently derived output

use kami_text::{encode, ColorCode, FormattedStringExt, FormattedText, CODE_CHARS, SECTION_SIGN};

#[test]
fn test_badge_message_scenario() {
    let raw = String::from("&7[&a") + "KAMI" + "&7] &r" + "hello";
    let text = FormattedText::new(raw.as_str());

    let expected = format!("{m}7[{m}aKAMI{m}7] {m}rhello", m = SECTION_SIGN);
    assert_eq!(text.encoded(), expected);
    assert_eq!(text.raw(), raw);
    assert_eq!(text.encoded().chars().count(), raw.chars().count());
}

#[test]
fn test_every_code_is_encoded() {
    for &c in CODE_CHARS {
        let raw = format!("&{}", c);
        let expected: String = [SECTION_SIGN, c].iter().collect();
        assert_eq!(encode(&raw), expected, "code {:?} should be encoded", c);
    }
}

#[test]
fn test_uppercase_codes_pass_through() {
    let raw = "&A&B&F&R&L";
    assert_eq!(encode(raw), raw);
}

#[test]
fn test_empty_input() {
    assert_eq!(encode(""), "");
    let text = FormattedText::new("");
    assert!(text.is_empty());
    assert_eq!(text.encoded(), "");
}

#[test]
fn test_only_unmatched_ampersands() {
    for raw in ["&", "&&", "& & &", "&x&y&z", "trailing &"] {
        assert_eq!(encode(raw), raw);
    }
}

#[test]
fn test_non_ascii_text_preserved() {
    let text = FormattedText::new("&c神&r é&é");
    assert_eq!(
        text.encoded(),
        format!("{m}c神{m}r é&é", m = SECTION_SIGN)
    );
}

#[test]
fn test_copy_matches_original() {
    let original = FormattedText::new("&l&nbold?&r plain");
    let copy = original.clone();
    assert_eq!(copy.encoded(), original.encoded());
    assert_eq!(copy.raw(), original.raw());
    assert_eq!(copy.to_string(), original.to_string());
}

#[test]
fn test_encoded_output_strips_back_to_plain() {
    let text = FormattedText::new("&7[&aKAMI&7] &rhello");
    assert!(text.encoded().is_formatted());
    assert_eq!(text.encoded().strip_formatting(), "[KAMI] hello");
    assert_eq!(text.strip(), "[KAMI] hello");
}

#[test]
fn test_codes_report_styles() {
    let text = FormattedText::new("&l&o&m&k&s&r");
    assert!(text.codes().all(|c| !c.is_color()));
    assert_eq!(text.codes().last(), Some(ColorCode::Reset));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_uses_raw_text() {
    let text = FormattedText::new("&ahi");
    let json = serde_json::to_string(&text).expect("serialize");
    assert_eq!(json, "\"&ahi\"");

    let back: FormattedText = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.encoded(), text.encoded());
}
