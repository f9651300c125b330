//! Ampersand color-code encoding.
//!
//! This module turns author-facing text such as `"&7[&aKAMI&7] &rhello"` into
//! the encoded form renderers expect, where each recognised `&X` pair becomes
//! the section sign followed by `X`. It also provides stripping helpers for
//! both the raw and the encoded forms.
//!
//! Encoding is a single left-to-right scan. Pairs never overlap, so `&&a`
//! keeps the first `&` as text and encodes the second. An `&` that is not
//! followed by a code character is plain text.

use crate::format::{is_code_char, ColorCode, ESCAPE_CHAR, SECTION_SIGN};
use std::borrow::Cow;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// One unit of scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    Text(char),
    Code(ColorCode),
}

/// Splits a string into text characters and `<prefix><code>` pairs.
struct Pieces<'a> {
    chars: Peekable<Chars<'a>>,
    prefix: char,
}

impl<'a> Pieces<'a> {
    fn new(input: &'a str, prefix: char) -> Self {
        Self {
            chars: input.chars().peekable(),
            prefix,
        }
    }
}

impl Iterator for Pieces<'_> {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        let c = self.chars.next()?;
        if c == self.prefix {
            if let Some(code) = self.chars.peek().copied().and_then(ColorCode::from_char) {
                self.chars.next();
                return Some(Piece::Code(code));
            }
        }
        Some(Piece::Text(c))
    }
}

/// Encode every `&X` pair in `raw` as `§X`.
///
/// Returns `Cow::Borrowed` when `raw` contains no `&` at all.
///
/// # Examples
///
/// ```
/// use kami_text::colors::encode;
///
/// assert_eq!(encode("&aok"), "\u{00A7}aok");
/// assert_eq!(encode("fish & chips"), "fish & chips");
/// assert_eq!(encode("&A"), "&A");
/// ```
pub fn encode(raw: &str) -> Cow<'_, str> {
    if !raw.contains(ESCAPE_CHAR) {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len() + raw.len() / 4);
    for piece in Pieces::new(raw, ESCAPE_CHAR) {
        match piece {
            Piece::Text(c) => result.push(c),
            Piece::Code(code) => {
                result.push(SECTION_SIGN);
                result.push(code.as_char());
            }
        }
    }
    Cow::Owned(result)
}

/// Neutralize every `&X` pair in untrusted text so it displays literally.
///
/// An `&` that would start a code is followed by an extra `&` + `resume`
/// pair, so `&k` renders as `&k` in the `resume` color instead of
/// obfuscating what follows. Pass the color the surrounding message uses
/// at that point.
///
/// # Examples
///
/// ```
/// use kami_text::colors::escape_codes;
/// use kami_text::{ColorCode, FormattedText};
///
/// let name = escape_codes("&kfoo", ColorCode::Gray);
/// let text = FormattedText::new(format!("&7{}", name));
/// assert_eq!(text.strip(), "&kfoo");
/// ```
pub fn escape_codes(text: &str, resume: ColorCode) -> Cow<'_, str> {
    if !text.contains(ESCAPE_CHAR) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        result.push(c);
        let starts_code = chars.peek().is_some_and(|&next| is_code_char(next));
        if c == ESCAPE_CHAR && starts_code {
            result.push(ESCAPE_CHAR);
            result.push(resume.as_char());
        }
    }
    Cow::Owned(result)
}

fn strip_pairs(input: &str, prefix: char) -> String {
    Pieces::new(input, prefix)
        .filter_map(|piece| match piece {
            Piece::Text(c) => Some(c),
            Piece::Code(_) => None,
        })
        .collect()
}

/// A chat message with inline `&`-codes, holding both raw and encoded text.
///
/// The raw text never changes after construction. Cloning re-runs the
/// encoder on the raw text instead of copying the encoded buffer.
#[derive(Debug)]
pub struct FormattedText {
    raw: String,
    encoded: String,
}

impl FormattedText {
    /// Encode `raw` into a new text value.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let encoded = encode(&raw).into_owned();
        Self { raw, encoded }
    }

    /// The text as the author wrote it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text with every recognised pair using the marker character.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Consume the value, keeping only the encoded text.
    pub fn into_encoded(self) -> String {
        self.encoded
    }

    /// The text with every recognised pair removed.
    pub fn strip(&self) -> String {
        strip_pairs(&self.raw, ESCAPE_CHAR)
    }

    /// Formatting codes in order of appearance.
    pub fn codes(&self) -> impl Iterator<Item = ColorCode> + '_ {
        Pieces::new(&self.raw, ESCAPE_CHAR).filter_map(|piece| match piece {
            Piece::Code(code) => Some(code),
            Piece::Text(_) => None,
        })
    }

    /// Length of the encoded text in characters. The marker counts as one.
    pub fn len(&self) -> usize {
        self.encoded.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl Clone for FormattedText {
    fn clone(&self) -> Self {
        Self::new(self.raw.clone())
    }
}

impl PartialEq for FormattedText {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for FormattedText {}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl From<&str> for FormattedText {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FormattedText {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FormattedText {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FormattedText {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Extension trait for chat strings.
pub trait FormattedStringExt<'a> {
    /// Check if the string contains a recognised `&X` or `§X` pair.
    fn is_formatted(&self) -> bool;

    /// Remove every `§X` pair from the string.
    ///
    /// Returns `Cow::Borrowed` if no marker was present,
    /// or `Cow::Owned` with the stripped string otherwise.
    fn strip_formatting(self) -> Cow<'a, str>;
}

impl<'a> FormattedStringExt<'a> for &'a str {
    fn is_formatted(&self) -> bool {
        let has_code = |prefix| Pieces::new(self, prefix).any(|p| matches!(p, Piece::Code(_)));
        has_code(ESCAPE_CHAR) || has_code(SECTION_SIGN)
    }

    fn strip_formatting(self) -> Cow<'a, str> {
        if !self.contains(SECTION_SIGN) {
            return Cow::Borrowed(self);
        }
        Cow::Owned(strip_pairs(self, SECTION_SIGN))
    }
}

impl FormattedStringExt<'static> for String {
    fn is_formatted(&self) -> bool {
        self.as_str().is_formatted()
    }

    fn strip_formatting(self) -> Cow<'static, str> {
        if !self.contains(SECTION_SIGN) {
            return Cow::Owned(self);
        }
        Cow::Owned(strip_pairs(&self, SECTION_SIGN))
    }
}
