//! Legacy color and style codes.
//!
//! Chat text carries formatting as two-character pairs: a prefix character
//! followed by a single code character. Authors write the prefix as `&`
//! (the escape character); the encoded form uses the section sign `§`
//! (the marker character), which is what downstream renderers consume.
//!
//! # Codes
//! - `0`-`9`, `a`-`f`: the sixteen colors
//! - `k`: obfuscated
//! - `l`: bold
//! - `m`: strikethrough
//! - `o`: italic
//! - `r`: reset all formatting
//! - `s`: legacy style slot, passed through for renderers that know it
//!
//! Only lowercase code characters are recognised. `&A` is plain text.

use crate::error::ParseCodeError;
use std::fmt;

/// The marker character substituted for `&` in recognised pairs.
pub const SECTION_SIGN: char = '\u{00A7}';

/// The escape character authors write in raw text.
pub const ESCAPE_CHAR: char = '&';

/// Every recognised code character, in the order the legacy pattern lists them.
pub const CODE_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'r', 'l', 'o',
    's', 'm', 'k',
];

/// Returns true if `ch` may follow the escape or marker character.
///
/// # Examples
///
/// ```
/// use kami_text::format::is_code_char;
///
/// assert!(is_code_char('a'));
/// assert!(is_code_char('7'));
/// assert!(is_code_char('r'));
/// assert!(!is_code_char('A')); // uppercase is not a code
/// assert!(!is_code_char('g'));
/// ```
#[inline]
pub fn is_code_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | 'a'..='f' | 'r' | 'l' | 'o' | 's' | 'm' | 'k')
}

/// A single recognised formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Italic,
    Reset,
    /// `s` is accepted by the legacy pattern but has no standard meaning.
    Style,
}

impl ColorCode {
    /// The code character that follows the escape or marker.
    pub fn as_char(self) -> char {
        use ColorCode::*;

        match self {
            Black => '0',
            DarkBlue => '1',
            DarkGreen => '2',
            DarkAqua => '3',
            DarkRed => '4',
            DarkPurple => '5',
            Gold => '6',
            Gray => '7',
            DarkGray => '8',
            Blue => '9',
            Green => 'a',
            Aqua => 'b',
            Red => 'c',
            LightPurple => 'd',
            Yellow => 'e',
            White => 'f',
            Obfuscated => 'k',
            Bold => 'l',
            Strikethrough => 'm',
            Italic => 'o',
            Reset => 'r',
            Style => 's',
        }
    }

    /// Look up a code by its character. Lowercase only.
    pub fn from_char(ch: char) -> Option<Self> {
        use ColorCode::*;

        Some(match ch {
            '0' => Black,
            '1' => DarkBlue,
            '2' => DarkGreen,
            '3' => DarkAqua,
            '4' => DarkRed,
            '5' => DarkPurple,
            '6' => Gold,
            '7' => Gray,
            '8' => DarkGray,
            '9' => Blue,
            'a' => Green,
            'b' => Aqua,
            'c' => Red,
            'd' => LightPurple,
            'e' => Yellow,
            'f' => White,
            'k' => Obfuscated,
            'l' => Bold,
            'm' => Strikethrough,
            'o' => Italic,
            'r' => Reset,
            's' => Style,
            _ => return None,
        })
    }

    /// True for the sixteen color codes.
    pub fn is_color(self) -> bool {
        self.as_char().is_ascii_hexdigit()
    }

    /// True for style codes (everything that is neither a color nor reset).
    pub fn is_style(self) -> bool {
        !self.is_color() && self != ColorCode::Reset
    }

    /// The raw two-character form, e.g. `&a`.
    pub fn escaped(self) -> String {
        [ESCAPE_CHAR, self.as_char()].iter().collect()
    }

    /// The encoded two-character form, e.g. `§a`.
    pub fn marked(self) -> String {
        [SECTION_SIGN, self.as_char()].iter().collect()
    }
}

impl TryFrom<char> for ColorCode {
    type Error = ParseCodeError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(ParseCodeError::UnknownCode(ch))
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SECTION_SIGN, self.as_char())
    }
}
