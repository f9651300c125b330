//! # kami-text
//!
//! Encoding for legacy ampersand color codes in chat text.
//!
//! ## Features
//!
//! - `&X` escape pairs encoded to `§X` marker pairs
//! - Immutable [`FormattedText`] values that keep the raw text alongside the
//!   encoded text
//! - Stripping helpers for raw and encoded text
//! - Optional `serde` support (serialized as the raw text)

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use kami_text::{FormattedText, SECTION_SIGN};
//!
//! let text = FormattedText::new("&7[&aKAMI&7] &rhello");
//! assert!(text.encoded().starts_with(SECTION_SIGN));
//! assert_eq!(text.strip(), "[KAMI] hello");
//! ```

#[allow(missing_docs)]
pub mod colors;
#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod format;

pub use self::colors::{encode, escape_codes, FormattedStringExt, FormattedText};
pub use self::error::ParseCodeError;
pub use self::format::{is_code_char, ColorCode, CODE_CHARS, ESCAPE_CHAR, SECTION_SIGN};
