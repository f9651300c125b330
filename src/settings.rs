//! Process-wide settings store.
//!
//! Settings are typed values keyed by name, each with a default and an
//! optional validator. The store is safe to read and write from any thread.
//! Nothing is persisted; values live for the process lifetime.
//!
//! The command trigger character lives here under [`COMMAND_PREFIX_KEY`].
//! Readers must go through [`command_prefix`] (or
//! [`Settings::command_prefix`]) on every use, since the value can change
//! between two reads.

use dashmap::DashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::{debug, info};

/// Key of the command trigger character.
pub const COMMAND_PREFIX_KEY: &str = "commandPrefix";

/// Trigger character used when nothing else has been configured.
pub const DEFAULT_COMMAND_PREFIX: char = '.';

/// Settings errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingError {
    #[error("unknown setting: {0}")]
    UnknownKey(String),
    #[error("setting {key} expects a {expected} value, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: &'static str },
}

/// A typed setting value.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Char(char),
    Integer(i64),
    Text(String),
}

impl SettingValue {
    /// Name of the value's type, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Char(c) => write!(f, "{}", c),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Text(s) => f.write_str(s),
        }
    }
}

type Validator = fn(&SettingValue) -> Result<(), &'static str>;

struct Entry {
    default: SettingValue,
    current: SettingValue,
    validator: Option<Validator>,
}

/// In-memory key/value settings store.
pub struct Settings {
    entries: DashMap<String, Entry>,
}

impl Settings {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Create a store with every builtin setting defined.
    pub fn with_defaults() -> Self {
        let settings = Self::new();
        settings.define(
            COMMAND_PREFIX_KEY,
            SettingValue::Char(DEFAULT_COMMAND_PREFIX),
            Some(validate_prefix_value),
        );
        settings
    }

    /// Define a setting. Redefining an existing key resets it to the new default.
    pub fn define(&self, key: &str, default: SettingValue, validator: Option<Validator>) {
        debug!(key, default = %default, "Defining setting");
        self.entries.insert(
            key.to_string(),
            Entry {
                current: default.clone(),
                default,
                validator,
            },
        );
    }

    /// Current value of a setting.
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.entries.get(key).map(|entry| entry.current.clone())
    }

    /// Current value of a `char` setting.
    pub fn get_char(&self, key: &str) -> Result<char, SettingError> {
        match self.get(key) {
            Some(SettingValue::Char(c)) => Ok(c),
            Some(other) => Err(SettingError::TypeMismatch {
                key: key.to_string(),
                expected: "char",
                found: other.kind(),
            }),
            None => Err(SettingError::UnknownKey(key.to_string())),
        }
    }

    /// Replace a setting's value, returning the previous one.
    pub fn set(&self, key: &str, value: SettingValue) -> Result<SettingValue, SettingError> {
        let mut entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;

        if entry.default.kind() != value.kind() {
            return Err(SettingError::TypeMismatch {
                key: key.to_string(),
                expected: entry.default.kind(),
                found: value.kind(),
            });
        }
        if let Some(validator) = entry.validator {
            validator(&value).map_err(|reason| SettingError::Invalid {
                key: key.to_string(),
                reason,
            })?;
        }

        info!(key, old = %entry.current, new = %value, "Setting changed");
        Ok(std::mem::replace(&mut entry.current, value))
    }

    /// Restore a setting's default value, returning it.
    pub fn reset(&self, key: &str) -> Result<SettingValue, SettingError> {
        let mut entry = self
            .entries
            .get_mut(key)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string()))?;
        info!(key, old = %entry.current, new = %entry.default, "Setting reset");
        entry.current = entry.default.clone();
        Ok(entry.current.clone())
    }

    /// The current command trigger character.
    ///
    /// Always yields a value: falls back to [`DEFAULT_COMMAND_PREFIX`] if the
    /// setting was never defined.
    pub fn command_prefix(&self) -> char {
        self.get_char(COMMAND_PREFIX_KEY)
            .unwrap_or(DEFAULT_COMMAND_PREFIX)
    }

    /// Change the command trigger character, returning the previous one.
    pub fn set_command_prefix(&self, prefix: char) -> Result<char, SettingError> {
        match self.set(COMMAND_PREFIX_KEY, SettingValue::Char(prefix))? {
            SettingValue::Char(previous) => Ok(previous),
            _ => Ok(DEFAULT_COMMAND_PREFIX),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate_prefix_value(value: &SettingValue) -> Result<(), &'static str> {
    match value {
        SettingValue::Char(c) => validate_prefix(*c),
        _ => Ok(()),
    }
}

/// Check that `c` can serve as the command trigger character.
pub fn validate_prefix(c: char) -> Result<(), &'static str> {
    if c.is_whitespace() {
        return Err("whitespace cannot start a command");
    }
    if c.is_control() {
        return Err("control characters cannot be typed");
    }
    if c == kami_text::ESCAPE_CHAR || c == kami_text::SECTION_SIGN {
        return Err("reserved for color codes");
    }
    if c.is_alphanumeric() {
        return Err("letters and digits would capture ordinary chat");
    }
    Ok(())
}

/// Global settings store for the process.
static SETTINGS: OnceLock<Arc<Settings>> = OnceLock::new();

/// The process-wide settings store, created with defaults on first use.
pub fn settings() -> Arc<Settings> {
    Arc::clone(SETTINGS.get_or_init(|| Arc::new(Settings::with_defaults())))
}

/// The current command trigger character of the process-wide store.
pub fn command_prefix() -> char {
    settings().command_prefix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_defaults_to_dot() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.command_prefix(), '.');
    }

    #[test]
    fn test_prefix_without_definition_still_has_default() {
        let settings = Settings::new();
        assert_eq!(settings.command_prefix(), DEFAULT_COMMAND_PREFIX);
        assert!(matches!(
            settings.set_command_prefix('!'),
            Err(SettingError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_prefix_reads_are_live() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.set_command_prefix('!'), Ok('.'));
        assert_eq!(settings.command_prefix(), '!');
        assert_eq!(settings.set_command_prefix('-'), Ok('!'));
        assert_eq!(settings.command_prefix(), '-');
        assert_eq!(
            settings.reset(COMMAND_PREFIX_KEY),
            Ok(SettingValue::Char('.'))
        );
        assert_eq!(settings.command_prefix(), '.');
    }

    #[test]
    fn test_invalid_prefixes_rejected() {
        let settings = Settings::with_defaults();
        for c in [' ', '&', '\u{00A7}', 'a', '7', '\n'] {
            assert!(
                matches!(
                    settings.set_command_prefix(c),
                    Err(SettingError::Invalid { .. })
                ),
                "{:?} should be rejected",
                c
            );
        }
        assert_eq!(settings.command_prefix(), '.');
    }

    #[test]
    fn test_type_mismatch() {
        let settings = Settings::with_defaults();
        let err = settings
            .set(COMMAND_PREFIX_KEY, SettingValue::Integer(3))
            .unwrap_err();
        assert_eq!(
            err,
            SettingError::TypeMismatch {
                key: COMMAND_PREFIX_KEY.to_string(),
                expected: "char",
                found: "integer",
            }
        );
    }

    #[test]
    fn test_define_and_get() {
        let settings = Settings::with_defaults();
        settings.define("chatBadge", SettingValue::Text("KAMI".into()), None);
        assert_eq!(
            settings.get("chatBadge"),
            Some(SettingValue::Text("KAMI".into()))
        );
        assert_eq!(settings.get("missing"), None);
    }
}
