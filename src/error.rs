//! Unified error handling for kami.
//!
//! This module provides the error hierarchy for command registration and
//! dispatch, with chat reply generation and log labeling.

use crate::settings::SettingError;
use kami_text::{ColorCode, escape_codes};
use thiserror::Error;

// ============================================================================
// Command Errors (raised by command bodies)
// ============================================================================

/// Errors raised while a command executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error(transparent)]
    Setting(#[from] SettingError),
}

/// Result type for command bodies.
pub type CommandResult = Result<(), CommandError>;

// ============================================================================
// Dispatch Errors (grammar attachment and input matching)
// ============================================================================

/// Errors raised by the command dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("incomplete command, usage: {0}")]
    IncompleteCommand(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("invalid argument <{name}>: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A grammar tree was rejected at registration time.
    #[error("invalid command node {node}: {reason}")]
    InvalidNode { node: String, reason: &'static str },

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl DispatchError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCommand(_) => "unknown_command",
            Self::IncompleteCommand(_) => "incomplete_command",
            Self::UnexpectedArgument(_) => "unexpected_argument",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::PermissionDenied(_) => "permission_denied",
            Self::InvalidNode { .. } => "invalid_node",
            Self::Command(CommandError::InvalidValue(_)) => "invalid_value",
            Self::Command(CommandError::NotFound(_)) => "not_found",
            Self::Command(CommandError::MissingArgument(_)) => "missing_argument",
            Self::Command(CommandError::Setting(_)) => "setting_error",
        }
    }

    /// Convert to a chat reply with inline color codes.
    ///
    /// Text the user typed is escaped so it shows as typed. Returns `None`
    /// for registration failures, which are logged instead.
    pub fn to_chat_reply(&self, prefix: char) -> Option<String> {
        let gray = |text: &str| escape_codes(text, ColorCode::Gray).into_owned();
        let red = |text: &str| escape_codes(text, ColorCode::Red).into_owned();

        let reply = match self {
            Self::UnknownCommand(name) => format!(
                "&cUnknown command &7{}{}&c. Try &7{}help&c.",
                prefix,
                gray(name),
                prefix
            ),
            Self::IncompleteCommand(usage) => format!("&cUsage: &7{}{}", prefix, gray(usage)),
            Self::UnexpectedArgument(arg) => format!("&cUnexpected argument &7{}", gray(arg)),
            Self::InvalidArgument { name, reason } => {
                format!("&cInvalid &7<{}>&c: {}", gray(name), red(reason))
            }
            Self::PermissionDenied(name) => {
                format!("&cYou may not use &7{}{}", prefix, gray(name))
            }
            Self::Command(CommandError::InvalidValue(msg))
            | Self::Command(CommandError::NotFound(msg))
            | Self::Command(CommandError::MissingArgument(msg)) => format!("&c{}", red(msg)),
            Self::Command(CommandError::Setting(e)) => format!("&c{}", red(&e.to_string())),

            Self::InvalidNode { .. } => return None,
        };
        Some(reply)
    }
}
