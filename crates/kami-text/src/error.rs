//! Error types for formatting codes.

use thiserror::Error;

/// Convenience type alias for Results using [`ParseCodeError`].
pub type Result<T, E = ParseCodeError> = std::result::Result<T, E>;

/// A character could not be interpreted as a formatting code.
///
/// Encoding never produces this: unrecognised pairs pass through as text.
/// It is only returned by explicit lookups such as `ColorCode::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCodeError {
    #[error("unknown formatting code: {0:?}")]
    UnknownCode(char),
}
