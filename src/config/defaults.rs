//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

// =============================================================================
// Command Defaults
// =============================================================================

pub fn default_command_prefix() -> char {
    '.'
}

// =============================================================================
// Chat Defaults
// =============================================================================

/// Badge shown between brackets in front of client chat messages.
pub fn default_badge() -> String {
    "KAMI".to_string()
}

// =============================================================================
// Logging Defaults
// =============================================================================

pub fn default_log_level() -> String {
    "info".to_string()
}
