//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, CommandsConfig, ChatConfig, LoggingConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup validation of loaded values

mod defaults;
mod types;
pub mod validation;

pub use types::{CommandsConfig, Config, LogFormat, LoggingConfig};
