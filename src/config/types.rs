//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_badge, default_command_prefix, default_log_level};
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Client configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Command trigger and builtin command configuration.
    #[serde(default)]
    pub commands: CommandsConfig,
    /// Chat message decoration.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Log output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. Returns whether the file was found.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool), ConfigError> {
        match Self::load(path) {
            Ok(config) => Ok((config, true)),
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), false))
            }
            Err(e) => Err(e),
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Command configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Initial command trigger character (e.g., ".").
    #[serde(default = "default_command_prefix")]
    pub prefix: char,
    /// Builtin commands constructed disabled (by name).
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            prefix: default_command_prefix(),
            disabled: Vec::new(),
        }
    }
}

impl CommandsConfig {
    /// Whether the builtin named `name` is configured as disabled.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|d| d.eq_ignore_ascii_case(name))
    }
}

/// Chat decoration configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Badge text for decorated chat messages (e.g., "KAMI").
    #[serde(default = "default_badge")]
    pub badge: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            badge: default_badge(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g., "info", "kami=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.commands.prefix, '.');
        assert!(config.commands.disabled.is_empty());
        assert_eq!(config.chat.badge, "KAMI");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
[commands]
prefix = "!"
disabled = ["stats"]

[chat]
badge = "K"

[logging]
level = "kami=debug"
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.commands.prefix, '!');
        assert!(config.commands.is_disabled("STATS"));
        assert!(!config.commands.is_disabled("help"));
        assert_eq!(config.chat.badge, "K");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let err = Config::parse("[commands]\nprefix = \"&\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("commands.prefix"));
    }

    #[test]
    fn test_multi_char_prefix_is_parse_error() {
        let err = Config::parse("[commands]\nprefix = \"!!\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let (config, found) = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert!(!found);
        assert_eq!(config.commands.prefix, '.');
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chat]\nbadge = \"Z\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.chat.badge, "Z");
    }

    #[test]
    fn test_load_or_default_reports_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[commands]\nprefix = \"a\"").unwrap();
        let err = Config::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
