//! kami - command core for the KAMI client
//!
//! Reads chat input from stdin. Lines starting with the command prefix are
//! dispatched to registered commands; everything else is echoed as chat.

mod chat;
mod commands;
mod config;
mod error;
mod settings;
mod telemetry;

use crate::chat::{StdoutSink, send_raw_chat_message};
use crate::commands::{CommandDispatcher, CommandSource, Outcome, Registry, SharedDispatcher};
use crate::config::Config;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "kami.toml".to_string());
    let (config, found) = Config::load_or_default(&config_path)?;

    // Initialize tracing
    telemetry::init(&config.logging);
    if found {
        info!(path = %config_path, "Loaded config");
    } else {
        info!(path = %config_path, "Config file not found, using defaults");
    }

    let settings = settings::settings();
    settings.set_command_prefix(config.commands.prefix)?;

    // Build every command once, then attach them all to the one dispatcher
    let registry = Registry::new(&config.commands);
    let dispatcher = SharedDispatcher::new(CommandDispatcher::new());
    dispatcher.with_mut(|d| registry.register_all(d));
    if dispatcher.read().is_empty() {
        warn!("No commands registered, every line will be echoed as chat");
    }

    let sink = Arc::new(StdoutSink);
    let source = CommandSource::new(sink.clone(), settings, config.chat.badge.clone());

    info!(
        prefix = %settings::command_prefix(),
        commands = dispatcher.read().len(),
        "Starting kami"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = registry.handle_line(&dispatcher.read(), line, &source);
        if outcome == Outcome::NotACommand {
            send_raw_chat_message(sink.as_ref(), line);
        }
    }

    info!(
        used = registry.stats().snapshot().len(),
        "Input closed, shutting down"
    );
    Ok(())
}
