//! Command registry and dispatch.
//!
//! The `Registry` owns every command instance, attaches them to a dispatcher
//! at startup, and routes input lines that start with the trigger character.
//! It also tracks per-command usage for the `stats` command.

use super::dispatcher::CommandDispatcher;
use super::source::CommandSource;
use super::traits::Command;
use crate::commands::{HelpCommand, PrefixCommand, SayCommand, StatsCommand, VersionCommand};
use crate::config::CommandsConfig;
use crate::error::DispatchError;
use crate::telemetry::spans;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Usage counters keyed by root command name.
#[derive(Debug, Default)]
pub struct CommandStats {
    counts: DashMap<String, u64>,
}

impl CommandStats {
    pub fn record(&self, command: &str) {
        *self.counts.entry(command.to_string()).or_insert(0) += 1;
    }

    /// Used commands, most used first, ties by name.
    pub fn snapshot(&self) -> Vec<(String, u64)> {
        let mut stats: Vec<_> = self
            .counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .filter(|(_, count)| *count > 0)
            .collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        stats
    }
}

/// What happened to an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line did not start with the trigger character.
    NotACommand,
    /// A command ran to completion.
    Executed,
    /// Dispatch failed; the user has been told if the error warrants it.
    Failed(DispatchError),
}

/// Registry of command instances.
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
    stats: Arc<CommandStats>,
}

impl Registry {
    /// Create a registry with every builtin command constructed.
    ///
    /// Builtins named in `config.disabled` are constructed disabled.
    pub fn new(config: &CommandsConfig) -> Self {
        let enabled = |name: &str| !config.is_disabled(name);

        let mut registry = Self::empty();
        let stats = Arc::clone(registry.stats());
        registry.add(Box::new(HelpCommand::new(enabled(HelpCommand::NAME))));
        registry.add(Box::new(PrefixCommand::new(enabled(PrefixCommand::NAME))));
        registry.add(Box::new(SayCommand::new(enabled(SayCommand::NAME))));
        registry.add(Box::new(VersionCommand::new(enabled(VersionCommand::NAME))));
        registry.add(Box::new(StatsCommand::new(enabled(StatsCommand::NAME), stats)));
        registry
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
            stats: Arc::new(CommandStats::default()),
        }
    }

    /// Add a command. It is not registered until [`Registry::register_all`].
    pub fn add(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn stats(&self) -> &Arc<CommandStats> {
        &self.stats
    }

    /// Attach every enabled command to `dispatcher`, in order.
    ///
    /// Disabled commands are skipped. A command whose grammar the dispatcher
    /// rejects is logged and skipped; the others are still registered.
    /// Returns the number of commands registered.
    pub fn register_all(&self, dispatcher: &mut CommandDispatcher<CommandSource>) -> usize {
        let mut registered = 0;
        for command in self.commands() {
            if !command.enabled() {
                debug!(command = %command.name(), "Skipping disabled command");
                continue;
            }
            match command.register(dispatcher) {
                Ok(()) => registered += 1,
                Err(e) => warn!(
                    command = %command.name(),
                    error = %e,
                    error_code = e.error_code(),
                    "Failed to register command"
                ),
            }
        }
        info!(registered, total = self.commands.len(), "Commands registered");
        registered
    }

    /// Route one input line.
    ///
    /// Lines not starting with the current trigger character are left to the
    /// caller. Errors are reported to the source as chat replies.
    pub fn handle_line(
        &self,
        dispatcher: &CommandDispatcher<CommandSource>,
        line: &str,
        source: &CommandSource,
    ) -> Outcome {
        let prefix = source.command_prefix();
        let Some(input) = line.strip_prefix(prefix) else {
            return Outcome::NotACommand;
        };

        let cmd_name = input.split_whitespace().next().unwrap_or_default();
        let span = spans::command(cmd_name, prefix);
        let _enter = span.enter();

        if dispatcher.contains(cmd_name) {
            self.stats.record(cmd_name);
        }

        match dispatcher.execute(input, source) {
            Ok(()) => {
                debug!(command = %cmd_name, "Command executed");
                Outcome::Executed
            }
            Err(e) => {
                debug!(
                    command = %cmd_name,
                    error = %e,
                    error_code = e.error_code(),
                    "Command error"
                );
                match e.to_chat_reply(prefix) {
                    Some(reply) => source.reply(&reply),
                    None => warn!(command = %cmd_name, error = %e, "Command failed"),
                }
                Outcome::Failed(e)
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(&CommandsConfig::default())
    }
}
