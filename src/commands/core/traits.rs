//! The contract every command implements.
//!
//! A command is a named feature that knows how to attach its own grammar to
//! a dispatcher. The host builds each command once at startup and calls
//! [`Command::register`] on it exactly once, always against the same
//! dispatcher, so the dispatcher ends up holding every command's grammar.
//!
//! Calling `register` twice on the same dispatcher is not guarded here; the
//! dispatcher merges the two trees.

use super::dispatcher::{CommandDispatcher, CommandNode, literal};
use super::source::CommandSource;
use crate::error::DispatchError;

/// Identity of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Root literal the command is invoked by.
    pub name: String,
    /// Shown by `help`.
    pub description: String,
    /// Disabled commands are built but never registered.
    pub enabled: bool,
}

impl CommandInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            enabled: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for CommandInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            enabled: true,
        }
    }
}

/// A user-invokable command.
pub trait Command: Send + Sync {
    fn info(&self) -> &CommandInfo;

    /// Attach this command's grammar to `dispatcher`.
    ///
    /// Failures come from the dispatcher and are returned untranslated.
    fn register(
        &self,
        dispatcher: &mut CommandDispatcher<CommandSource>,
    ) -> Result<(), DispatchError>;

    fn name(&self) -> &str {
        &self.info().name
    }

    fn description(&self) -> &str {
        &self.info().description
    }

    fn enabled(&self) -> bool {
        self.info().enabled
    }

    /// Extra root names that invoke the same grammar.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Root literal named and described after this command.
    fn literal(&self) -> CommandNode<CommandSource> {
        literal(self.name()).describe(self.description())
    }

    /// Register `node` under the command's name and under each alias.
    fn attach(
        &self,
        dispatcher: &mut CommandDispatcher<CommandSource>,
        node: CommandNode<CommandSource>,
    ) -> Result<(), DispatchError> {
        for alias in self.aliases() {
            dispatcher.register(
                node.clone()
                    .renamed(*alias)
                    .describe(format!("Alias for {}", self.name())),
            )?;
        }
        dispatcher.register(node)
    }
}
