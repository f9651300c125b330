//! HELP command.
//!
//! `help` lists every registered command with its description.
//! `help <command>` shows the usage of one command.

use super::core::{
    ArgumentKind, Command, CommandContext, CommandDispatcher, CommandInfo, CommandSource, argument,
};
use crate::error::{CommandError, CommandResult, DispatchError};

pub struct HelpCommand {
    info: CommandInfo,
}

impl HelpCommand {
    pub const NAME: &'static str = "help";

    pub fn new(enabled: bool) -> Self {
        Self {
            info: CommandInfo::new(Self::NAME, "Lists commands, or shows how to use one")
                .with_enabled(enabled),
        }
    }
}

impl Command for HelpCommand {
    fn info(&self) -> &CommandInfo {
        &self.info
    }

    fn register(
        &self,
        dispatcher: &mut CommandDispatcher<CommandSource>,
    ) -> Result<(), DispatchError> {
        self.attach(
            dispatcher,
            self.literal()
                .executes(list_commands)
                .then(argument("command", ArgumentKind::Word).executes(show_usage)),
        )
    }
}

fn list_commands(ctx: &CommandContext<'_, CommandSource>) -> CommandResult {
    let source = ctx.source();
    let dispatcher = ctx.dispatcher();
    let prefix = source.command_prefix();

    source.reply(&format!("&7Commands ({}):", dispatcher.len()));
    for name in dispatcher.root_names() {
        let description = dispatcher
            .get(name)
            .and_then(|node| node.description())
            .unwrap_or_default();
        source.reply_raw(&format!("  &b{}{} &8- &7{}", prefix, name, description));
    }
    Ok(())
}

fn show_usage(ctx: &CommandContext<'_, CommandSource>) -> CommandResult {
    let source = ctx.source();
    let dispatcher = ctx.dispatcher();
    let prefix = source.command_prefix();

    let requested = ctx.get_string("command")?;
    let name = requested.strip_prefix(prefix).unwrap_or(&requested);
    let usage = dispatcher
        .usage(name)
        .ok_or_else(|| CommandError::NotFound(format!("No command named {}", name)))?;

    source.reply(&format!("&b{}{}", prefix, usage));
    if let Some(description) = dispatcher.get(name).and_then(|node| node.description()) {
        source.reply_raw(&format!("  &7{}", description));
    }
    Ok(())
}
