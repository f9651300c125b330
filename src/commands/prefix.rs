//! PREFIX command.
//!
//! `prefix` shows the command trigger character, `prefix <char>` changes it
//! and `prefix reset` restores the default. The new character applies from
//! the next input line on.

use super::core::{
    ArgumentKind, Command, CommandContext, CommandDispatcher, CommandInfo, CommandSource, argument,
    literal,
};
use crate::error::{CommandResult, DispatchError};
use crate::settings::COMMAND_PREFIX_KEY;

pub struct PrefixCommand {
    info: CommandInfo,
}

impl PrefixCommand {
    pub const NAME: &'static str = "prefix";

    pub fn new(enabled: bool) -> Self {
        Self {
            info: CommandInfo::new(Self::NAME, "Shows or changes the command prefix")
                .with_enabled(enabled),
        }
    }
}

impl Command for PrefixCommand {
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
                .executes(|ctx| {
                    let source = ctx.source();
                    source.reply(&format!("Command prefix is &b{}", source.command_prefix()));
                    Ok(())
                })
                .then(literal("reset").executes(reset_prefix))
                .then(argument("char", ArgumentKind::Char).executes(set_prefix)),
        )
    }
}

fn set_prefix(ctx: &CommandContext<'_, CommandSource>) -> CommandResult {
    let source = ctx.source();
    let prefix = ctx.get_char("char")?;
    let previous = source.settings().set_command_prefix(prefix)?;
    source.reply(&format!(
        "Command prefix changed from &7{}&r to &b{}",
        previous, prefix
    ));
    Ok(())
}

fn reset_prefix(ctx: &CommandContext<'_, CommandSource>) -> CommandResult {
    let source = ctx.source();
    let default = source.settings().reset(COMMAND_PREFIX_KEY)?;
    source.reply(&format!("Command prefix reset to &b{}", default));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::harness;
    use crate::error::CommandError;
    use crate::settings::SettingError;

    #[test]
    fn test_show_prefix() {
        let (dispatcher, source, sink) = harness(&PrefixCommand::new(true));
        dispatcher.execute("prefix", &source).unwrap();
        assert_eq!(sink.stripped(), vec!["[KAMI] Command prefix is ."]);
    }

    #[test]
    fn test_change_prefix() {
        let (dispatcher, source, sink) = harness(&PrefixCommand::new(true));
        dispatcher.execute("prefix ;", &source).unwrap();
        assert_eq!(source.command_prefix(), ';');
        assert_eq!(
            sink.stripped(),
            vec!["[KAMI] Command prefix changed from . to ;"]
        );
    }

    #[test]
    fn test_reset_prefix() {
        let (dispatcher, source, sink) = harness(&PrefixCommand::new(true));
        dispatcher.execute("prefix ;", &source).unwrap();
        sink.take();

        dispatcher.execute("prefix reset", &source).unwrap();
        assert_eq!(source.command_prefix(), '.');
        assert_eq!(sink.stripped(), vec!["[KAMI] Command prefix reset to ."]);
        assert_eq!(
            dispatcher.usage("prefix").unwrap(),
            "prefix [(reset|<char>)]"
        );
    }

    #[test]
    fn test_reject_reserved_prefix() {
        let (dispatcher, source, _) = harness(&PrefixCommand::new(true));
        let err = dispatcher.execute("prefix &", &source).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Command(CommandError::Setting(SettingError::Invalid { .. }))
        ));
        assert_eq!(source.command_prefix(), '.');
    }

    #[test]
    fn test_reject_multi_char() {
        let (dispatcher, source, _) = harness(&PrefixCommand::new(true));
        let err = dispatcher.execute("prefix !!", &source).unwrap_err();
        assert!(matches!(err, DispatchError::InvalidArgument { .. }));
    }
}
