//! SAY command.
//!
//! `say <text...>` echoes text back as a client message, with its `&`
//! color codes encoded. Useful for previewing formatting.

use super::core::{ArgumentKind, Command, CommandDispatcher, CommandInfo, CommandSource, argument};
use crate::error::DispatchError;

pub struct SayCommand {
    info: CommandInfo,
}

impl SayCommand {
    pub const NAME: &'static str = "say";

    pub fn new(enabled: bool) -> Self {
        Self {
            info: CommandInfo::new(Self::NAME, "Echoes text with color codes applied")
                .with_enabled(enabled),
        }
    }
}

impl Command for SayCommand {
    fn info(&self) -> &CommandInfo {
        &self.info
    }

    fn aliases(&self) -> &[&'static str] {
        &["echo"]
    }

    fn register(
        &self,
        dispatcher: &mut CommandDispatcher<CommandSource>,
    ) -> Result<(), DispatchError> {
        self.attach(
            dispatcher,
            self.literal().then(
                argument::<CommandSource>("text", ArgumentKind::GreedyString).executes(|ctx| {
                    ctx.source().reply(&ctx.get_string("text")?);
                    Ok(())
                }),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::harness;
    use kami_text::SECTION_SIGN;

    #[test]
    fn test_say_encodes_codes() {
        let (dispatcher, source, sink) = harness(&SayCommand::new(true));
        dispatcher.execute("say &chot &r& cold", &source).unwrap();

        let messages = sink.take();
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0].encoded(),
            format!("{m}7[{m}aKAMI{m}7] {m}r{m}chot {m}r& cold", m = SECTION_SIGN)
        );
    }

    #[test]
    fn test_echo_alias() {
        let (dispatcher, source, sink) = harness(&SayCommand::new(true));
        dispatcher.execute("echo hi", &source).unwrap();
        assert_eq!(sink.stripped(), vec!["[KAMI] hi"]);
    }

    #[test]
    fn test_say_needs_text() {
        let (dispatcher, source, _) = harness(&SayCommand::new(true));
        assert_eq!(
            dispatcher.execute("say", &source),
            Err(DispatchError::IncompleteCommand("say <text...>".into()))
        );
    }
}
