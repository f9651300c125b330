//! VERSION command.

use super::core::{Command, CommandDispatcher, CommandInfo, CommandSource};
use crate::error::DispatchError;

/// Client name shown in version output.
pub const CLIENT_NAME: &str = "KAMI";

/// Kanji shown next to the client name.
pub const CLIENT_KANJI: &str = "\u{795E}";

pub struct VersionCommand {
    info: CommandInfo,
}

impl VersionCommand {
    pub const NAME: &'static str = "version";

    pub fn new(enabled: bool) -> Self {
        Self {
            info: CommandInfo::new(Self::NAME, "Shows the client name and version")
                .with_enabled(enabled),
        }
    }
}

impl Command for VersionCommand {
    fn info(&self) -> &CommandInfo {
        &self.info
    }

    fn register(
        &self,
        dispatcher: &mut CommandDispatcher<CommandSource>,
    ) -> Result<(), DispatchError> {
        self.attach(
            dispatcher,
            self.literal().executes(|ctx| {
                ctx.source().reply(&format!(
                    "&a{} {} &7v{}",
                    CLIENT_NAME,
                    CLIENT_KANJI,
                    env!("CARGO_PKG_VERSION")
                ));
                Ok(())
            }),
        )
    }
}
