//! STATS command.
//!
//! Reports how often each command has been used this session.
//! `stats <limit>` shows only the most used ones.

use super::core::{
    ArgumentKind, Command, CommandDispatcher, CommandInfo, CommandSource, CommandStats, argument,
};
use crate::error::{CommandResult, DispatchError};
use std::sync::Arc;

/// Largest `<limit>` accepted.
const MAX_LIMIT: i64 = 100;

pub struct StatsCommand {
    info: CommandInfo,
    stats: Arc<CommandStats>,
}

impl StatsCommand {
    pub const NAME: &'static str = "stats";

    pub fn new(enabled: bool, stats: Arc<CommandStats>) -> Self {
        Self {
            info: CommandInfo::new(Self::NAME, "Shows command usage counts")
                .with_enabled(enabled),
            stats,
        }
    }
}

impl Command for StatsCommand {
    fn info(&self) -> &CommandInfo {
        &self.info
    }

    fn register(
        &self,
        dispatcher: &mut CommandDispatcher<CommandSource>,
    ) -> Result<(), DispatchError> {
        let all = Arc::clone(&self.stats);
        let top = Arc::clone(&self.stats);
        let limit = ArgumentKind::Integer {
            min: 1,
            max: MAX_LIMIT,
        };
        self.attach(
            dispatcher,
            self.literal()
                .executes(move |ctx| report(ctx.source(), &all, usize::MAX))
                .then(
                    argument::<CommandSource>("limit", limit).executes(move |ctx| {
                        let limit = ctx.get_integer("limit")?;
                        report(ctx.source(), &top, usize::try_from(limit).unwrap_or(usize::MAX))
                    }),
                ),
        )
    }
}

fn report(source: &CommandSource, stats: &CommandStats, limit: usize) -> CommandResult {
    let snapshot = stats.snapshot();
    if snapshot.is_empty() {
        source.reply("&7No commands used yet");
        return Ok(());
    }
    source.reply("&7Command usage:");
    for (name, count) in snapshot.into_iter().take(limit) {
        source.reply_raw(&format!("  &b{} &7{}", name, count));
    }
    Ok(())
}
