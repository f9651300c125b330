//! The source a command runs on behalf of.

use crate::chat::{MessageSink, send_chat_message, send_raw_chat_message};
use crate::settings::Settings;
use std::sync::Arc;

/// The local user issuing commands, with somewhere to send replies.
#[derive(Clone)]
pub struct CommandSource {
    sink: Arc<dyn MessageSink>,
    settings: Arc<Settings>,
    badge: String,
}

impl CommandSource {
    pub fn new(
        sink: Arc<dyn MessageSink>,
        settings: Arc<Settings>,
        badge: impl Into<String>,
    ) -> Self {
        Self {
            sink,
            settings,
            badge: badge.into(),
        }
    }

    /// Send a badge-decorated reply. `&`-codes in `message` are encoded.
    pub fn reply(&self, message: &str) {
        send_chat_message(self.sink.as_ref(), &self.badge, message);
    }

    /// Send a reply without the badge.
    pub fn reply_raw(&self, message: &str) {
        send_raw_chat_message(self.sink.as_ref(), message);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current command trigger character.
    pub fn command_prefix(&self) -> char {
        self.settings.command_prefix()
    }
}
