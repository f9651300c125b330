//! Chat output.
//!
//! Commands never render text themselves. They build a [`FormattedText`]
//! and hand it to a [`MessageSink`]; what the sink does with it (print it,
//! forward it to a game client, buffer it) is the host's business.

use kami_text::{FormattedStringExt, FormattedText};
#[cfg(test)]
use parking_lot::Mutex;
use std::io::Write;
use tracing::warn;

/// Accepts formatted messages for delivery.
pub trait MessageSink: Send + Sync {
    fn send(&self, text: FormattedText);
}

/// Send `message` prefixed with the bracketed client badge,
/// e.g. `[KAMI] message` with the badge in green.
pub fn send_chat_message(sink: &dyn MessageSink, badge: &str, message: &str) {
    send_raw_chat_message(sink, &format!("&7[&a{}&7] &r{}", badge, message));
}

/// Send `message` as-is, encoding its `&`-codes.
pub fn send_raw_chat_message(sink: &dyn MessageSink, message: &str) {
    sink.send(FormattedText::new(message));
}

/// Writes messages to stdout, one per line, with formatting stripped.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn send(&self, text: FormattedText) {
        let line = text.into_encoded().strip_formatting();
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            warn!(error = %e, "Failed to write chat message");
        }
    }
}

/// Buffers messages in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CapturingSink {
    messages: Mutex<Vec<FormattedText>>,
}

#[cfg(test)]
impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<FormattedText> {
        std::mem::take(&mut *self.messages.lock())
    }

    /// Captured messages with formatting removed.
    pub fn stripped(&self) -> Vec<String> {
        self.messages.lock().iter().map(FormattedText::strip).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
impl MessageSink for CapturingSink {
    fn send(&self, text: FormattedText) {
        self.messages.lock().push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kami_text::SECTION_SIGN;

    #[test]
    fn test_badge_message() {
        let sink = CapturingSink::new();
        send_chat_message(&sink, "KAMI", "hello");

        let messages = sink.take();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].raw(), "&7[&aKAMI&7] &rhello");
        assert_eq!(
            messages[0].encoded(),
            format!("{m}7[{m}aKAMI{m}7] {m}rhello", m = SECTION_SIGN)
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_raw_message() {
        let sink = CapturingSink::new();
        send_raw_chat_message(&sink, "&cred & plain");
        assert_eq!(sink.stripped(), vec!["red & plain"]);
    }
}
