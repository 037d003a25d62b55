//! # Chat Messages
//!
//! File: cli/src/core/message.rs
//!
//! A `Message` is one entry of a session transcript. Messages are created only
//! by the session (see `core::session`) and are immutable afterwards: the
//! fields are private and only read through accessors.
//!
use serde::Serialize;
use std::fmt;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Session-local message identifier. Allocated in increasing order starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single transcript entry.
///
/// `text` may contain embedded newlines; presentation layers render each line
/// separately. `timestamp` is already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: MessageId,
    sender: Sender,
    text: String,
    timestamp: String,
}

impl Message {
    pub(crate) fn new(id: MessageId, sender: Sender, text: String, timestamp: String) -> Self {
        Self {
            id,
            sender,
            text,
            timestamp,
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Iterates over the logical lines of the message text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_with_lowercase_sender() {
        let msg = Message::new(
            MessageId::new(7),
            Sender::Bot,
            "hello\nthere".into(),
            "09:15".into(),
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "sender": "bot",
                "text": "hello\nthere",
                "timestamp": "09:15"
            })
        );
    }

    #[test]
    fn test_lines_split_on_newlines() {
        let msg = Message::new(
            MessageId::new(1),
            Sender::User,
            "first\nsecond\n".into(),
            "10:00".into(),
        );
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(lines, vec!["first", "second", ""]);
        assert_eq!(msg.sender(), Sender::User);
        assert_eq!(msg.id().to_string(), "1");
    }
}
