//! Support chat placeholder.
//!
//! Every user message is answered with the same canned reply. The reply is
//! queued on send and appended when the shell calls [`ChatLog::deliver_reply`]
//! after its simulated delay.

use chrono::{DateTime, Local};

use crate::constants::{SUPPORT_EMAIL, SUPPORT_PHONE};

/// Opening message from the bot.
pub const GREETING: &str = "Hello! How can I help you today?";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Support bot
    Bot,
    /// The person using the app
    User,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Sequence number within the transcript
    pub id: u64,
    /// Message text
    pub text: String,
    /// Author
    pub sender: Sender,
    /// Local time the message was added
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Time of day as "HH:MM".
    #[must_use]
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// The reply sent for every user message.
#[must_use]
pub fn canned_reply() -> String {
    format!(
        "Thank you for your message! Our chatbot is still in the training phase and full \
         functionality is not available yet. For immediate assistance, please contact us at \
         {SUPPORT_EMAIL} or call {SUPPORT_PHONE}."
    )
}

/// Chat transcript with queued replies.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    pending_replies: usize,
    next_id: u64,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// Starts a transcript with the greeting.
    #[must_use]
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
            pending_replies: 0,
            next_id: 1,
        };
        log.push(GREETING.to_string(), Sender::Bot);
        log
    }

    /// Transcript in order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of replies waiting to be delivered.
    #[must_use]
    pub const fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// Appends a user message and queues a reply. Blank input is ignored.
    ///
    /// Returns whether a message was added.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.push(text.to_string(), Sender::User);
        self.pending_replies += 1;
        true
    }

    /// Appends one queued reply, if any.
    pub fn deliver_reply(&mut self) -> bool {
        if self.pending_replies == 0 {
            return false;
        }
        self.pending_replies -= 1;
        self.push(canned_reply(), Sender::Bot);
        true
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].text, GREETING);
        assert_eq!(log.messages()[0].sender, Sender::Bot);
    }

    #[test]
    fn test_send_queues_reply() {
        let mut log = ChatLog::new();
        assert!(log.send("Is the Activa free tomorrow?"));
        assert_eq!(log.pending_replies(), 1);
        assert!(log.deliver_reply());
        assert!(!log.deliver_reply());

        let last = log.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains(SUPPORT_EMAIL));
        assert_eq!(log.messages().len(), 3);
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut log = ChatLog::new();
        assert!(!log.send("   "));
        assert_eq!(log.pending_replies(), 0);
        assert_eq!(log.messages().len(), 1);
    }

    #[test]
    fn test_time_label_format() {
        let log = ChatLog::new();
        let label = log.messages()[0].time_label();
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }
}
