//! The append-only conversation transcript.
//!
//! Messages exist only for the lifetime of the session; nothing is
//! persisted. Rendering is plain styled text, so message content is never
//! interpreted as markup.

use crate::ui::Style;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// The local user.
    You,
    /// The assistant (everything that is not the user).
    Bot,
}

impl Sender {
    /// The label rendered in front of the message.
    pub const fn label(self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Bot => "Ava",
        }
    }
}

/// A single exchanged message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

/// The ordered visual log of exchanged messages.
///
/// Appending prints the message immediately; terminal output is inherently
/// append-at-bottom, so the newest message is always in view.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Message>,
}

impl Transcript {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a message and renders it.
    pub fn append(&mut self, sender: Sender, text: impl Into<String>) {
        let message = Message {
            sender,
            text: text.into(),
        };
        Self::render(&message);
        self.entries.push(message);
    }

    /// Messages appended so far, oldest first.
    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    fn render(message: &Message) {
        let label = match message.sender {
            Sender::You => Style::user_label(message.sender.label()),
            Sender::Bot => Style::bot_label(message.sender.label()),
        };

        // Continuation lines (e.g. a task listing) are indented under the label.
        let mut lines = message.text.lines();
        println!("{label}  {}", lines.next().unwrap_or_default());
        for line in lines {
            println!("     {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.append(Sender::You, "Hello");
        transcript.append(Sender::Bot, "Hi there");

        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sender, Sender::You);
        assert_eq!(entries[0].text, "Hello");
        assert_eq!(entries[1].sender, Sender::Bot);
        assert_eq!(entries[1].text, "Hi there");
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::You.label(), "You");
        assert_eq!(Sender::Bot.label(), "Ava");
    }
}
