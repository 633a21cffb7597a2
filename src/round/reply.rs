//! Outbound messages produced by a round.
//!
//! The round never talks to chat directly; it hands these back to whatever
//! transport is sending messages.

use std::fmt;

use crate::types::ParticipantId;

/// A message for the chat output queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A message visible to the whole channel.
    Chat(String),

    /// A private message to a single participant.
    Whisper { to: ParticipantId, text: String },
}

impl Reply {
    pub fn chat(text: impl Into<String>) -> Self {
        Reply::Chat(text.into())
    }

    pub fn whisper(to: &ParticipantId, text: impl Into<String>) -> Self {
        Reply::Whisper {
            to: to.clone(),
            text: text.into(),
        }
    }

    /// Returns the message text, regardless of audience.
    pub fn text(&self) -> &str {
        match self {
            Reply::Chat(text) => text,
            Reply::Whisper { text, .. } => text,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Chat(text) => write!(f, "{}", text),
            Reply::Whisper { to, text } => write!(f, "[whisper to {}] {}", to, text),
        }
    }
}
