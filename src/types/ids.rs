//! Newtype wrappers for queue identifiers and priorities.
//!
//! These keep a participant name from being confused with any other string
//! flowing through the bot, and give priorities a total order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A chat participant, as resolved by the chat transport.
///
/// Compared exactly; the transport is expected to hand over a canonical name
/// (Twitch logins are already lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(s: impl Into<String>) -> Self {
        ParticipantId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        ParticipantId(s)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId(s.to_string())
    }
}

/// Turn priority. Higher values are served sooner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(pub i64);

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Priority {
    fn from(n: i64) -> Self {
        Priority(n)
    }
}
