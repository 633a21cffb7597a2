//! Turn Queue - a priority turn-order queue for chat-driven games.
//!
//! This library provides the queue itself plus the command parsing and
//! per-round state a chat bot needs to drive it.

pub mod commands;
pub mod config;
pub mod queue;
pub mod round;
pub mod types;

#[cfg(test)]
mod test_utils;
