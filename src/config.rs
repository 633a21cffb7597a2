//! Bot configuration.
//!
//! Values come from compiled-in defaults, overridden by environment variables:
//!
//! - `TURN_QUEUE_COMMAND_PREFIX` - prefix for chat commands (default `!`)
//! - `TURN_QUEUE_CYCLE_SIZE` - participants released per `next` (default 7)
//! - `TURN_QUEUE_DEFAULT_PRIORITY` - priority for a bare `join` (default 0)
//!
//! A value that fails to parse is logged and replaced by its default.

use std::num::NonZeroUsize;
use std::str::FromStr;

use tracing::warn;

use crate::queue::DEFAULT_CYCLE_SIZE;
use crate::types::Priority;

/// Default chat command prefix.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Default priority for participants who join without naming one.
pub const DEFAULT_PRIORITY: Priority = Priority(0);

pub const COMMAND_PREFIX_VAR: &str = "TURN_QUEUE_COMMAND_PREFIX";
pub const CYCLE_SIZE_VAR: &str = "TURN_QUEUE_CYCLE_SIZE";
pub const DEFAULT_PRIORITY_VAR: &str = "TURN_QUEUE_DEFAULT_PRIORITY";

/// Configuration for a turn-queue bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Prefix that marks a chat message as a command.
    pub command_prefix: String,

    /// Participants released per cycle in each new round.
    pub cycle_size: NonZeroUsize,

    /// Priority used by `join` without an argument.
    pub default_priority: Priority,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BotConfig {
    /// Creates a `BotConfig` with default values.
    pub fn new() -> Self {
        BotConfig {
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            cycle_size: DEFAULT_CYCLE_SIZE,
            default_priority: DEFAULT_PRIORITY,
        }
    }

    /// Creates a `BotConfig` from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a `BotConfig` from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults. So do values that fail to parse, with
    /// a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();

        let command_prefix = match lookup(COMMAND_PREFIX_VAR) {
            Some(prefix) if !prefix.trim().is_empty() => prefix.trim().to_string(),
            Some(_) => {
                warn!(var = COMMAND_PREFIX_VAR, "Ignoring blank command prefix");
                defaults.command_prefix
            }
            None => defaults.command_prefix,
        };

        BotConfig {
            command_prefix,
            cycle_size: parse_or_default(&lookup, CYCLE_SIZE_VAR, defaults.cycle_size),
            default_priority: Priority(parse_or_default(
                &lookup,
                DEFAULT_PRIORITY_VAR,
                defaults.default_priority.0,
            )),
        }
    }
}

fn parse_or_default<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(var = key, value = %raw, "Ignoring unparseable config value");
            default
        }
    }
}
