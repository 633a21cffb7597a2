//! Parser for chat commands.
//!
//! This module provides a pure parser that extracts a structured command from
//! a raw chat message.

use std::num::NonZeroUsize;

use crate::types::Priority;

use super::types::Command;

/// Parses the command at the start of a chat message.
///
/// # Arguments
///
/// * `text` - The chat message text
/// * `prefix` - The command prefix (e.g., `"!"`)
///
/// # Parsing Rules
///
/// - The first word must be `{prefix}{command}`; leading whitespace is ignored
/// - Prefix and command names are case-insensitive
/// - Numeric arguments must be the second word; later words are ignored
/// - A malformed argument makes the whole message "not a command"
/// - Returns `None` if no valid command is found
///
/// # Examples
///
/// ```
/// use turn_queue::commands::{parse_command, Command};
/// use turn_queue::types::Priority;
///
/// assert_eq!(parse_command("!join", "!"), Some(Command::Join { priority: None }));
/// assert_eq!(
///     parse_command("!JOIN 5", "!"),
///     Some(Command::Join { priority: Some(Priority(5)) })
/// );
/// assert_eq!(parse_command("!next", "!"), Some(Command::NextCycle));
/// assert_eq!(parse_command("hello !next", "!"), None);
/// assert_eq!(parse_command("!join soon", "!"), None);
/// ```
pub fn parse_command(text: &str, prefix: &str) -> Option<Command> {
    let (first_word, rest) = split_first_word(text.trim_start());

    // `get` fails if the prefix length splits a multi-byte character.
    let candidate = first_word.get(..prefix.len())?;
    if !candidate.eq_ignore_ascii_case(prefix) {
        return None;
    }
    let name = &first_word[prefix.len()..];

    match name.to_ascii_lowercase().as_str() {
        "join" => parse_join(rest),
        "next" => Some(Command::NextCycle),
        "queue" => Some(Command::ShowQueue),
        "position" => Some(Command::ShowPosition),
        "newround" => parse_new_round(rest),
        _ => None,
    }
}

/// Parses the optional priority after `join`.
fn parse_join(text: &str) -> Option<Command> {
    let (arg, _) = split_first_word(text.trim_start());
    if arg.is_empty() {
        return Some(Command::Join { priority: None });
    }

    let priority: i64 = arg.parse().ok()?;
    Some(Command::Join {
        priority: Some(Priority(priority)),
    })
}

/// Parses the optional cycle size after `newround`.
fn parse_new_round(text: &str) -> Option<Command> {
    let (arg, _) = split_first_word(text.trim_start());
    if arg.is_empty() {
        return Some(Command::NewRound { cycle_size: None });
    }

    // Zero is rejected by the NonZeroUsize parser.
    let cycle_size: NonZeroUsize = arg.parse().ok()?;
    Some(Command::NewRound {
        cycle_size: Some(cycle_size),
    })
}

/// Splits text at the first whitespace, returning (word, rest).
/// If no whitespace, returns (text, "").
fn split_first_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], &text[pos..]),
        None => (text, ""),
    }
}
