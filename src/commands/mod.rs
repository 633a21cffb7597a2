//! Command parsing for chat commands.
//!
//! This module provides types and parsing for the commands viewers and
//! moderators type in chat to drive the turn queue.
//!
//! # Supported Commands
//!
//! - `{prefix}join [N]` - Joins the queue, optionally at priority N
//! - `{prefix}next` - Releases the next cycle of participants
//! - `{prefix}queue` - Lists the queue in turn order
//! - `{prefix}position` - Reports the sender's place in the queue
//! - `{prefix}newround [N]` - Starts a new round, optionally with cycle size N
//!
//! Who may issue `next` and `newround` is decided by the caller.
//!
//! # Example
//!
//! ```
//! use turn_queue::commands::{parse_command, Command};
//!
//! assert_eq!(parse_command("!next", "!"), Some(Command::NextCycle));
//!
//! // Works with different prefixes
//! assert_eq!(parse_command("?queue", "?"), Some(Command::ShowQueue));
//! ```

mod parser;
mod types;

pub use parser::parse_command;
pub use types::Command;
