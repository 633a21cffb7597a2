//! Command types for the turn-queue chat commands.
//!
//! These commands are parsed from chat messages.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::types::Priority;

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Joins the queue: `!join` or `!join N`
    ///
    /// Without an argument the configured default priority applies.
    Join { priority: Option<Priority> },

    /// Releases the next cycle of participants: `!next`
    NextCycle,

    /// Lists everyone waiting, in turn order: `!queue`
    ShowQueue,

    /// Tells the sender where they stand: `!position`
    ShowPosition,

    /// Discards the current queue and starts a new round: `!newround` or `!newround N`
    ///
    /// `N` replaces the cycle size for the new round.
    NewRound { cycle_size: Option<NonZeroUsize> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_command() -> impl Strategy<Value = Command> {
        prop_oneof![
            proptest::option::of(any::<i64>().prop_map(Priority))
                .prop_map(|priority| Command::Join { priority }),
            Just(Command::NextCycle),
            Just(Command::ShowQueue),
            Just(Command::ShowPosition),
            proptest::option::of((1usize..100).prop_map(|n| NonZeroUsize::new(n).unwrap()))
                .prop_map(|cycle_size| Command::NewRound { cycle_size }),
        ]
    }

    proptest! {
        #[test]
        fn command_serde_roundtrip(cmd in arb_command()) {
            let json = serde_json::to_string(&cmd).unwrap();
            let parsed: Command = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(cmd, parsed);
        }
    }

    #[test]
    fn command_debug_format() {
        assert!(format!("{:?}", Command::NextCycle).contains("NextCycle"));
        assert!(format!("{:?}", Command::ShowQueue).contains("ShowQueue"));
        assert!(
            format!(
                "{:?}",
                Command::Join {
                    priority: Some(Priority(42))
                }
            )
            .contains("42")
        );
    }
}
