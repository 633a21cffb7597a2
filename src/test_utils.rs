//! Shared test utilities and arbitrary generators for property-based testing.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::types::{ParticipantId, Priority};
use proptest::prelude::*;

pub fn arb_priority() -> impl Strategy<Value = Priority> {
    any::<i64>().prop_map(Priority)
}

pub fn arb_cycle_size() -> impl Strategy<Value = NonZeroUsize> {
    (1usize..12).prop_map(|n| NonZeroUsize::new(n).unwrap())
}

pub fn arb_participant_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{2,24}".prop_map(String::from)
}

/// Entries with unique participant ids and arbitrary priorities.
pub fn arb_entries(len: Range<usize>) -> impl Strategy<Value = Vec<(ParticipantId, Priority)>> {
    prop::collection::vec(arb_priority(), len).prop_map(with_unique_ids)
}

/// Entries drawn from a handful of priorities, so ties are common.
pub fn arb_tied_entries(
    len: Range<usize>,
) -> impl Strategy<Value = Vec<(ParticipantId, Priority)>> {
    prop::collection::vec((-2i64..3).prop_map(Priority), len).prop_map(with_unique_ids)
}

fn with_unique_ids(priorities: Vec<Priority>) -> Vec<(ParticipantId, Priority)> {
    priorities
        .into_iter()
        .enumerate()
        .map(|(i, priority)| (ParticipantId::new(format!("player{}", i)), priority))
        .collect()
}
