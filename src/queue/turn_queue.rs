//! The priority turn queue.
//!
//! Entries are kept in service order: the front of the deque is the next
//! participant to take a turn. Insertion scans linearly, which is fine for the
//! tens of participants a chat round sees and keeps the FIFO tie-break
//! obvious without a sequence counter.

use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::types::Priority;

use super::error::QueueError;

/// Number of participants released per cycle when none is configured.
pub const DEFAULT_CYCLE_SIZE: NonZeroUsize = match NonZeroUsize::new(7) {
    Some(n) => n,
    None => panic!("default cycle size must be non-zero"),
};

/// A participant waiting for a turn, with the priority it joined at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry<I, P = Priority> {
    pub participant: I,
    pub priority: P,
}

/// Priority-ordered, uniqueness-constrained turn queue.
///
/// Higher priorities are served first; participants with equal priority are
/// served in the order they joined. `dequeue_cycle` releases up to
/// `cycle_size` participants at once.
///
/// The queue does no locking. A host that shares it between tasks must
/// serialize access itself.
#[derive(Debug, Clone)]
pub struct PriorityTurnQueue<I, P = Priority> {
    /// Entries in service order (front is served next).
    entries: VecDeque<QueueEntry<I, P>>,

    /// Maximum number of participants released by one `dequeue_cycle`.
    cycle_size: NonZeroUsize,
}

impl<I, P> Default for PriorityTurnQueue<I, P> {
    fn default() -> Self {
        PriorityTurnQueue {
            entries: VecDeque::new(),
            cycle_size: DEFAULT_CYCLE_SIZE,
        }
    }
}

impl<I, P> PriorityTurnQueue<I, P> {
    /// Creates an empty queue that releases `cycle_size` participants per cycle.
    pub fn new(cycle_size: NonZeroUsize) -> Self {
        PriorityTurnQueue {
            entries: VecDeque::new(),
            cycle_size,
        }
    }

    /// Returns the configured cycle size.
    pub fn cycle_size(&self) -> NonZeroUsize {
        self.cycle_size
    }

    /// Returns the number of waiting participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry that would be served next, if any.
    pub fn peek(&self) -> Option<&QueueEntry<I, P>> {
        self.entries.front()
    }

    /// Iterates over waiting entries in service order.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry<I, P>> {
        self.entries.iter()
    }

    /// Removes every waiting participant, keeping the cycle size.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes and returns up to `cycle_size` participants in service order.
    ///
    /// A result shorter than the cycle size means the queue ran out; an empty
    /// queue yields an empty batch rather than an error.
    pub fn dequeue_cycle(&mut self) -> Vec<I> {
        let count = self.cycle_size.get().min(self.entries.len());
        self.entries
            .drain(..count)
            .map(|entry| entry.participant)
            .collect()
    }
}

impl<I: PartialEq + fmt::Display, P: Ord> PriorityTurnQueue<I, P> {
    /// Returns true if the participant is waiting.
    pub fn contains(&self, participant: &I) -> bool {
        self.position(participant).is_some()
    }

    /// Returns the zero-based service position of a waiting participant.
    pub fn position(&self, participant: &I) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.participant == *participant)
    }

    /// Adds a participant, returning the zero-based position it was placed at.
    ///
    /// The entry goes immediately before the first entry with a strictly
    /// lower priority, so it lands behind everyone already waiting at the same
    /// priority.
    ///
    /// # Errors
    ///
    /// [`QueueError::DuplicateParticipant`] if the participant is already
    /// waiting. The queue is left untouched.
    pub fn enqueue(&mut self, participant: I, priority: P) -> Result<usize, QueueError> {
        let mut insert_at = None;
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.participant == participant {
                return Err(QueueError::DuplicateParticipant {
                    participant: participant.to_string(),
                });
            }
            if insert_at.is_none() && entry.priority < priority {
                insert_at = Some(index);
            }
        }

        let index = insert_at.unwrap_or(self.entries.len());
        self.entries.insert(
            index,
            QueueEntry {
                participant,
                priority,
            },
        );
        Ok(index)
    }

    /// Removes and returns the next participant.
    ///
    /// # Errors
    ///
    /// [`QueueError::EmptyQueue`] if nobody is waiting.
    pub fn dequeue_one(&mut self) -> Result<I, QueueError> {
        self.entries
            .pop_front()
            .map(|entry| entry.participant)
            .ok_or(QueueError::EmptyQueue)
    }
}
