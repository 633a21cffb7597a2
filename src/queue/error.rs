//! Errors raised by [`PriorityTurnQueue`](super::PriorityTurnQueue).

use thiserror::Error;

/// Errors from queue operations.
///
/// Neither variant leaves the queue in a modified state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The participant already holds a place in the queue.
    #[error("participant {participant} is already in the queue")]
    DuplicateParticipant { participant: String },

    /// A single dequeue was attempted on an empty queue.
    ///
    /// This is a turn-accounting bug in the caller, not something to retry.
    #[error("cannot dequeue from an empty queue")]
    EmptyQueue,
}
