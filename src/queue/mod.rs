//! Priority turn queue for chat rounds.
//!
//! Participants sign up with a priority and are released for their turn
//! either one at a time or in fixed-size batches ("cycles").
//!
//! # Ordering
//!
//! - Higher priority is served first.
//! - Equal priorities are served in the order participants joined.
//! - A participant can hold at most one place in the queue.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//! use turn_queue::queue::PriorityTurnQueue;
//! use turn_queue::types::{ParticipantId, Priority};
//!
//! let mut queue = PriorityTurnQueue::new(NonZeroUsize::new(2).unwrap());
//! queue.enqueue(ParticipantId::new("alice"), Priority(5)).unwrap();
//! queue.enqueue(ParticipantId::new("bob"), Priority(10)).unwrap();
//! queue.enqueue(ParticipantId::new("carol"), Priority(5)).unwrap();
//!
//! assert_eq!(
//!     queue.dequeue_cycle(),
//!     vec![ParticipantId::new("bob"), ParticipantId::new("alice")]
//! );
//! assert_eq!(queue.dequeue_one().unwrap(), ParticipantId::new("carol"));
//! ```

mod error;
mod turn_queue;

pub use error::QueueError;
pub use turn_queue::{DEFAULT_CYCLE_SIZE, PriorityTurnQueue, QueueEntry};
