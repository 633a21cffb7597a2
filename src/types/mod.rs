//! Core domain types shared by the queue and the command layer.

pub mod ids;

pub use ids::{ParticipantId, Priority};
