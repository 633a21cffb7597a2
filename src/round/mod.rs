//! Per-channel round state driven by chat commands.
//!
//! A [`TurnRound`] owns the turn queue for the current round together with the
//! bot configuration, and turns parsed commands into [`Reply`] messages. It is
//! an explicit context object: the transport passes every chat line in and
//! forwards whatever comes back out.
//!
//! # Command Flow
//!
//! 1. `handle_message` parses the line with the configured prefix
//! 2. Non-commands are ignored
//! 3. `apply` mutates the queue and builds exactly one reply
//!
//! Permission checks (who may run `next` or `newround`) belong to the caller.

mod reply;

use std::num::NonZeroUsize;

use tracing::{debug, info, instrument};

use crate::commands::{Command, parse_command};
use crate::config::BotConfig;
use crate::queue::PriorityTurnQueue;
use crate::types::{ParticipantId, Priority};

pub use reply::Reply;

const EMPTY_QUEUE_MESSAGE: &str = "The queue is empty.";

/// The turn queue for one channel, plus the settings that drive it.
#[derive(Debug)]
pub struct TurnRound {
    config: BotConfig,
    queue: PriorityTurnQueue<ParticipantId>,
    /// Starts at 1 and increments on every `newround`.
    round_number: u64,
}

impl TurnRound {
    /// Starts round 1 with the configured cycle size.
    pub fn new(config: BotConfig) -> Self {
        let queue = PriorityTurnQueue::new(config.cycle_size);
        TurnRound {
            config,
            queue,
            round_number: 1,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn queue(&self) -> &PriorityTurnQueue<ParticipantId> {
        &self.queue
    }

    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    /// Handles one chat message from `user`.
    ///
    /// Returns `None` when the message is not a command.
    pub fn handle_message(&mut self, user: &str, text: &str) -> Option<Reply> {
        let Some(command) = parse_command(text, &self.config.command_prefix) else {
            debug!(user, "Ignoring non-command message");
            return None;
        };
        Some(self.apply(&ParticipantId::new(user), command))
    }

    /// Applies a parsed command on behalf of `user`.
    #[instrument(skip(self), fields(round = self.round_number))]
    pub fn apply(&mut self, user: &ParticipantId, command: Command) -> Reply {
        match command {
            Command::Join { priority } => {
                let priority = priority.unwrap_or(self.config.default_priority);
                self.join(user, priority)
            }
            Command::NextCycle => self.next_cycle(),
            Command::ShowQueue => self.show_queue(),
            Command::ShowPosition => self.show_position(user),
            Command::NewRound { cycle_size } => self.new_round(cycle_size),
        }
    }

    fn join(&mut self, user: &ParticipantId, priority: Priority) -> Reply {
        match self.queue.enqueue(user.clone(), priority) {
            Ok(position) => {
                info!(participant = %user, %priority, position, "Participant joined");
                Reply::whisper(
                    user,
                    format!(
                        "{}, you joined the queue at position {}.",
                        user,
                        position + 1
                    ),
                )
            }
            Err(e) => {
                debug!(participant = %user, error = %e, "Join rejected");
                Reply::whisper(user, format!("Sorry {}, you're already in the queue.", user))
            }
        }
    }

    fn next_cycle(&mut self) -> Reply {
        let batch = self.queue.dequeue_cycle();
        if batch.is_empty() {
            info!("Cycle requested on an empty queue");
            return Reply::chat(EMPTY_QUEUE_MESSAGE);
        }

        info!(
            released = batch.len(),
            remaining = self.queue.len(),
            "Released cycle"
        );
        let names: Vec<&str> = batch.iter().map(ParticipantId::as_str).collect();
        Reply::chat(format!("Up next: {}", names.join(", ")))
    }

    fn show_queue(&self) -> Reply {
        if self.queue.is_empty() {
            return Reply::chat(EMPTY_QUEUE_MESSAGE);
        }

        let listing: Vec<String> = self
            .queue
            .iter()
            .map(|entry| format!("{} ({})", entry.participant, entry.priority))
            .collect();
        Reply::chat(format!("Queue: {}", listing.join(", ")))
    }

    fn show_position(&self, user: &ParticipantId) -> Reply {
        match self.queue.position(user) {
            Some(position) => Reply::whisper(
                user,
                format!("{}, you're number {} in the queue.", user, position + 1),
            ),
            None => Reply::whisper(user, format!("{}, you're not in the queue.", user)),
        }
    }

    /// Replaces the queue. Without a new size the current cycle size carries over.
    fn new_round(&mut self, cycle_size: Option<NonZeroUsize>) -> Reply {
        let cycle_size = cycle_size.unwrap_or(self.queue.cycle_size());
        let discarded = self.queue.len();

        self.queue = PriorityTurnQueue::new(cycle_size);
        self.round_number += 1;

        info!(
            round = self.round_number,
            cycle_size = cycle_size.get(),
            discarded,
            "Started new round"
        );
        Reply::chat(format!(
            "Round {} started. Turns are taken {} at a time.",
            self.round_number, cycle_size
        ))
    }
}
