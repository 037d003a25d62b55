//! # Chat Session State
//!
//! File: cli/src/core/session.rs
//!
//! ## Overview
//!
//! A `Session` owns the transcript of one conversation, the current draft
//! input and the thinking flag. It is a two-state machine:
//!
//! ```text
//!            submit(non-blank)
//!   Idle  ---------------------->  AwaitingReply
//!    ^                                  |
//!    +---------- resolve_reply ---------+
//! ```
//!
//! `submit` while `AwaitingReply`, or with blank text, is ignored without any
//! state change. An accepted submission yields a `PendingReply`. The token is
//! not `Clone` and `resolve_reply` consumes it, so every accepted submission is
//! resolved at most once, and the `isThinking` gate guarantees that at most one
//! token exists at a time.
//!
//! The session performs no waiting itself. Deferring the resolution is the job
//! of `core::scheduler`.
//!
use crate::core::clock::{Clock, TimeFormat};
use crate::core::message::{Message, MessageId, Sender};
use crate::core::replies;
use std::sync::Arc;
use tracing::debug;

/// Where the session is in its submit/reply cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingReply,
}

/// Proof of an accepted submission, redeemed by `Session::resolve_reply`.
#[derive(Debug)]
#[must_use = "an accepted submission must eventually be resolved"]
pub struct PendingReply {
    user_message: Message,
}

impl PendingReply {
    /// The user message appended by the submission that produced this token.
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }

    pub fn original_text(&self) -> &str {
        self.user_message.text()
    }
}

pub struct Session {
    transcript: Vec<Message>,
    pending_input: String,
    state: SessionState,
    next_id: u64,
    clock: Arc<dyn Clock>,
    time_format: TimeFormat,
}

impl Session {
    /// Empty transcript, system clock, default time format.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(crate::core::clock::SystemClock), TimeFormat::default())
    }

    pub fn with_clock(clock: Arc<dyn Clock>, time_format: TimeFormat) -> Self {
        Self {
            transcript: Vec::new(),
            pending_input: String::new(),
            state: SessionState::Idle,
            next_id: 1,
            clock,
            time_format,
        }
    }

    /// Seeds the transcript with an opening bot message.
    pub fn with_greeting(mut self, greeting: &str) -> Self {
        if !greeting.trim().is_empty() {
            self.append(Sender::Bot, greeting.to_string());
        }
        self
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_thinking(&self) -> bool {
        self.state == SessionState::AwaitingReply
    }

    #[cfg(test)]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replaces the draft input.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Submits the current draft input. See `submit`.
    pub fn submit_pending(&mut self) -> Option<PendingReply> {
        let draft = self.pending_input.clone();
        self.submit(&draft)
    }

    /// Appends a user message and enters `AwaitingReply`.
    ///
    /// Returns `None`, and changes nothing, if the trimmed text is empty or a
    /// reply is already pending.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("Ignoring blank submission");
            return None;
        }
        if self.is_thinking() {
            debug!("Ignoring submission while a reply is pending");
            return None;
        }

        let user_message = self.append(Sender::User, trimmed.to_string()).clone();
        self.pending_input.clear();
        self.state = SessionState::AwaitingReply;
        Some(PendingReply { user_message })
    }

    /// Appends the bot reply for a pending submission and returns to `Idle`.
    pub fn resolve_reply(&mut self, pending: PendingReply) -> &Message {
        let category = replies::classify(pending.original_text());
        debug!("Resolving reply with category '{}'", category);
        self.state = SessionState::Idle;
        self.append(Sender::Bot, category.template().to_string())
    }

    fn append(&mut self, sender: Sender, text: String) -> &Message {
        let id = MessageId::new(self.next_id);
        self.next_id += 1;
        let timestamp = self.time_format.format(&self.clock.now());
        self.transcript
            .push(Message::new(id, sender, text, timestamp));
        &self.transcript[self.transcript.len() - 1]
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("messages", &self.transcript.len())
            .field("state", &self.state)
            .field("time_format", &self.time_format.as_str())
            .finish()
    }
}
