//! # Reply Scheduler
//!
//! File: cli/src/core/scheduler.rs
//!
//! ## Overview
//!
//! Provides the "after a fixed delay, resolve the reply" step shared by the
//! terminal chat and the HTTP surface. A session is wrapped in
//! `Arc<tokio::sync::Mutex<_>>`. The lock is taken for the synchronous submit
//! and again for the resolution, and is never held across the delay.
//!
//! Scheduled resolutions are never cancelled: once a submission is accepted
//! the spawned task always runs to completion, even if the caller drops the
//! returned `JoinHandle`.
//!
//! The accepted user message is captured from the submit itself. Callers must
//! not re-read it from the transcript afterwards: with a zero delay the reply
//! task may already have appended the bot message by then.
//!
//! ## Examples
//!
//! ```rust
//! let session = shared(Session::new());
//! if let Some(scheduled) = submit_and_schedule(&session, "plan my week", Duration::from_millis(800)).await {
//!     println!("{}", scheduled.user_message.text());
//!     let reply = scheduled.reply.await?;
//!     println!("{}", reply.text());
//! }
//! ```
//!
use crate::core::message::Message;
use crate::core::session::{PendingReply, Session, SessionState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A session shared between a presentation layer and its reply timer.
pub type SharedSession = Arc<Mutex<Session>>;

pub fn shared(session: Session) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// An accepted submission and the task that will answer it.
#[derive(Debug)]
pub struct ScheduledReply {
    /// The user message exactly as the submit appended it.
    pub user_message: Message,
    /// Yields the bot message once it has been appended.
    pub reply: JoinHandle<Message>,
}

/// Submits `text` and, if accepted, schedules its resolution after `delay`.
///
/// Returns `None` when the session ignored the submission (blank text or a
/// reply still pending).
pub async fn submit_and_schedule(
    session: &SharedSession,
    text: &str,
    delay: Duration,
) -> Option<ScheduledReply> {
    let pending = session.lock().await.submit(text)?;
    Some(schedule_reply(Arc::clone(session), pending, delay))
}

/// Submits the session's current draft input. See `submit_and_schedule`.
pub async fn submit_pending_and_schedule(
    session: &SharedSession,
    delay: Duration,
) -> Option<ScheduledReply> {
    let pending = session.lock().await.submit_pending()?;
    Some(schedule_reply(Arc::clone(session), pending, delay))
}

/// Resolves `pending` on `session` once `delay` has elapsed.
fn schedule_reply(
    session: SharedSession,
    pending: PendingReply,
    delay: Duration,
) -> ScheduledReply {
    debug!(
        "Scheduling reply to {:?} in {:?}",
        pending.original_text(),
        delay
    );
    let user_message = pending.user_message().clone();
    let reply = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut guard = session.lock().await;
        let reply = guard.resolve_reply(pending).clone();
        debug_assert_eq!(guard.state(), SessionState::Idle);
        info!("Reply {} appended", reply.id());
        reply
    });
    ScheduledReply {
        user_message,
        reply,
    }
}
