//! # Chat HTTP Handlers
//!
//! File: cli/src/commands/srv/api.rs
//!
//! ## Overview
//!
//! The server hosts exactly one session, shared by every request. Handlers
//! only translate between HTTP and the session; the submit/resolve rules are
//! the session's own.
//!
//! | Route                  | Behaviour                                           |
//! |------------------------|-----------------------------------------------------|
//! | `GET /`                | The rendered chat page                              |
//! | `GET /api/transcript`  | All messages plus the thinking flag                 |
//! | `POST /api/messages`   | Submit `{"text": ...}`; 202 if accepted, else 200   |
//! | `GET /healthz`         | `ok`                                                |
//!
//! A submission that the session ignores (blank, or while a reply is pending)
//! is not an error. The response simply reports `"accepted": false`.
//!
use crate::core::message::Message;
use crate::core::scheduler::{self, SharedSession};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    pub reply_delay: Duration,
    pub assistant_name: Arc<str>,
    pub page: Arc<str>,
}

#[derive(Serialize, Debug)]
pub struct TranscriptView {
    pub assistant: String,
    pub is_thinking: bool,
    pub messages: Vec<Message>,
}

#[derive(Deserialize, Debug)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct SubmitResponse {
    pub accepted: bool,
    pub is_thinking: bool,
}

pub async fn chat_page(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

pub async fn transcript(State(state): State<AppState>) -> Json<TranscriptView> {
    let session = state.session.lock().await;
    Json(TranscriptView {
        assistant: state.assistant_name.to_string(),
        is_thinking: session.is_thinking(),
        messages: session.transcript().to_vec(),
    })
}

pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> (StatusCode, Json<SubmitResponse>) {
    let scheduled =
        scheduler::submit_and_schedule(&state.session, &request.text, state.reply_delay).await;

    // Accepted means the submit left the session thinking. The reply task may
    // already have resolved by now, so the session is not re-read here.
    let (status, accepted, is_thinking) = match scheduled {
        Some(scheduled) => {
            info!(
                "Accepted message {}; reply due in {:?}",
                scheduled.user_message.id(),
                state.reply_delay
            );
            (StatusCode::ACCEPTED, true, true)
        }
        None => {
            debug!("Submission ignored by session");
            let is_thinking = state.session.lock().await.is_thinking();
            (StatusCode::OK, false, is_thinking)
        }
    };
    (
        status,
        Json(SubmitResponse {
            accepted,
            is_thinking,
        }),
    )
}

pub async fn healthz() -> &'static str {
    "ok"
}
