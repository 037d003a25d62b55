//! # Neutron Page Templating
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Renders the single chat page served by `neutron srv`. The page template is
//! compiled into the binary and rendered once at server startup with the
//! configured assistant persona. Tera auto-escaping is on (the template is
//! registered under an `.html` name), so persona strings from configuration
//! cannot inject markup.
//!
//! The page itself only draws what the JSON API reports. All session state
//! lives in the server.
//!
use crate::core::config::AssistantConfig;
use crate::core::error::{NeutronError, Result};
use anyhow::anyhow;
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

const CHAT_PAGE_NAME: &str = "chat.html";
const CHAT_PAGE_TEMPLATE: &str = include_str!("../../templates/chat.html.tera");

/// Indicator shown while a reply is pending.
pub const THINKING_TEXT: &str = "Running a quick brain blast...";

#[derive(Serialize, Debug)]
struct PageContext<'a> {
    name: &'a str,
    tagline: &'a str,
    hint: &'a str,
    avatar: String,
    placeholder: String,
    thinking_text: &'a str,
}

/// First character of the assistant name, uppercased, for the avatar badge.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Renders the chat page HTML for the given persona.
pub fn render_chat_page(assistant: &AssistantConfig) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(CHAT_PAGE_NAME, CHAT_PAGE_TEMPLATE)
        .map_err(|e| {
            anyhow!(NeutronError::Template { source: e })
                .context("Failed to compile the chat page template")
        })?;

    let page = PageContext {
        name: &assistant.name,
        tagline: &assistant.tagline,
        hint: &assistant.hint,
        avatar: avatar_initial(&assistant.name),
        placeholder: format!("Type a message to {}…", assistant.name),
        thinking_text: THINKING_TEXT,
    };
    let context = Context::from_serialize(&page).map_err(|e| {
        anyhow!(NeutronError::Template { source: e }).context("Failed to build page context")
    })?;

    let html = tera.render(CHAT_PAGE_NAME, &context).map_err(|e| {
        anyhow!(NeutronError::Template { source: e })
            .context("Tera rendering failed for the chat page")
    })?;
    debug!("Rendered chat page ({} bytes)", html.len());
    Ok(html)
}
