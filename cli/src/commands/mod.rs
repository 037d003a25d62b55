//! # Neutron Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the Neutron CLI. Each
//! command defines its own arguments structure and an async handler function,
//! and `main.rs` routes to them.
//!
//! ## Commands
//!
//! - `chat`: Interactive chat in the terminal
//! - `ask`: One-shot reply for a single message
//! - `config`: Print the effective configuration
//! - `srv`: Serve the chat page and API over HTTP
//!

/// Single message in, canned reply out. No session, no delay.
pub mod ask;
/// Interactive terminal chat with the scripted assistant.
pub mod chat;
/// Prints the effective configuration or the files it came from.
pub mod config;
/// Local HTTP server for the browser chat page.
pub mod srv;
