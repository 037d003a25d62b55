//! # Neutron Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the chat core and the infrastructure shared by every
//! command.
//!
//! ## Architecture
//!
//! Chat core:
//! - `message`: Immutable transcript entries
//! - `replies`: Keyword-based reply selection
//! - `session`: The transcript state machine (`Idle` / `AwaitingReply`)
//! - `scheduler`: Deferred reply resolution on the tokio runtime
//! - `clock`: Injected "current time" and timestamp formatting
//!
//! Infrastructure:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Rendering of the chat page for `neutron srv`
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{NeutronError, Result}; // For error handling
//! use crate::core::scheduler; // For submitting messages and awaiting replies
//! ```
//!
pub mod clock;
pub mod config;
pub mod error;
pub mod message;
pub mod replies;
pub mod scheduler;
pub mod session;
pub mod templating;
