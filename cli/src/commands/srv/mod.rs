//! # Neutron Web Chat (`neutron srv`)
//!
//! File: cli/src/commands/srv/mod.rs
//!
//! ## Overview
//!
//! Serves the chat in a browser: one HTML page plus a small JSON API over a
//! single in-process session. Options:
//! - Port binding (with automatic fallback if the port is in use)
//! - Host interface binding
//! - CORS
//! - Reply delay
//!
//! ## Architecture
//!
//! - `config.rs`: Merging of command-line flags over the loaded configuration
//! - `server_logic.rs`: Router, port fallback, shutdown
//! - `api.rs`: Request handlers and the shared state
//!
//! ## Examples
//!
//! ```bash
//! # Serve on http://localhost:8000
//! neutron srv
//!
//! # Specify a port and host interface
//! neutron srv --port 9000 --host 0.0.0.0
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Request handlers and shared state for the chat API.
pub mod api;

/// Merges `srv` flags over the loaded configuration.
pub mod config;

/// Contains the core Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Merges the command-line flags over the loaded configuration and runs the
/// server until it is shut down.
pub async fn handle_srv(args: SrvArgs, config: &Config) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let settings = config::merge_settings(&args, config)?;
    info!("Effective server settings: {:?}", settings);

    server_logic::run_server(settings, config).await?;

    Ok(())
}
