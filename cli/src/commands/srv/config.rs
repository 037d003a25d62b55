//! # Neutron HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//!
//! ## Overview
//!
//! Combines the `[server]` and `[chat]` sections of the loaded configuration
//! with the `neutron srv` command-line flags. Flags always win when given.
//!
//! ```bash
//! # Bind to all interfaces on port 9000 with instant replies
//! neutron srv --host 0.0.0.0 --port 9000 --delay-ms 0
//! ```
//!
use crate::core::config::{AssistantConfig, Config, MAX_REPLY_DELAY_MS};
use crate::core::error::{NeutronError, Result};
use anyhow::anyhow;
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
///
/// Every flag is optional; an absent flag falls back to the configuration file
/// value, then to the built-in default.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Port to listen on (default 8000). The next free port is used if it is taken.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// IP address to bind to (default 127.0.0.1).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Milliseconds to "think" before each reply. Overrides `chat.reply_delay_ms`.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

/// # Effective Server Configuration (`ServerSettings`)
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub reply_delay: Duration,
    pub assistant: AssistantConfig,
}

/// Merges command-line flags over the loaded configuration.
pub fn merge_settings(args: &SrvArgs, config: &Config) -> Result<ServerSettings> {
    if let Some(ms) = args.delay_ms {
        if ms > MAX_REPLY_DELAY_MS {
            return Err(anyhow!(NeutronError::ArgumentParsing(format!(
                "--delay-ms may be at most {}",
                MAX_REPLY_DELAY_MS
            ))));
        }
    }

    let settings = ServerSettings {
        host: args.host.unwrap_or(config.server.host),
        port: args.port.unwrap_or(config.server.port),
        enable_cors: config.server.enable_cors && !args.no_cors,
        reply_delay: args
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| config.reply_delay()),
        assistant: config.assistant.clone(),
    };
    debug!("Merged server settings: {:?}", settings);
    Ok(settings)
}
