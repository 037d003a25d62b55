//! # Neutron Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles loading, merging, validation, and access to Neutron's
//! configuration: the assistant's persona (name, tagline, greeting, hint), the
//! chat timing (reply delay, timestamp format) and the `srv` binding.
//!
//! ## Architecture
//!
//! Configuration sources (lowest to highest precedence):
//! 1. Default values defined in the code
//! 2. User-specific `~/.config/neutron/config.toml` (platform config dir)
//! 3. Project-specific `.neutron.toml` in the current directory or ancestors
//!    (the search stops at a directory containing `.git`)
//! 4. An explicit file passed with `--config` / `NEUTRON_CONFIG`
//!
//! Command-specific flags (`--delay-ms`, `--port`, ...) are applied on top by
//! the individual command handlers.
//!
//! Each file is parsed into a `FileConfig` whose fields are all optional, and
//! only the fields a file actually sets are laid over the result so far.
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Neutron"
//!
//! [chat]
//! reply_delay_ms = 800
//! time_format = "%H:%M"
//!
//! [server]
//! port = 8000
//! ```
//!
use crate::core::clock::{SystemClock, TimeFormat, DEFAULT_TIME_FORMAT};
use crate::core::error::{NeutronError, Result};
use crate::core::session::Session;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

const PROJECT_CONFIG_FILENAME: &str = ".neutron.toml";

/// Upper bound for `chat.reply_delay_ms`.
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// The effective configuration after all sources have been merged.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub chat: ChatConfig,
    pub server: ServerConfig,
    /// Files that contributed to this configuration, in load order.
    #[serde(skip)]
    pub sources: Vec<PathBuf>,
}

/// How the assistant presents itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub name: String,
    pub tagline: String,
    /// Opening bot message of every session. Empty disables it.
    pub greeting: String,
    /// Suggestion line shown above the transcript.
    pub hint: String,
}

/// Timing of the scripted conversation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
    /// strftime pattern for message timestamps.
    pub time_format: String,
}

/// Binding for `neutron srv`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Neutron".to_string(),
            tagline: "Your AI hangout buddy for smart, friendly conversations".to_string(),
            greeting: "Hey, I’m Neutron 🤖✨\n\
                Think of me as your smart hangout buddy: half lab-brain, half chill coffee chat.\n\
                What do you feel like talking about first?"
                .to_string(),
            hint: "💡 You can ask about study plans, career ideas, tech questions, or just hang out and talk."
                .to_string(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 800,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            enable_cors: true,
        }
    }
}

/// One configuration file as written on disk. Every field is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    assistant: FileAssistant,
    #[serde(default)]
    chat: FileChat,
    #[serde(default)]
    server: FileServer,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileAssistant {
    name: Option<String>,
    tagline: Option<String>,
    greeting: Option<String>,
    hint: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileChat {
    reply_delay_ms: Option<u64>,
    time_format: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileServer {
    host: Option<IpAddr>,
    port: Option<u16>,
    enable_cors: Option<bool>,
}

impl Config {
    /// Lays the fields set in `file` over the current values.
    fn overlay(&mut self, file: FileConfig) {
        let FileConfig {
            assistant,
            chat,
            server,
        } = file;

        if let Some(name) = assistant.name {
            self.assistant.name = name;
        }
        if let Some(tagline) = assistant.tagline {
            self.assistant.tagline = tagline;
        }
        if let Some(greeting) = assistant.greeting {
            self.assistant.greeting = greeting;
        }
        if let Some(hint) = assistant.hint {
            self.assistant.hint = hint;
        }

        if let Some(delay) = chat.reply_delay_ms {
            self.chat.reply_delay_ms = delay;
        }
        if let Some(format) = chat.time_format {
            self.chat.time_format = format;
        }

        if let Some(host) = server.host {
            self.server.host = host;
        }
        if let Some(port) = server.port {
            self.server.port = port;
        }
        if let Some(enable_cors) = server.enable_cors {
            self.server.enable_cors = enable_cors;
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat.reply_delay_ms)
    }

    pub fn time_format(&self) -> Result<TimeFormat> {
        TimeFormat::parse(&self.chat.time_format)
    }

    /// A fresh session using the system clock, the configured time format and greeting.
    pub fn new_session(&self) -> Result<Session> {
        let session = Session::with_clock(Arc::new(SystemClock), self.time_format()?)
            .with_greeting(&self.assistant.greeting);
        Ok(session)
    }

    /// The effective configuration rendered as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration as TOML")
    }
}

/// Loads defaults, the user file, the project file and an optional explicit file.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut config = Config::default();

    if let Some(path) = user_config_path() {
        apply_file_if_present(&mut config, &path)?;
    }

    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            apply_file(&mut config, &path)?;
        }
        None => debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        ),
    }

    if let Some(raw) = explicit {
        let path = expand_path(raw);
        if !path.is_file() {
            return Err(anyhow!(NeutronError::Config(format!(
                "Configuration file '{}' does not exist.",
                path.display()
            ))));
        }
        info!("Loading configuration from: {}", path.display());
        apply_file(&mut config, &path)?;
    }

    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("dev", "Neutron", "neutron") {
        Some(dirs) => Some(dirs.config_dir().join("config.toml")),
        None => {
            debug!("Could not determine user config directory.");
            None
        }
    }
}

fn apply_file_if_present(config: &mut Config, path: &Path) -> Result<()> {
    if path.is_file() {
        info!("Loading user configuration from: {}", path.display());
        apply_file(config, path)
    } else {
        debug!("User configuration file not found at {}", path.display());
        Ok(())
    }
}

fn apply_file(config: &mut Config, path: &Path) -> Result<()> {
    let file = load_file_config(path)?;
    config.overlay(file);
    config.sources.push(path.to_path_buf());
    Ok(())
}

fn load_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Walks from `start` towards the root looking for `.neutron.toml`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(NeutronError::Config(
            "assistant.name must not be empty.".to_string()
        )));
    }
    if config.chat.reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(NeutronError::Config(format!(
            "chat.reply_delay_ms is {} but may be at most {}.",
            config.chat.reply_delay_ms, MAX_REPLY_DELAY_MS
        ))));
    }
    config.time_format()?;
    Ok(())
}
