//! # Neutron Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Neutron is a scripted chat buddy. It answers with fixed templates picked by
//! keywords in what you type, after a short "thinking" pause. This file:
//! - Parses command-line arguments using Clap
//! - Sets up logging based on verbosity flags
//! - Loads the layered configuration
//! - Routes execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Chat in the terminal
//! neutron chat
//!
//! # Serve the browser page with debug logging
//! neutron -vv srv --port 9000
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command arguments and handlers (chat, ask, config, srv)
mod core; // Chat core and shared infrastructure (session, replies, config, errors)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "neutron",
    about = "🤖 Neutron: your AI hangout buddy (scripted, offline)",
    long_about = "Chat with Neutron, a keyword-driven assistant, in the terminal or in the browser.\n\
                  Replies are canned templates; nothing leaves your machine.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Extra configuration file, applied after the user and project files.
    #[arg(long, global = true, env = "NEUTRON_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat with the assistant in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print the reply to a single message and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Show the effective configuration.
    Config(commands::config::ConfigArgs),
    /// Serve the chat page and its API over HTTP.
    #[command(alias = "s")]
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = run(cli).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> crate::core::error::Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        // `ask` never needs the persona or timing, so it works even with a broken config.
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Chat(args) => {
            let config = crate::core::config::load_config(config_path)?;
            commands::chat::handle_chat(args, &config).await
        }
        Commands::Config(args) => {
            let config = crate::core::config::load_config(config_path)?;
            commands::config::handle_config(args, &config).await
        }
        Commands::Srv(args) => {
            let config = crate::core::config::load_config(config_path)?;
            commands::srv::handle_srv(args, &config).await
        }
    }
}
