//! # Neutron HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//!
//! ## Overview
//!
//! This module runs the browser front end for Neutron:
//! - The chat page and its JSON API (see `api`)
//! - Port availability checking with automatic fallback
//! - Optional permissive CORS
//! - Request tracing
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Render the chat page once and create the shared session
//! 2. Set up the Axum router with appropriate middleware
//! 3. Find an available port if the requested one is in use
//! 4. Serve until Ctrl+C or SIGTERM
//!
use super::api::{self, AppState};
use super::config::ServerSettings;
use crate::core::config::Config;
use crate::core::error::{NeutronError, Result};
use crate::core::{scheduler, templating};
use anyhow::{anyhow, Context};
use axum::routing::{get, post};
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Builds the session and router, binds the first free port starting at the
/// configured one, and serves until a shutdown signal arrives.
///
/// ## Errors
///
/// - No free port within `MAX_PORT_ATTEMPTS` consecutive ports.
/// - The chat page template fails to render.
/// - Axum reports a fatal error while serving.
pub async fn run_server(settings: ServerSettings, config: &Config) -> Result<()> {
    let listener = bind_available_port(settings.host, settings.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read the bound address")?;

    let state = build_state(&settings, config)?;
    let app = create_app(state, settings.enable_cors);

    println!("\n=================================================================");
    println!("🤖 {} is online", settings.assistant.name);
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("⏱️  Reply delay:       {} ms", settings.reply_delay.as_millis());
    println!("🔒 CORS enabled:      {}", settings.enable_cors);
    println!("=================================================================\n");
    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

fn build_state(settings: &ServerSettings, config: &Config) -> Result<AppState> {
    let page = templating::render_chat_page(&settings.assistant)?;
    let session = scheduler::shared(config.new_session()?);
    Ok(AppState {
        session,
        reply_delay: settings.reply_delay,
        assistant_name: Arc::from(settings.assistant.name.as_str()),
        page: Arc::from(page),
    })
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C, or SIGTERM on Unix, is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Bind Available Port (`bind_available_port`)
///
/// Tries `start_port` and then the following ports, up to `max_attempts` in
/// total, and returns the first listener that binds. Port 0 asks the OS for
/// any free port.
async fn bind_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<TcpListener> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    Err(anyhow!(NeutronError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        host, start_port, max_attempts
    ))))
}

/// # Create Axum Application (`create_app`)
///
/// Routes plus tracing and (optionally permissive) CORS middleware.
fn create_app(state: AppState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(api::chat_page))
        .route("/api/transcript", get(api::transcript))
        .route("/api/messages", post(api::submit_message))
        .route("/healthz", get(api::healthz))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

// --- Unit Tests ---
