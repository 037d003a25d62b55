//! # Neutron Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Neutron application.
//! The chat core itself has no failure modes (blank or premature submissions are
//! silently ignored and reply selection is total), so errors only arise at the
//! edges: configuration loading, page rendering, server startup and argument
//! handling.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `NeutronError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.assistant.name.trim().is_empty() {
//!     return Err(anyhow!(NeutronError::Config("assistant.name must not be empty".into())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Neutron application.
#[derive(Error, Debug)]
pub enum NeutronError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Server error: {0}")]
    Server(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = NeutronError::Config("assistant.name must not be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: assistant.name must not be empty"
        );

        let server_err = NeutronError::Server("no free port".into());
        assert_eq!(server_err.to_string(), "Server error: no free port");

        let arg_err = NeutronError::ArgumentParsing("message text must not be empty".into());
        assert_eq!(
            arg_err.to_string(),
            "Argument parsing error: message text must not be empty"
        );
    }

    #[test]
    fn test_template_error_converts() {
        let tera_err = tera::Error::msg("unexpected end of template");
        let err: NeutronError = tera_err.into();
        assert!(err.to_string().starts_with("Template rendering error:"));
    }
}
