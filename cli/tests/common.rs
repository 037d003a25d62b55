//! # Neutron CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `ask.rs`, ...).
//! Every command built here runs in a temporary directory with its own HOME
//! and XDG config directory, so a developer's real `~/.config/neutron` or a
//! stray `.neutron.toml` cannot leak into the tests.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// # Get Neutron Command (`neutron_cmd`)
///
/// An `assert_cmd::Command` for the compiled `neutron` binary.
///
/// ## Panics
/// Panics if the `neutron` binary cannot be found via `Command::cargo_bin`.
pub fn neutron_cmd() -> Command {
    Command::cargo_bin("neutron").expect("Failed to find neutron binary for testing")
}

/// A `neutron` command isolated inside `sandbox`.
pub fn neutron_in(sandbox: &Path) -> Command {
    let mut cmd = neutron_cmd();
    cmd.current_dir(sandbox)
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join("xdg"))
        .env_remove("NEUTRON_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// A fresh sandbox directory for `neutron_in`.
pub fn sandbox() -> TempDir {
    tempfile::tempdir().expect("Failed to create sandbox dir")
}
