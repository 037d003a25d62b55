//! # Neutron CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! Top-level behaviour of the `neutron` binary: standard flags, the `help`
//! subcommand and argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    neutron_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("srv"));
}

#[test]
fn test_missing_subcommand_fails() {
    neutron_cmd().assert().failure();
}

#[test]
fn test_unknown_subcommand_fails() {
    neutron_cmd()
        .arg("teleport")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
