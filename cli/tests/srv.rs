//! # Neutron CLI Srv Integration Tests
//!
//! File: cli/tests/srv.rs
//!
//! `neutron srv` runs until it is signalled, so these tests only cover the
//! paths that exit on their own. Router behaviour is tested inside
//! `server_logic.rs`.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_srv_rejects_invalid_host() {
    let dir = sandbox();
    neutron_in(dir.path())
        .args(["srv", "--host", "not-an-ip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_srv_rejects_huge_delay() {
    let dir = sandbox();
    neutron_in(dir.path())
        .args(["srv", "--delay-ms", "600000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delay-ms may be at most"));
}
