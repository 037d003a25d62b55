//! # Neutron CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! Drives `neutron chat` through piped stdin. With stdout not being a
//! terminal there is no prompt and no cursor movement, so the output is plain
//! text that can be matched directly.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_greets_and_replies() {
    let dir = sandbox();
    neutron_in(dir.path())
        .args(["chat", "--delay-ms", "0", "--no-header"])
        .write_stdin("I have an exam tomorrow\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Neutron · "))
        .stdout(predicate::str::contains("Hey, I’m Neutron"))
        .stdout(predicate::str::contains("You · "))
        .stdout(predicate::str::contains("  Study mode activated"))
        .stdout(predicate::str::contains("See you next time"));
}

#[test]
fn test_chat_replies_in_order() {
    let dir = sandbox();
    let output = neutron_in(dir.path())
        .args(["chat", "--delay-ms", "0", "--no-header"])
        .write_stdin("I feel so stressed\n\nrandom gibberish xyz\n")
        .output()
        .expect("chat runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stress = stdout.find("You are not a robot").expect("stress reply");
    let fallback = stdout.find("I like how you think").expect("fallback reply");
    assert!(stress < fallback);
    // Two accepted messages, two thinking indicators; the blank line adds nothing.
    assert_eq!(stdout.matches("Running a quick brain blast...").count(), 2);
}

#[test]
fn test_chat_header_uses_project_config() {
    let dir = sandbox();
    std::fs::write(
        dir.path().join(".neutron.toml"),
        "[assistant]\nname = \"Proton\"\ngreeting = \"Proton here.\"\n\n[chat]\nreply_delay_ms = 0\n",
    )
    .unwrap();

    neutron_in(dir.path())
        .arg("chat")
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[P] Proton"))
        .stdout(predicate::str::contains("Proton · "))
        .stdout(predicate::str::contains("Proton here."));
}

#[test]
fn test_chat_rejects_huge_delay() {
    let dir = sandbox();
    neutron_in(dir.path())
        .args(["chat", "--delay-ms", "600000"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delay-ms may be at most"));
}
