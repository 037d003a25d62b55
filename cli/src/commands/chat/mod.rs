//! # Neutron Terminal Chat (`neutron chat`)
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! An interactive chat with the scripted assistant on stdin/stdout. Each line
//! typed becomes the session's draft input and is submitted. An accepted
//! submission shows the thinking indicator, waits for the scheduled reply and
//! prints it.
//!
//! While a reply is pending the loop does not read stdin, which is the
//! terminal counterpart of the web page's disabled send button. Blank lines are
//! ignored by the session without any output.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting with the configured delay
//! neutron chat
//!
//! # Instant replies, no banner (handy for piping)
//! echo "I have an exam tomorrow" | neutron chat --delay-ms 0 --no-header
//! ```
//!
use crate::core::config::{AssistantConfig, Config, MAX_REPLY_DELAY_MS};
use crate::core::error::{NeutronError, Result};
use crate::core::scheduler::{self, SharedSession};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

mod render;

use render::Renderer;

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Milliseconds to "think" before each reply. Overrides `chat.reply_delay_ms`.
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Do not print the assistant banner and greeting hint at startup.
    #[arg(long)]
    pub no_header: bool,
}

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Quit,
    Help,
    Transcript,
    Message(&'a str),
}

impl<'a> ReplInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "/quit" | "/exit" | "bye" => ReplInput::Quit,
            "/help" => ReplInput::Help,
            "/transcript" => ReplInput::Transcript,
            _ => ReplInput::Message(line),
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds a session from the configuration and runs the chat loop on the
/// process's stdin and stdout until the user quits or stdin closes.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let delay = match args.delay_ms {
        Some(ms) if ms > MAX_REPLY_DELAY_MS => {
            return Err(anyhow!(NeutronError::ArgumentParsing(format!(
                "--delay-ms may be at most {}",
                MAX_REPLY_DELAY_MS
            ))));
        }
        Some(ms) => Duration::from_millis(ms),
        None => config.reply_delay(),
    };

    let session = scheduler::shared(config.new_session()?);
    let mut out = std::io::stdout();
    let renderer = Renderer::new(&config.assistant.name, out.is_terminal());
    let header = (!args.no_header).then_some(&config.assistant);
    let input = BufReader::new(tokio::io::stdin());

    run_repl(&session, delay, input, &mut out, &renderer, header).await
}

/// Runs the read/submit/reply loop over arbitrary input and output.
async fn run_repl<R, W>(
    session: &SharedSession,
    delay: Duration,
    input: R,
    out: &mut W,
    renderer: &Renderer,
    header: Option<&AssistantConfig>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(assistant) = header {
        writeln!(out, "{}", render::format_header(assistant))?;
    }
    print_transcript(session, out, renderer).await?;

    let mut lines = input.lines();
    loop {
        renderer.prompt(out)?;
        let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
            debug!("stdin closed, ending chat");
            writeln!(out)?;
            break;
        };

        match ReplInput::parse(&line) {
            ReplInput::Quit => {
                writeln!(out, "{}", renderer.farewell())?;
                break;
            }
            ReplInput::Help => writeln!(out, "{}", render::HELP_TEXT)?,
            ReplInput::Transcript => print_transcript(session, out, renderer).await?,
            ReplInput::Message(text) => {
                session.lock().await.set_pending_input(text);
                let Some(scheduled) = scheduler::submit_pending_and_schedule(session, delay).await
                else {
                    continue;
                };

                writeln!(out, "{}", renderer.format_message(&scheduled.user_message))?;
                renderer.show_thinking(out)?;
                let reply = scheduled.reply.await.context("Reply task failed")?;
                renderer.clear_thinking(out)?;
                writeln!(out, "{}", renderer.format_message(&reply))?;
            }
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

async fn print_transcript<W: Write>(
    session: &SharedSession,
    out: &mut W,
    renderer: &Renderer,
) -> Result<()> {
    let session = session.lock().await;
    for message in session.transcript() {
        writeln!(out, "{}", renderer.format_message(message))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Session;

    async fn run(input: &'static str) -> (String, SharedSession) {
        let session = scheduler::shared(Session::new().with_greeting("Hey, I’m Neutron"));
        let renderer = Renderer::new("Neutron", false);
        let mut out = Vec::new();
        run_repl(
            &session,
            Duration::from_millis(800),
            BufReader::new(input.as_bytes()),
            &mut out,
            &renderer,
            None,
        )
        .await
        .expect("repl runs");
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_parse_repl_input() {
        assert_eq!(ReplInput::parse(" /QUIT "), ReplInput::Quit);
        assert_eq!(ReplInput::parse("bye"), ReplInput::Quit);
        assert_eq!(ReplInput::parse("/exit"), ReplInput::Quit);
        assert_eq!(ReplInput::parse("/help"), ReplInput::Help);
        assert_eq!(ReplInput::parse("/transcript"), ReplInput::Transcript);
        assert_eq!(ReplInput::parse("bye bye"), ReplInput::Message("bye bye"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exchange_prints_user_thinking_and_reply() {
        let (output, session) = run("I have an exam tomorrow\n/quit\n").await;

        assert!(output.starts_with("Neutron · "));
        assert!(output.contains("You · "));
        assert!(output.contains("  I have an exam tomorrow"));
        assert!(output.contains("Neutron Running a quick brain blast..."));
        assert!(output.contains("  Study mode activated 📚🧠"));
        assert!(output.trim_end().ends_with("See you next time 👋"));

        let s = session.lock().await;
        assert_eq!(s.transcript().len(), 3);
        assert!(!s.is_thinking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_lines_are_silent() {
        let (output, session) = run("\n   \n").await;
        assert!(!output.contains("brain blast"));
        assert_eq!(session.lock().await.transcript().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_line_gets_one_reply_in_order() {
        let (output, session) = run("I feel so stressed\nrandom gibberish xyz\n").await;

        let stress = output.find("You are not a robot").expect("stress reply");
        let fallback = output.find("I like how you think").expect("fallback reply");
        assert!(stress < fallback);

        let s = session.lock().await;
        assert_eq!(s.transcript().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_help_and_transcript_commands() {
        let (output, session) = run("/help\n/transcript\n").await;
        assert!(output.contains("/transcript  print the whole conversation again"));
        // Greeting printed at start and again for /transcript.
        assert_eq!(output.matches("Hey, I’m Neutron").count(), 2);
        assert_eq!(session.lock().await.transcript().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_zero_delay_echoes_user_message_before_reply() {
        for _ in 0..200 {
            let session = scheduler::shared(Session::new());
            let renderer = Renderer::new("Neutron", false);
            let mut out = Vec::new();
            run_repl(
                &session,
                Duration::ZERO,
                BufReader::new("I have an exam tomorrow\n".as_bytes()),
                &mut out,
                &renderer,
                None,
            )
            .await
            .expect("repl runs");

            let output = String::from_utf8(out).unwrap();
            let user = output.find("You · ").expect("user message echoed");
            let reply = output.find("Study mode activated").expect("reply printed");
            assert!(user < reply, "{}", output);
            assert_eq!(output.matches("Neutron · ").count(), 1, "{}", output);
        }
    }
}
