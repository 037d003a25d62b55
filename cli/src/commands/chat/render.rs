//! # Terminal Rendering for `neutron chat`
//!
//! File: cli/src/commands/chat/render.rs
//!
//! Turns transcript entries into terminal text. Every message is printed as a
//! meta line (`Neutron · 10:42` or `You · 10:42`) followed by the message lines,
//! indented. When stdout is a terminal the thinking indicator is erased in place
//! once the reply arrives; otherwise it stays as its own line.
//!
use crate::core::config::AssistantConfig;
use crate::core::message::{Message, Sender};
use crate::core::templating::{avatar_initial, THINKING_TEXT};
use std::io::Write;

const INDENT: &str = "  ";
/// Erase the current line and return the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

pub const HELP_TEXT: &str = concat!(
    "Commands:\n",
    "  /help        show this help\n",
    "  /transcript  print the whole conversation again\n",
    "  /quit        leave (also /exit, bye, or Ctrl+D)",
);

pub struct Renderer {
    bot_name: String,
    interactive: bool,
}

impl Renderer {
    pub fn new(bot_name: &str, interactive: bool) -> Self {
        Self {
            bot_name: bot_name.to_string(),
            interactive,
        }
    }

    pub fn format_message(&self, message: &Message) -> String {
        let author = match message.sender() {
            Sender::User => "You",
            Sender::Bot => self.bot_name.as_str(),
        };
        let mut rendered = format!("{} · {}", author, message.timestamp());
        for line in message.lines() {
            rendered.push('\n');
            rendered.push_str(INDENT);
            rendered.push_str(line);
        }
        rendered
    }

    pub fn prompt<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.interactive {
            write!(out, "You › ")?;
            out.flush()?;
        }
        Ok(())
    }

    pub fn show_thinking<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.interactive {
            write!(out, "{} {}", self.bot_name, THINKING_TEXT)?;
            out.flush()
        } else {
            writeln!(out, "{} {}", self.bot_name, THINKING_TEXT)
        }
    }

    pub fn clear_thinking<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.interactive {
            write!(out, "{}", CLEAR_LINE)?;
        }
        Ok(())
    }

    pub fn farewell(&self) -> String {
        format!("{} · See you next time 👋", self.bot_name)
    }
}

/// Banner printed when a chat starts.
pub fn format_header(assistant: &AssistantConfig) -> String {
    let mut header = format!(
        "[{}] {}\n{}\n",
        avatar_initial(&assistant.name),
        assistant.name,
        assistant.tagline
    );
    if !assistant.hint.is_empty() {
        header.push('\n');
        header.push_str(&assistant.hint);
        header.push('\n');
    }
    header.push_str("Type /help for commands.\n");
    header
}
