//! # Neutron One-Shot Reply (`neutron ask`)
//!
//! File: cli/src/commands/ask.rs
//!
//! Prints the reply Neutron would give to a single message, without a session
//! and without the thinking delay. Useful for scripting and for checking which
//! keyword category a phrase falls into.
//!
//! ```bash
//! neutron ask I have an exam tomorrow
//! neutron ask --category "plan my week"   # prints: planning
//! ```
//!
use crate::core::error::{NeutronError, Result};
use crate::core::replies;
use anyhow::anyhow;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to reply to. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print only the matched category label instead of the reply.
    #[arg(long)]
    pub category: bool,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    println!("{}", answer(&args)?);
    Ok(())
}

fn answer(args: &AskArgs) -> Result<String> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(anyhow!(NeutronError::ArgumentParsing(
            "message text must not be empty".to_string()
        )));
    }

    let category = replies::classify(&text);
    info!("Matched reply category '{}'", category);
    if args.category {
        Ok(category.label().to_string())
    } else {
        Ok(replies::select_reply(&text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str], category: bool) -> AskArgs {
        AskArgs {
            text: words.iter().map(|w| w.to_string()).collect(),
            category,
        }
    }

    #[test]
    fn test_answer_joins_words() {
        let reply = answer(&args(&["my", "co-op", "search"], false)).unwrap();
        assert!(reply.starts_with("Career radar online"));
    }

    #[test]
    fn test_answer_category_label() {
        assert_eq!(answer(&args(&["plan my week"], true)).unwrap(), "planning");
        assert_eq!(answer(&args(&["hello"], true)).unwrap(), "level_up");
    }

    #[test]
    fn test_blank_text_is_an_error() {
        let err = answer(&args(&["  ", ""], false)).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
