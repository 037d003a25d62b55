//! # Neutron Effective Configuration (`neutron config`)
//!
//! File: cli/src/commands/config.rs
//!
//! Prints the configuration Neutron would run with after merging defaults,
//! the user file, the project `.neutron.toml` and `--config`.
//!
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// List the configuration files that were loaded instead of the values.
    #[arg(long)]
    pub sources: bool,
}

pub async fn handle_config(args: ConfigArgs, config: &Config) -> Result<()> {
    info!("Handling config command with args: {:?}", args);
    print!("{}", describe(&args, config)?);
    Ok(())
}

fn describe(args: &ConfigArgs, config: &Config) -> Result<String> {
    if !args.sources {
        return config.to_toml();
    }
    if config.sources.is_empty() {
        return Ok("defaults only\n".to_string());
    }
    Ok(config
        .sources
        .iter()
        .map(|path| format!("{}\n", path.display()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_describe_values() {
        let out = describe(&ConfigArgs { sources: false }, &Config::default()).unwrap();
        assert!(out.contains("name = \"Neutron\""));
        assert!(out.contains("[server]"));
    }

    #[test]
    fn test_describe_sources() {
        let mut config = Config::default();
        let out = describe(&ConfigArgs { sources: true }, &config).unwrap();
        assert_eq!(out, "defaults only\n");

        config.sources = vec![PathBuf::from("/a/.neutron.toml"), PathBuf::from("/b/c.toml")];
        let out = describe(&ConfigArgs { sources: true }, &config).unwrap();
        assert_eq!(out, "/a/.neutron.toml\n/b/c.toml\n");
    }
}
