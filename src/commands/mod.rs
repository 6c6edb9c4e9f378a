//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod caesar;
mod config;
mod interactive;
mod playfair;
mod vigenere;

pub use caesar::CaesarCommand;
pub use config::ConfigCommand;
pub use interactive::InteractiveCommand;
pub use playfair::PlayfairCommand;
pub use vigenere::VigenereCommand;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use classic_ciphers::CipherConfig;

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to an alternate config file (default: ~/.classic-ciphers/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output on stderr (normalized text, digrams, key table)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Path of the config file in use.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => CipherConfig::config_path().context("Failed to locate config file"),
        }
    }

    /// Loads the config file, falling back to defaults when it is missing.
    pub fn load_config(&self) -> Result<CipherConfig> {
        let path = self.config_path()?;
        let config = CipherConfig::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        if self.verbose {
            eprintln!("Using config {}", path.display());
        }
        Ok(config)
    }
}

/// Returns `text` or, when absent, everything on stdin (trailing newline removed).
pub fn read_text(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
