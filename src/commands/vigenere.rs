//! Vigenère command - keyword-driven shifts.

use anyhow::{Context, Result};
use clap::Args;

use classic_ciphers::{vigenere, Direction};

use super::{read_text, CommandExecutor, CommonArgs};

/// Encrypt or decrypt text with the Vigenère cipher.
///
/// Spaces are kept in place; other non-letters are dropped.
#[derive(Args, Debug)]
pub struct VigenereCommand {
    /// Keyword (letters only are used)
    #[arg(short, long)]
    pub key: String,

    /// Decrypt instead of encrypt
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to process (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommandExecutor for VigenereCommand {
    fn execute(&self) -> Result<()> {
        let text = read_text(self.text.as_deref())?;
        let direction = Direction::from_decrypt_flag(self.decrypt);

        if self.common.verbose {
            eprintln!("Vigenère {} with key '{}'", direction, self.key);
        }

        let result = vigenere(&text, &self.key, direction)
            .with_context(|| format!("Failed to {} with key '{}'", direction, self.key))?;
        println!("{}", result);
        Ok(())
    }
}
