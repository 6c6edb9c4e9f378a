//! Caesar command - shift every letter by a fixed amount.

use anyhow::Result;
use clap::Args;

use classic_ciphers::{caesar, Direction};

use super::{read_text, CommandExecutor, CommonArgs};

/// Encrypt or decrypt text with the Caesar cipher.
///
/// Output is lowercase. Spaces are kept; other non-letters become '#'.
#[derive(Args, Debug)]
pub struct CaesarCommand {
    /// Number of positions to shift (any integer)
    #[arg(short, long, allow_hyphen_values = true)]
    pub shift: i64,

    /// Decrypt instead of encrypt
    #[arg(short, long)]
    pub decrypt: bool,

    /// Text to process (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommandExecutor for CaesarCommand {
    fn execute(&self) -> Result<()> {
        let text = read_text(self.text.as_deref())?;
        let direction = Direction::from_decrypt_flag(self.decrypt);

        if self.common.verbose {
            eprintln!("Caesar {} with shift {}", direction, self.shift);
        }

        println!("{}", caesar(&text, self.shift, direction));
        Ok(())
    }
}
