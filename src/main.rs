//! classic-ciphers - Caesar, Vigenère and Playfair from the command line.
//!
//! One-shot subcommands for scripting plus an interactive prompt loop.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    CaesarCommand, CommandExecutor, ConfigCommand, InteractiveCommand, PlayfairCommand,
    VigenereCommand,
};

/// classic-ciphers - Caesar, Vigenère and Playfair
///
/// Historical ciphers for teaching and puzzles. They offer no security.
#[derive(Parser)]
#[command(name = "classic-ciphers")]
#[command(version)]
#[command(about = "Caesar, Vigenère and Playfair ciphers")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift every letter by a fixed amount
    Caesar(CaesarCommand),

    /// Shift letters by a repeating keyword
    Vigenere(VigenereCommand),

    /// Substitute letter pairs through a 5x5 key square
    Playfair(PlayfairCommand),

    /// Prompt for mode, text and key until you exit
    Interactive(InteractiveCommand),

    /// Show or edit settings
    Config(ConfigCommand),
}

impl Commands {
    fn executor(&self) -> &dyn CommandExecutor {
        match self {
            Commands::Caesar(cmd) => cmd,
            Commands::Vigenere(cmd) => cmd,
            Commands::Playfair(cmd) => cmd,
            Commands::Interactive(cmd) => cmd,
            Commands::Config(cmd) => cmd,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.executor().execute()
}
