//! Playfair command - digram substitution through a 5x5 key square.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use classic_ciphers::text::normalize;
use classic_ciphers::{
    prepare_digrams_with_config, strip_fillers, transform, Direction, KeyTable, PlayfairConfig,
};

use super::{read_text, CommandExecutor, CommonArgs};

/// Encrypt, decrypt or show the key square with the Playfair cipher.
///
/// The variant (merged letter pair, filler letters) comes from the config
/// file; see `classic-ciphers config show`.
#[derive(Args, Debug)]
pub struct PlayfairCommand {
    #[command(subcommand)]
    pub action: PlayfairAction,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum PlayfairAction {
    /// Encrypt text
    Encrypt(PlayfairCipherArgs),

    /// Decrypt text
    Decrypt(PlayfairDecryptArgs),

    /// Show the key square for a key
    Table(PlayfairTableArgs),
}

#[derive(Args, Debug)]
pub struct PlayfairCipherArgs {
    /// Keyword used to build the key square
    #[arg(short, long)]
    pub key: String,

    /// Text to process (reads from stdin if not provided)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Print letters without spaces between digrams
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Debug)]
pub struct PlayfairDecryptArgs {
    #[command(flatten)]
    pub cipher: PlayfairCipherArgs,

    /// Remove filler letters from decrypted text (best effort)
    #[arg(long)]
    pub strip_fillers: bool,
}

#[derive(Args, Debug)]
pub struct PlayfairTableArgs {
    /// Keyword used to build the key square
    #[arg(short, long)]
    pub key: String,
}

impl CommandExecutor for PlayfairCommand {
    fn execute(&self) -> Result<()> {
        let settings = self.common.load_config()?.playfair;
        let config = settings
            .to_playfair_config()
            .context("Invalid Playfair settings in config")?;

        match &self.action {
            PlayfairAction::Encrypt(args) => {
                let options = OutputOptions {
                    grouped: settings.grouped && !args.compact,
                    strip_fillers: false,
                };
                self.run(args, Direction::Encrypt, &config, options)
            }
            PlayfairAction::Decrypt(args) => {
                let options = OutputOptions {
                    grouped: settings.grouped && !args.cipher.compact,
                    strip_fillers: settings.strip_fillers || args.strip_fillers,
                };
                self.run(&args.cipher, Direction::Decrypt, &config, options)
            }
            PlayfairAction::Table(args) => {
                let table = build_table(&args.key, &config)?;
                println!("{}", table);
                Ok(())
            }
        }
    }
}

/// How the result is printed.
#[derive(Debug, Clone, Copy)]
struct OutputOptions {
    grouped: bool,
    strip_fillers: bool,
}

impl PlayfairCommand {
    fn run(
        &self,
        args: &PlayfairCipherArgs,
        direction: Direction,
        config: &PlayfairConfig,
        options: OutputOptions,
    ) -> Result<()> {
        let text = read_text(args.text.as_deref())?;
        let table = build_table(&args.key, config)?;
        let digrams = prepare_digrams_with_config(&text, config);

        if self.common.verbose {
            eprintln!("Normalized text: {}", normalize(&text, config.alphabet()));
            eprintln!("Digrams: {}", digrams);
            eprintln!("Key square:");
            eprintln!("{}", table);
        }

        let result = transform(&table, &digrams, direction)
            .with_context(|| format!("Failed to {} text", direction))?;

        let output = if options.strip_fillers {
            strip_fillers(&result, config)
        } else if options.grouped {
            result.to_string()
        } else {
            result.to_compact_string()
        };

        println!("{}", output);
        Ok(())
    }
}

fn build_table(key: &str, config: &PlayfairConfig) -> Result<KeyTable> {
    KeyTable::new(key, config).with_context(|| format!("Failed to build key square for '{}'", key))
}
