//! Interactive command - prompt loop for one cipher.
//!
//! Asks for a mode, the text and the key, prints the result and starts
//! over until the user exits or input ends.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use classic_ciphers::{
    caesar, playfair_with_config, vigenere, Direction, KeyTable, PlayfairConfig,
};

use super::{CommandExecutor, CommonArgs};

/// Cipher driven by an interactive session.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Caesar,
    Vigenere,
    Playfair,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Caesar => write!(f, "CAESAR"),
            CipherKind::Vigenere => write!(f, "VIGENERE"),
            CipherKind::Playfair => write!(f, "PLAYFAIR"),
        }
    }
}

/// Start an interactive session (type `0` or `out` to leave).
#[derive(Args, Debug)]
pub struct InteractiveCommand {
    /// Cipher to use
    #[arg(value_enum)]
    pub cipher: CipherKind,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl CommandExecutor for InteractiveCommand {
    fn execute(&self) -> Result<()> {
        let settings = self.common.load_config()?.playfair;
        let config = settings
            .to_playfair_config()
            .context("Invalid Playfair settings in config")?;

        let session = Session {
            cipher: self.cipher,
            config,
            grouped: settings.grouped,
        };

        let stdin = io::stdin();
        let stdout = io::stdout();
        session.run(&mut stdin.lock(), &mut stdout.lock())
    }
}

/// What the user asked for at the mode prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Run(Direction),
    Table,
    Exit,
}

/// A validated key.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionKey {
    Shift(i64),
    Word(String),
}

struct Session {
    cipher: CipherKind,
    config: PlayfairConfig,
    grouped: bool,
}

impl Session {
    fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{} CIPHER PROGRAM", self.cipher)?;
        writeln!(output)?;

        loop {
            let Some(mode) = self.prompt_mode(input, output)? else {
                break;
            };

            match mode {
                Mode::Exit => break,
                Mode::Table => {
                    let Some(SessionKey::Word(key)) = self.prompt_key(input, output)? else {
                        break;
                    };
                    match KeyTable::new(&key, &self.config) {
                        Ok(table) => writeln!(output, "{}", table)?,
                        Err(e) => writeln!(output, "Error: {}", e)?,
                    }
                    writeln!(output)?;
                }
                Mode::Run(direction) => {
                    let Some(text) = self.prompt_text(input, output)? else {
                        break;
                    };
                    let Some(key) = self.prompt_key(input, output)? else {
                        break;
                    };
                    match self.apply(&text, &key, direction) {
                        Ok(result) => writeln!(output, "R: {}", result)?,
                        Err(e) => writeln!(output, "Error: {}", e)?,
                    }
                    writeln!(output)?;
                }
            }
        }

        writeln!(output, "Program closed!")?;
        Ok(())
    }

    fn prompt_mode<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<Mode>> {
        let menu = match self.cipher {
            CipherKind::Playfair => {
                "Encrypt -> e | Decrypt -> d | t -> show table for key | out -> exit program >> "
            }
            _ => "Which mode: e -> Encryption / d -> Decryption | 0 -> Exit the program >> ",
        };

        loop {
            let Some(line) = prompt(input, output, menu)? else {
                return Ok(None);
            };
            if let Some(mode) = self.parse_mode(&line) {
                return Ok(Some(mode));
            }
            writeln!(output, "Invalid command!!!")?;
        }
    }

    fn parse_mode(&self, line: &str) -> Option<Mode> {
        match line.trim().to_lowercase().as_str() {
            "0" | "out" => Some(Mode::Exit),
            "t" if self.cipher == CipherKind::Playfair => Some(Mode::Table),
            other => other.parse().ok().map(Mode::Run),
        }
    }

    fn prompt_text<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<String>> {
        let message = match self.cipher {
            CipherKind::Playfair => "Text to be encrypted/decrypted: ",
            _ => "Enter text: ",
        };

        loop {
            let Some(text) = prompt(input, output, message)? else {
                return Ok(None);
            };
            if self.cipher == CipherKind::Caesar || is_alphabetic_text(&text) {
                return Ok(Some(text));
            }
            writeln!(output, "Only alphabetic characters accepted for text and key!!!")?;
        }
    }

    fn prompt_key<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<SessionKey>> {
        let message = match self.cipher {
            CipherKind::Playfair => "Key to encrypt: ",
            _ => "Enter key: ",
        };

        loop {
            let Some(key) = prompt(input, output, message)? else {
                return Ok(None);
            };

            if self.cipher == CipherKind::Caesar {
                match key.trim().parse() {
                    Ok(shift) => return Ok(Some(SessionKey::Shift(shift))),
                    Err(_) => {
                        writeln!(output, "Invalid key. Only integers accepted for the shift!!!")?
                    }
                }
            } else if is_alphabetic_text(&key) && key.chars().any(char::is_alphabetic) {
                return Ok(Some(SessionKey::Word(key)));
            } else {
                writeln!(output, "Only alphabetic characters accepted for text and key!!!")?;
            }
        }
    }

    fn apply(&self, text: &str, key: &SessionKey, direction: Direction) -> Result<String> {
        let result = match (self.cipher, key) {
            (CipherKind::Caesar, SessionKey::Shift(shift)) => caesar(text, *shift, direction),
            (CipherKind::Vigenere, SessionKey::Word(key)) => vigenere(text, key, direction)?,
            (CipherKind::Playfair, SessionKey::Word(key)) => {
                let result = playfair_with_config(text, key, direction, &self.config)?;
                if self.grouped {
                    result
                } else {
                    result.replace(' ', "")
                }
            }
            (cipher, key) => anyhow::bail!("Key {:?} does not fit the {} cipher", key, cipher),
        };
        Ok(result)
    }
}

/// Writes `message`, then reads one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Letters and whitespace only (accented letters included).
fn is_alphabetic_text(text: &str) -> bool {
    text.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}
