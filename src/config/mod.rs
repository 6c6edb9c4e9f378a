//! Persistent settings for classic-ciphers.
//!
//! This module stores the Playfair variant and output preferences in
//! `~/.classic-ciphers/config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::CipherError;
use crate::playfair::{Alphabet, FillerPolicy, PlayfairConfig};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur when loading or editing the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("Unknown config field: {0}")]
    UnknownField(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    #[error("Cannot set {field} to {value}: {reason}")]
    Conflict {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid cipher settings: {0}")]
    Cipher(#[from] CipherError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Playfair variant and output settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlayfairSettings {
    /// Letter removed from the key square.
    pub merge_from: char,

    /// Letter that stands in for `merge_from`.
    pub merge_into: char,

    /// Filler inserted between repeated letters.
    pub separator: char,

    /// Filler used when the repeated letter is the separator.
    pub alternate: char,

    /// Filler appended to odd-length text.
    pub padding: char,

    /// Print output as space-separated digrams.
    pub grouped: bool,

    /// Remove fillers from decrypted output.
    pub strip_fillers: bool,
}

impl Default for PlayfairSettings {
    fn default() -> Self {
        let alphabet = Alphabet::standard();
        let filler = FillerPolicy::standard();
        Self {
            merge_from: alphabet.merge_from(),
            merge_into: alphabet.merge_into(),
            separator: filler.separator(),
            alternate: filler.alternate(),
            padding: filler.padding(),
            grouped: true,
            strip_fillers: false,
        }
    }
}

impl PlayfairSettings {
    /// Validates the settings into a [`PlayfairConfig`].
    pub fn to_playfair_config(&self) -> Result<PlayfairConfig, CipherError> {
        let alphabet = Alphabet::new(self.merge_from, self.merge_into)?;
        let filler = FillerPolicy::new(self.separator, self.alternate, self.padding);
        PlayfairConfig::new(alphabet, filler)
    }
}

/// The configuration stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherConfig {
    #[serde(default)]
    pub playfair: PlayfairSettings,
}

impl CipherConfig {
    /// Load the configuration from the default location.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from `path`, or the defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: CipherConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// The validated Playfair variant.
    pub fn playfair_config(&self) -> Result<PlayfairConfig, ConfigError> {
        Ok(self.playfair.to_playfair_config()?)
    }

    /// Field names accepted by [`set`](Self::set).
    pub fn fields() -> &'static [&'static str] {
        &[
            "playfair.merge_from",
            "playfair.merge_into",
            "playfair.separator",
            "playfair.alternate",
            "playfair.padding",
            "playfair.grouped",
            "playfair.strip_fillers",
        ]
    }

    /// Set a field from its textual value.
    ///
    /// The change is only applied if the resulting Playfair variant is
    /// valid. Otherwise a [`ConfigError::Conflict`] names the setting that
    /// blocks it.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.playfair.clone();

        match field {
            "playfair.merge_from" => updated.merge_from = parse_letter(field, value)?,
            "playfair.merge_into" => updated.merge_into = parse_letter(field, value)?,
            "playfair.separator" => updated.separator = parse_letter(field, value)?,
            "playfair.alternate" => updated.alternate = parse_letter(field, value)?,
            "playfair.padding" => updated.padding = parse_letter(field, value)?,
            "playfair.grouped" => updated.grouped = parse_bool(field, value)?,
            "playfair.strip_fillers" => updated.strip_fillers = parse_bool(field, value)?,
            _ => return Err(ConfigError::UnknownField(field.to_string())),
        }

        if let Err(err) = updated.to_playfair_config() {
            return Err(conflict(&updated, field, value, err));
        }
        self.playfair = updated;
        Ok(())
    }
}

/// Get the classic-ciphers config directory (`~/.classic-ciphers`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".classic-ciphers"))
        .ok_or(ConfigError::NoConfigDir)
}

fn parse_letter(field: &str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(invalid(field, value)),
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(field, value)),
    }
}

fn conflict(
    settings: &PlayfairSettings,
    field: &str,
    value: &str,
    err: CipherError,
) -> ConfigError {
    let reason = match field {
        "playfair.separator" if settings.separator == settings.alternate => format!(
            "playfair.alternate is already {}, change it first",
            settings.alternate
        ),
        "playfair.alternate" if settings.separator == settings.alternate => format!(
            "playfair.separator is already {}, change it first",
            settings.separator
        ),
        _ => err.to_string(),
    };
    ConfigError::Conflict {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

fn invalid(field: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}
