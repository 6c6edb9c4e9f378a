//! Config command - inspect and edit persisted settings.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use classic_ciphers::{CipherConfig, ConfigError};

use super::{CommandExecutor, CommonArgs};

/// Manage settings stored in ~/.classic-ciphers/config.toml.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current settings as TOML
    Show,

    /// Print the path of the config file
    Path,

    /// Change one setting (e.g. `set playfair.padding Z`)
    Set(ConfigSetArgs),

    /// Restore the default settings
    Reset,
}

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Setting name (see `config show`)
    pub field: String,

    /// New value
    pub value: String,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Show => self.show(),
            ConfigAction::Path => {
                println!("{}", self.common.config_path()?.display());
                Ok(())
            }
            ConfigAction::Set(args) => self.set(args),
            ConfigAction::Reset => self.save(&CipherConfig::default(), "Settings reset to defaults."),
        }
    }
}

impl ConfigCommand {
    fn show(&self) -> Result<()> {
        let config = self.common.load_config()?;
        let content = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{}", content);
        Ok(())
    }

    fn set(&self, args: &ConfigSetArgs) -> Result<()> {
        let mut config = self.common.load_config()?;
        match config.set(&args.field, &args.value) {
            Err(err @ ConfigError::UnknownField(_)) => {
                return Err(err).with_context(|| {
                    format!("Known settings: {}", CipherConfig::fields().join(", "))
                });
            }
            other => other.context("Failed to update config")?,
        }
        self.save(&config, &format!("Set {} = {}", args.field, args.value))
    }

    fn save(&self, config: &CipherConfig, message: &str) -> Result<()> {
        let path = self.common.config_path()?;
        config
            .save_to(&path)
            .with_context(|| format!("Failed to save config to {}", path.display()))?;
        println!("{}", message);
        if self.common.verbose {
            eprintln!("Saved {}", path.display());
        }
        Ok(())
    }
}
