//! Configuration management for timeshare.
//!
//! The configuration is a small JSON file in the platform data directory
//! (see [`DataStorage`]). It only holds presentation preferences; the
//! calculation itself has no tunable parameters.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\timeshare\timeshare\config.json`
//! - **macOS**: `~/Library/Application Support/timeshare/timeshare/config.json`
//! - **Linux**: `~/.local/share/timeshare/timeshare/config.json`
//!
//! A missing file is not an error: [`Config::read`] falls back to defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use timeshare::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.auto_copy = true;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::normalizer::{normalize, CharacterClass};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use tracing::debug;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Weights pre-filled in the interactive shell and used by `split` when no
/// weights are given.
pub const DEFAULT_WEIGHTS: &str = "50,30,20";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Comma-separated weights used when none are entered.
    pub default_weights: String,

    /// Show the unrounded minute share next to each clock value.
    pub show_raw_minutes: bool,

    /// Copy all clocks to the clipboard after every successful calculation
    /// in the interactive shell.
    pub auto_copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_weights: DEFAULT_WEIGHTS.to_string(),
            show_raw_minutes: true,
            auto_copy: false,
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            debug!(path = %config_file_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        // Hand-edited files may contain full-width digits or stray text
        config.default_weights = normalize(&config.default_weights, CharacterClass::Weights);
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether a file was removed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let default = Self::read().unwrap_or_default();
        msg_print!(Message::ConfigWizardHeader);

        let default_weights: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultWeights.to_string())
            .default(default.default_weights)
            .interact_text()?;

        Ok(Config {
            default_weights: normalize(&default_weights, CharacterClass::Weights),

            show_raw_minutes: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptShowRawMinutes.to_string())
                .default(default.show_raw_minutes)
                .interact()?,

            auto_copy: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAutoCopy.to_string())
                .default(default.auto_copy)
                .interact()?,
        })
    }
}
