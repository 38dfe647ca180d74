//! The `Config` struct and its persistence.
//!
//! Covers:
//! - `load` / `save_to` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - Validation and clamping of out-of-range values
//! - Builder-style helpers used by tests and the CLI

use crate::defaults;
use crate::error::ConfigError;
use crate::types::{BlackjackPayout, LogLevel, TableColour};
use crate::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Game configuration, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Window & Display
    // ========================================================================
    /// Window title
    #[serde(default = "defaults::window_title")]
    pub window_title: String,

    /// Initial window width in logical pixels (never below 600)
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Initial window height in logical pixels (never below 500)
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Table felt colour applied on start-up
    #[serde(default = "defaults::table_colour")]
    pub table_colour: TableColour,

    // ========================================================================
    // Player
    // ========================================================================
    /// Name given to a fresh player
    #[serde(default = "defaults::player_name")]
    pub player_name: String,

    /// Bank balance of a fresh player, in whole dollars
    #[serde(default = "defaults::starting_balance")]
    pub starting_balance: u64,

    // ========================================================================
    // Table Rules
    // ========================================================================
    /// Number of 52-card decks in the shoe
    #[serde(default = "defaults::deck_count")]
    pub deck_count: usize,

    /// Reshuffle before a deal when fewer cards than this remain
    #[serde(default = "defaults::reshuffle_threshold")]
    pub reshuffle_threshold: usize,

    /// Dealer draws on a soft 17
    #[serde(default)]
    pub dealer_hits_soft_17: bool,

    /// Payout for a natural blackjack
    #[serde(default)]
    pub blackjack_payout: BlackjackPayout,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Level written to the debug log file
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: defaults::window_title(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            table_colour: defaults::table_colour(),
            player_name: defaults::player_name(),
            starting_balance: defaults::starting_balance(),
            deck_count: defaults::deck_count(),
            reshuffle_threshold: defaults::reshuffle_threshold(),
            dealer_hits_soft_17: false,
            blackjack_payout: BlackjackPayout::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the default path, creating it when missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, creating a default file when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Config path: {:?}", path);

        if !path.exists() {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        if contents.trim().is_empty() {
            log::warn!("Config file {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        let mut config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        config.sanitize();
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let yaml = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)
            .with_context(|| format!("Failed to write config to {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move config into place at {:?}", path))?;

        Ok(())
    }

    /// Get the configuration file path: `~/.config/blackjack/config.yaml`
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("blackjack")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("blackjack")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Check every field, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_count == 0 {
            return Err(ConfigError::Validation(
                "deck_count must be at least 1".to_string(),
            ));
        }
        if self.window_width < MIN_WINDOW_WIDTH {
            return Err(ConfigError::Validation(format!(
                "window_width {} is below the minimum of {}",
                self.window_width, MIN_WINDOW_WIDTH
            )));
        }
        if self.window_height < MIN_WINDOW_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "window_height {} is below the minimum of {}",
                self.window_height, MIN_WINDOW_HEIGHT
            )));
        }
        if self.starting_balance == 0 {
            return Err(ConfigError::Validation(
                "starting_balance must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Clamp invalid values back into range, logging each correction.
    pub fn sanitize(&mut self) {
        while let Err(e) = self.validate() {
            log::warn!("{}; using a safe value instead", e);
            if self.deck_count == 0 {
                self.deck_count = defaults::deck_count();
            } else if self.window_width < MIN_WINDOW_WIDTH {
                self.window_width = MIN_WINDOW_WIDTH;
            } else if self.window_height < MIN_WINDOW_HEIGHT {
                self.window_height = MIN_WINDOW_HEIGHT;
            } else if self.starting_balance == 0 {
                self.starting_balance = defaults::starting_balance();
            }
        }
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Set the initial window size
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the starting table colour
    pub fn with_table_colour(mut self, colour: TableColour) -> Self {
        self.table_colour = colour;
        self
    }

    /// Set the number of decks in the shoe
    pub fn with_deck_count(mut self, decks: usize) -> Self {
        self.deck_count = decks;
        self
    }
}
