//! Configuration system for the Blackjack desktop game.
//!
//! This crate provides configuration loading, saving, and default values
//! for the game window and the table rules. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - Table colour and log level types
//! - Table rule settings consumed by `blackjack-engine`

pub mod config;
pub mod defaults;
mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{BlackjackPayout, LogLevel, TableColour};

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: u32 = 600;
/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: u32 = 500;
