//! Value types stored in the configuration file.

use serde::{Deserialize, Serialize};

/// An opaque RGB colour used for the table felt.
///
/// The same value is applied to the window background and to the game
/// panel, so the two surfaces never diverge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TableColour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TableColour {
    /// Classic casino green.
    pub const DEFAULT: TableColour = TableColour::new(6, 120, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Colour components as linear-ish floats in `0.0..=1.0`, for clear colours.
    pub fn to_f64_rgb(&self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for TableColour {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<[u8; 3]> for TableColour {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

/// Log level for the debug log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging (log file not created)
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// All available levels for UI iteration
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Payout ratio for a natural blackjack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlackjackPayout {
    /// 3:2, the traditional payout
    #[default]
    ThreeToTwo,
    /// 6:5, common on single-deck tables
    SixToFive,
}

impl BlackjackPayout {
    /// Ratio as `(numerator, denominator)`.
    pub fn ratio(&self) -> (u64, u64) {
        match self {
            BlackjackPayout::ThreeToTwo => (3, 2),
            BlackjackPayout::SixToFive => (6, 5),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BlackjackPayout::ThreeToTwo => "3:2",
            BlackjackPayout::SixToFive => "6:5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_colour_is_casino_green() {
        assert_eq!(TableColour::default(), TableColour::new(6, 120, 0));
        assert_eq!(TableColour::DEFAULT.to_hex(), "#067800");
    }

    #[test]
    fn test_log_level_filter_mapping() {
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert_eq!(LogLevel::all().len(), 6);
    }

    #[test]
    fn test_payout_ratios() {
        assert_eq!(BlackjackPayout::ThreeToTwo.ratio(), (3, 2));
        assert_eq!(BlackjackPayout::SixToFive.ratio(), (6, 5));
    }
}
