//! Default value functions for configuration.
//!
//! Each function is used as a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `Config` field.

use crate::types::TableColour;

// ── Window ─────────────────────────────────────────────────────────────────

pub fn window_title() -> String {
    "Blackjack".to_string()
}

pub fn window_width() -> u32 {
    crate::MIN_WINDOW_WIDTH
}

pub fn window_height() -> u32 {
    crate::MIN_WINDOW_HEIGHT
}

pub fn table_colour() -> TableColour {
    TableColour::DEFAULT
}

// ── Player ─────────────────────────────────────────────────────────────────

pub fn player_name() -> String {
    "Player".to_string()
}

/// Starting bank balance in whole dollars.
pub fn starting_balance() -> u64 {
    1000
}

// ── Table rules ────────────────────────────────────────────────────────────

pub fn deck_count() -> usize {
    1
}

/// Reshuffle before a deal once fewer than this many cards remain in the shoe.
pub fn reshuffle_threshold() -> usize {
    15
}
