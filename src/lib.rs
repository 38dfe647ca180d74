// Library exports for testing and potential library use
//
// Blackjack runs entirely on the winit event-loop thread. The only lock is the
// `parking_lot::Mutex` around the debug log file in `debug.rs`; the tokio
// runtime exists solely to drive async GPU setup.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod about_ui;
pub mod app;
pub mod cli;
pub mod colour_picker_ui;
pub mod config {
    //! Configuration re-exports from `blackjack-config`.
    pub use blackjack_config::*;
}
pub mod dialogs;
pub mod game_panel;
pub mod menu;
pub mod menu_bar_ui;
pub mod player_details_ui;
pub mod player_store;
pub mod rules_ui;
pub mod traits;
pub mod ui_constants;
