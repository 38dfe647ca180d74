//! Shared trait definitions for Blackjack components.
//!
//! These traits document the contracts between the window shell and its
//! collaborators, and enable mock implementations for testing the dispatcher
//! without a GPU context or a live event loop.

use crate::game_panel::PanelError;
use blackjack_config::TableColour;

// ── Surface ──────────────────────────────────────────────────────────────────

/// Something with a table-coloured background that can be asked to redraw.
///
/// Implemented by the window frame (`FrameState`) and the game panel
/// (`TablePanel`). Changing the table colour always updates both.
pub trait Surface {
    /// Replace the background colour.
    fn set_background(&mut self, colour: TableColour);

    /// Current background colour.
    fn background(&self) -> TableColour;

    /// Ask for the surface to be redrawn on the next frame.
    fn repaint(&mut self);
}

// ── GamePanel ────────────────────────────────────────────────────────────────

/// The collaborator that owns the game: betting state, rules and rendering.
///
/// Implemented by `TablePanel` (and recording mocks in tests). The dispatcher
/// calls exactly one game method per menu command, then `update_values()`.
///
/// # Errors
///
/// Game actions return [`PanelError`] when the table refuses the action
/// (no bet, hand in progress, insufficient funds) or a player file cannot be
/// read or written. The dispatcher logs the error and reports it to the user.
pub trait GamePanel: Surface {
    /// Add a chip of `amount` whole dollars to the wager.
    fn increase_bet(&mut self, amount: u32) -> Result<(), PanelError>;

    /// Start a new hand with the current wager.
    fn new_game(&mut self) -> Result<(), PanelError>;

    /// Draw a card for the player.
    fn hit(&mut self) -> Result<(), PanelError>;

    /// Double the stake, draw one card and stand.
    fn play_double(&mut self) -> Result<(), PanelError>;

    /// End the player's turn.
    fn stand(&mut self) -> Result<(), PanelError>;

    /// Begin editing the player's name, age and balance.
    fn update_player(&mut self) -> Result<(), PanelError>;

    /// Write the current player to a file chosen by the user.
    fn save_player(&mut self) -> Result<(), PanelError>;

    /// Seat a player read from a file chosen by the user.
    fn open_player(&mut self) -> Result<(), PanelError>;

    /// Refresh the displayed balance, bet, totals and message.
    fn update_values(&mut self);

    /// Whether a dialog owned by the panel (Player Details) is open.
    fn has_open_dialog(&self) -> bool;

    /// Dismiss the panel's dialog without applying it.
    fn close_dialog(&mut self);
}

// ── TableHost ────────────────────────────────────────────────────────────────

/// Window-level dialogs the dispatcher may open.
///
/// Implemented by `Dialogs`. All dialogs are modal; opening one replaces any
/// dialog already shown, including the panel's.
pub trait TableHost {
    /// Open the colour chooser, starting from the current table colour.
    fn choose_table_colour(&mut self);

    /// Show the rules of the game.
    fn show_rules(&mut self);

    /// Show the About dialog.
    fn show_about(&mut self);

    /// Report a failed action to the user.
    fn show_error(&mut self, title: &str, message: &str);

    /// Whether a window-level dialog is open.
    fn has_open_dialog(&self) -> bool;

    /// Dismiss the window-level dialog.
    fn close_dialog(&mut self);
}
