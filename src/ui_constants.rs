//! Named constants for UI layout dimensions.
//!
//! Only UI layout constants (dimensions, sizes, spacing) belong here.
//! Colour values and game rules live elsewhere.

// ---------------------------------------------------------------------------
// Table  (src/game_panel/render.rs)
// ---------------------------------------------------------------------------

/// Width of a drawn card.
pub const CARD_WIDTH: f32 = 64.0;
/// Height of a drawn card.
pub const CARD_HEIGHT: f32 = 92.0;
/// Corner radius of a drawn card.
pub const CARD_CORNER_RADIUS: f32 = 6.0;
/// Horizontal gap between cards in a hand.
pub const CARD_SPACING: f32 = 8.0;
/// Font size of the rank in the card corner.
pub const CARD_RANK_FONT_SIZE: f32 = 16.0;
/// Font size of the suit symbol in the card centre.
pub const CARD_SUIT_FONT_SIZE: f32 = 32.0;
/// Font size of the round message.
pub const TABLE_MESSAGE_FONT_SIZE: f32 = 20.0;
/// Outer margin inside the table area.
pub const TABLE_MARGIN: f32 = 16.0;
/// Minimum width of the chip and action buttons.
pub const TABLE_BUTTON_MIN_WIDTH: f32 = 56.0;

// ---------------------------------------------------------------------------
// Dialogs  (src/dialogs.rs and the *_ui.rs modules)
// ---------------------------------------------------------------------------

/// Width of the About dialog.
pub const ABOUT_DIALOG_WIDTH: f32 = 320.0;
/// Width of the Blackjack Rules dialog.
pub const RULES_DIALOG_WIDTH: f32 = 440.0;
/// Maximum height of the scrollable rules text.
pub const RULES_DIALOG_MAX_HEIGHT: f32 = 360.0;
/// Width of the Select Table Colour dialog.
pub const COLOUR_DIALOG_WIDTH: f32 = 300.0;
/// Width of the Player Details dialog.
pub const PLAYER_DETAILS_DIALOG_WIDTH: f32 = 320.0;
/// Width of the error dialog.
pub const ERROR_DIALOG_WIDTH: f32 = 360.0;
/// Minimum width of dialog buttons (OK, Cancel, Default).
pub const DIALOG_BUTTON_MIN_WIDTH: f32 = 72.0;
