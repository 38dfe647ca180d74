//! Menu command definitions for Blackjack
//!
//! This module defines the `MenuCommand` enum that represents every entry of
//! the menu bar, together with its display label, stable id and accelerator.
//! The same commands are produced by the native menu, the in-window menu bar,
//! keyboard shortcuts and the table buttons.

/// Chip denominations offered in the Bet menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    One,
    Five,
    Ten,
    TwentyFive,
    Hundred,
}

impl Chip {
    /// All chips in menu order.
    pub const ALL: [Chip; 5] = [
        Chip::One,
        Chip::Five,
        Chip::Ten,
        Chip::TwentyFive,
        Chip::Hundred,
    ];

    /// Chip value in whole dollars.
    pub fn amount(&self) -> u32 {
        match self {
            Chip::One => 1,
            Chip::Five => 5,
            Chip::Ten => 10,
            Chip::TwentyFive => 25,
            Chip::Hundred => 100,
        }
    }
}

/// Commands that can be triggered from the menu system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    // Player menu
    /// Edit name, age and balance of the seated player
    UpdatePlayerDetails,
    /// Write the current player to a file
    SaveCurrentPlayer,
    /// Seat a player loaded from a file
    OpenExistingPlayer,

    // Actions menu
    /// Start a new hand
    Deal,
    /// Take another card
    Hit,
    /// Double the stake and take exactly one card
    Double,
    /// End the player's turn
    Stand,

    // Bet menu
    /// Add a chip to the wager
    Bet(Chip),

    // Window menu
    /// Pick a new table colour
    ChangeTableColour,

    // Help menu
    /// Show the rules of the game
    BlackjackRules,
    /// Show the About dialog
    AboutBlackjack,
}

impl MenuCommand {
    /// Every command, in menu order.
    pub const ALL: [MenuCommand; 15] = [
        MenuCommand::UpdatePlayerDetails,
        MenuCommand::SaveCurrentPlayer,
        MenuCommand::OpenExistingPlayer,
        MenuCommand::Deal,
        MenuCommand::Hit,
        MenuCommand::Double,
        MenuCommand::Stand,
        MenuCommand::Bet(Chip::One),
        MenuCommand::Bet(Chip::Five),
        MenuCommand::Bet(Chip::Ten),
        MenuCommand::Bet(Chip::TwentyFive),
        MenuCommand::Bet(Chip::Hundred),
        MenuCommand::ChangeTableColour,
        MenuCommand::BlackjackRules,
        MenuCommand::AboutBlackjack,
    ];

    /// Text shown on the menu entry.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::UpdatePlayerDetails => "Update Player Details",
            MenuCommand::SaveCurrentPlayer => "Save Current Player",
            MenuCommand::OpenExistingPlayer => "Open Existing Player",
            MenuCommand::Deal => "Deal",
            MenuCommand::Hit => "Hit",
            MenuCommand::Double => "Double",
            MenuCommand::Stand => "Stand",
            MenuCommand::Bet(Chip::One) => "$1",
            MenuCommand::Bet(Chip::Five) => "$5",
            MenuCommand::Bet(Chip::Ten) => "$10",
            MenuCommand::Bet(Chip::TwentyFive) => "$25",
            MenuCommand::Bet(Chip::Hundred) => "$100",
            MenuCommand::ChangeTableColour => "Change Table Colour",
            MenuCommand::BlackjackRules => "Blackjack Rules",
            MenuCommand::AboutBlackjack => "About Blackjack",
        }
    }

    /// Stable identifier used for native menu items.
    pub fn id(&self) -> &'static str {
        match self {
            MenuCommand::UpdatePlayerDetails => "update_player_details",
            MenuCommand::SaveCurrentPlayer => "save_current_player",
            MenuCommand::OpenExistingPlayer => "open_existing_player",
            MenuCommand::Deal => "deal",
            MenuCommand::Hit => "hit",
            MenuCommand::Double => "double",
            MenuCommand::Stand => "stand",
            MenuCommand::Bet(Chip::One) => "bet_1",
            MenuCommand::Bet(Chip::Five) => "bet_5",
            MenuCommand::Bet(Chip::Ten) => "bet_10",
            MenuCommand::Bet(Chip::TwentyFive) => "bet_25",
            MenuCommand::Bet(Chip::Hundred) => "bet_100",
            MenuCommand::ChangeTableColour => "change_table_colour",
            MenuCommand::BlackjackRules => "blackjack_rules",
            MenuCommand::AboutBlackjack => "about_blackjack",
        }
    }

    /// Key pressed together with Cmd (macOS) or Ctrl (elsewhere).
    pub fn shortcut(&self) -> Option<char> {
        match self {
            MenuCommand::UpdatePlayerDetails => Some('u'),
            MenuCommand::SaveCurrentPlayer => Some('s'),
            MenuCommand::OpenExistingPlayer => Some('o'),
            MenuCommand::Deal => Some('n'),
            MenuCommand::Hit => Some('c'),
            MenuCommand::Double => Some('d'),
            MenuCommand::Stand => Some('f'),
            MenuCommand::Bet(Chip::One) => Some('1'),
            MenuCommand::Bet(Chip::Five) => Some('2'),
            MenuCommand::Bet(Chip::Ten) => Some('3'),
            MenuCommand::Bet(Chip::TwentyFive) => Some('4'),
            MenuCommand::Bet(Chip::Hundred) => Some('5'),
            MenuCommand::ChangeTableColour
            | MenuCommand::BlackjackRules
            | MenuCommand::AboutBlackjack => None,
        }
    }

    /// Shortcut as displayed next to the menu entry, e.g. `Ctrl+N` or `⌘N`.
    pub fn shortcut_text(&self) -> Option<String> {
        let key = self.shortcut()?.to_ascii_uppercase();
        if cfg!(target_os = "macos") {
            Some(format!("⌘{}", key))
        } else {
            Some(format!("Ctrl+{}", key))
        }
    }

    /// Whether the command opens a modal dialog of its own.
    pub fn opens_dialog(&self) -> bool {
        matches!(
            self,
            MenuCommand::UpdatePlayerDetails
                | MenuCommand::ChangeTableColour
                | MenuCommand::BlackjackRules
                | MenuCommand::AboutBlackjack
        )
    }

    /// Resolve an exact display label.
    pub fn from_label(label: &str) -> Option<MenuCommand> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Resolve a native menu item id.
    pub fn from_id(id: &str) -> Option<MenuCommand> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Resolve a shortcut key (case-insensitive).
    pub fn from_shortcut(key: char) -> Option<MenuCommand> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.shortcut() == Some(key))
    }
}

/// Top-level menus, in menu bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    Player,
    Actions,
    Bet,
    Window,
    Help,
}

/// One row of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Command(MenuCommand),
    Separator,
}

impl MenuGroup {
    pub const ALL: [MenuGroup; 5] = [
        MenuGroup::Player,
        MenuGroup::Actions,
        MenuGroup::Bet,
        MenuGroup::Window,
        MenuGroup::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MenuGroup::Player => "Player",
            MenuGroup::Actions => "Actions",
            MenuGroup::Bet => "Bet",
            MenuGroup::Window => "Window",
            MenuGroup::Help => "Help",
        }
    }

    /// Rows of this menu, top to bottom.
    pub fn entries(&self) -> Vec<MenuEntry> {
        use MenuCommand as C;
        use MenuEntry::{Command, Separator};
        match self {
            MenuGroup::Player => vec![
                Command(C::UpdatePlayerDetails),
                Separator,
                Command(C::SaveCurrentPlayer),
                Command(C::OpenExistingPlayer),
            ],
            MenuGroup::Actions => vec![
                Command(C::Deal),
                Command(C::Hit),
                Command(C::Double),
                Command(C::Stand),
            ],
            MenuGroup::Bet => Chip::ALL
                .into_iter()
                .map(|chip| Command(C::Bet(chip)))
                .collect(),
            MenuGroup::Window => vec![Command(C::ChangeTableColour)],
            MenuGroup::Help => vec![
                Command(C::BlackjackRules),
                Separator,
                Command(C::AboutBlackjack),
            ],
        }
    }
}
