//! Shared integration test helpers for Blackjack.
//!
//! ```ignore
//! mod common;
//! use common::{Call, RecordingPanel};
//! ```
//!
//! The `#[allow(dead_code)]` suppresses warnings when only a subset of
//! helpers is used per file.

#![allow(dead_code)]

use blackjack::config::TableColour;
use blackjack::game_panel::PanelError;
use blackjack::traits::{GamePanel, Surface};
use blackjack_engine::TableError;

/// A call received by [`RecordingPanel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IncreaseBet(u32),
    NewGame,
    Hit,
    PlayDouble,
    Stand,
    UpdatePlayer,
    SavePlayer,
    OpenPlayer,
    SetBackground(TableColour),
    Repaint,
    UpdateValues,
}

/// Game panel that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    pub calls: Vec<Call>,
    pub background: TableColour,
    /// Make every game action fail with this error
    pub fail_with: Option<TableError>,
    /// Stands in for an open Player Details dialog
    pub dialog_open: bool,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: TableError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    /// Calls other than `UpdateValues`.
    pub fn game_calls(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| **c != Call::UpdateValues)
            .cloned()
            .collect()
    }

    pub fn update_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::UpdateValues).count()
    }

    fn record(&mut self, call: Call) -> Result<(), PanelError> {
        self.calls.push(call);
        match &self.fail_with {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }
}

impl Surface for RecordingPanel {
    fn set_background(&mut self, colour: TableColour) {
        self.background = colour;
        self.calls.push(Call::SetBackground(colour));
    }

    fn background(&self) -> TableColour {
        self.background
    }

    fn repaint(&mut self) {
        self.calls.push(Call::Repaint);
    }
}

impl GamePanel for RecordingPanel {
    fn increase_bet(&mut self, amount: u32) -> Result<(), PanelError> {
        self.record(Call::IncreaseBet(amount))
    }

    fn new_game(&mut self) -> Result<(), PanelError> {
        self.record(Call::NewGame)
    }

    fn hit(&mut self) -> Result<(), PanelError> {
        self.record(Call::Hit)
    }

    fn play_double(&mut self) -> Result<(), PanelError> {
        self.record(Call::PlayDouble)
    }

    fn stand(&mut self) -> Result<(), PanelError> {
        self.record(Call::Stand)
    }

    fn update_player(&mut self) -> Result<(), PanelError> {
        self.record(Call::UpdatePlayer)
    }

    fn save_player(&mut self) -> Result<(), PanelError> {
        self.record(Call::SavePlayer)
    }

    fn open_player(&mut self) -> Result<(), PanelError> {
        self.record(Call::OpenPlayer)
    }

    fn update_values(&mut self) {
        self.calls.push(Call::UpdateValues);
    }

    fn has_open_dialog(&self) -> bool {
        self.dialog_open
    }

    fn close_dialog(&mut self) {
        self.dialog_open = false;
    }
}

/// Surface standing in for the window frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub background: TableColour,
    pub repaints: usize,
}

impl Surface for RecordingSurface {
    fn set_background(&mut self, colour: TableColour) {
        self.background = colour;
    }

    fn background(&self) -> TableColour {
        self.background
    }

    fn repaint(&mut self) {
        self.repaints += 1;
    }
}
