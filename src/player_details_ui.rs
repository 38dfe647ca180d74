//! Player Details dialog: edit name, age and bank balance.

use crate::ui_constants::{DIALOG_BUTTON_MIN_WIDTH, PLAYER_DETAILS_DIALOG_WIDTH};
use blackjack_engine::Player;
use egui::{Color32, Context, Id, Modal, RichText};

/// Largest balance the form accepts, in whole dollars.
const MAX_BALANCE_DOLLARS: u64 = 1_000_000_000;
/// Oldest age the form accepts.
const MAX_AGE: u32 = 150;

/// Validated values from the form. Balance in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDetails {
    pub name: String,
    pub age: u32,
    pub balance: u64,
}

/// Result of one frame of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerDetailsAction {
    Apply(PlayerDetails),
    Cancel,
}

/// Editable copy of the player shown in the dialog.
#[derive(Debug, Clone)]
pub struct PlayerDetailsForm {
    pub name: String,
    pub age: u32,
    /// Balance edited in whole dollars
    pub balance_dollars: u64,
    /// Balance when the form opened, in cents
    original_balance: u64,
    error: Option<String>,
}

impl PlayerDetailsForm {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            age: player.age,
            balance_dollars: player.balance / 100,
            original_balance: player.balance,
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Validate the form.
    ///
    /// An untouched balance keeps its cents; an edited one is whole dollars.
    pub fn details(&self) -> Result<PlayerDetails, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }
        if self.age > MAX_AGE {
            return Err(format!("Age must be at most {}", MAX_AGE));
        }

        let balance = if self.balance_dollars == self.original_balance / 100 {
            self.original_balance
        } else {
            self.balance_dollars.saturating_mul(100)
        };

        Ok(PlayerDetails {
            name: name.to_string(),
            age: self.age,
            balance,
        })
    }

    /// Draw the dialog. Returns an action once the user confirms or cancels.
    pub fn show(&mut self, ctx: &Context) -> Option<PlayerDetailsAction> {
        let mut action = None;

        let modal = Modal::new(Id::new("player_details_modal")).show(ctx, |ui| {
            ui.set_width(PLAYER_DETAILS_DIALOG_WIDTH);
            ui.heading("Player Details");
            ui.add_space(8.0);

            egui::Grid::new("player_details_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut self.name);
                    ui.end_row();

                    ui.label("Age:");
                    ui.add(egui::DragValue::new(&mut self.age).range(0..=MAX_AGE));
                    ui.end_row();

                    ui.label("Balance:");
                    ui.add(
                        egui::DragValue::new(&mut self.balance_dollars)
                            .range(0..=MAX_BALANCE_DOLLARS)
                            .prefix("$"),
                    );
                    ui.end_row();
                });

            if let Some(error) = &self.error {
                ui.add_space(4.0);
                ui.label(RichText::new(error).color(Color32::from_rgb(220, 80, 80)));
            }

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                let ok = egui::Button::new("OK").min_size(egui::vec2(DIALOG_BUTTON_MIN_WIDTH, 0.0));
                if ui.add(ok).clicked() {
                    match self.details() {
                        Ok(details) => action = Some(PlayerDetailsAction::Apply(details)),
                        Err(message) => self.error = Some(message),
                    }
                }
                let cancel =
                    egui::Button::new("Cancel").min_size(egui::vec2(DIALOG_BUTTON_MIN_WIDTH, 0.0));
                if ui.add(cancel).clicked() {
                    action = Some(PlayerDetailsAction::Cancel);
                }
            });
        });

        if action.is_none() && modal.should_close() {
            action = Some(PlayerDetailsAction::Cancel);
        }
        action
    }
}
