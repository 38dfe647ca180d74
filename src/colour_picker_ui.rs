//! Select Table Colour dialog.

use crate::game_panel::to_color32;
use crate::ui_constants::{COLOUR_DIALOG_WIDTH, DIALOG_BUTTON_MIN_WIDTH};
use blackjack_config::TableColour;
use egui::color_picker::{Alpha, color_picker_color32};
use egui::{Color32, Context, Id, Modal};

pub const COLOUR_DIALOG_TITLE: &str = "Select Table Colour";

/// Result of one frame of the colour dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourPickerAction {
    /// User confirmed this colour
    Apply(TableColour),
    /// User dismissed the dialog; colour unchanged
    Cancel,
}

/// Colour being chosen, seeded with the current table colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourPicker {
    initial: TableColour,
    working: Color32,
}

impl ColourPicker {
    pub fn new(initial: TableColour) -> Self {
        Self {
            initial,
            working: to_color32(initial),
        }
    }

    pub fn initial(&self) -> TableColour {
        self.initial
    }

    /// Colour currently selected in the picker.
    pub fn selected(&self) -> TableColour {
        TableColour::new(self.working.r(), self.working.g(), self.working.b())
    }

    /// Select `colour` in the picker.
    pub fn select(&mut self, colour: TableColour) {
        self.working = to_color32(colour);
    }

    /// Draw the dialog. Returns an action once the user confirms or cancels.
    pub fn show(&mut self, ctx: &Context) -> Option<ColourPickerAction> {
        let mut action = None;

        let modal = Modal::new(Id::new("table_colour_modal")).show(ctx, |ui| {
            ui.set_width(COLOUR_DIALOG_WIDTH);
            ui.heading(COLOUR_DIALOG_TITLE);
            ui.add_space(8.0);

            color_picker_color32(ui, &mut self.working, Alpha::Opaque);
            ui.label(format!("Selected: {}", self.selected().to_hex()));

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                let size = egui::vec2(DIALOG_BUTTON_MIN_WIDTH, 0.0);
                if ui.add(egui::Button::new("OK").min_size(size)).clicked() {
                    action = Some(ColourPickerAction::Apply(self.selected()));
                }
                if ui.add(egui::Button::new("Cancel").min_size(size)).clicked() {
                    action = Some(ColourPickerAction::Cancel);
                }
                if ui.add(egui::Button::new("Default").min_size(size)).clicked() {
                    self.select(TableColour::DEFAULT);
                }
            });
        });

        if action.is_none() && modal.should_close() {
            action = Some(ColourPickerAction::Cancel);
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_starts_from_current_colour() {
        let current = TableColour::new(120, 10, 40);
        let picker = ColourPicker::new(current);
        assert_eq!(picker.initial(), current);
        assert_eq!(picker.selected(), current);
    }

    #[test]
    fn test_select_default() {
        let mut picker = ColourPicker::new(TableColour::new(1, 2, 3));
        picker.select(TableColour::DEFAULT);
        assert_eq!(picker.selected(), TableColour::new(6, 120, 0));
    }
}
