//! Window-level modal dialogs: About, Rules, table colour and errors.
//!
//! At most one dialog is shown; opening another replaces it.

use crate::colour_picker_ui::{ColourPicker, ColourPickerAction};
use crate::traits::TableHost;
use crate::ui_constants::{DIALOG_BUTTON_MIN_WIDTH, ERROR_DIALOG_WIDTH};
use crate::{about_ui, rules_ui};
use blackjack_config::TableColour;
use blackjack_engine::TableRules;
use egui::{Context, Id, Modal};

/// The dialog currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveDialog {
    About,
    Rules,
    TableColour(ColourPicker),
    Error { title: String, message: String },
}

/// Outcome of a dialog the window must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Apply this colour to the frame and the panel
    ApplyTableColour(TableColour),
}

/// Owner of the window-level dialogs.
#[derive(Debug, Clone)]
pub struct Dialogs {
    active: Option<ActiveDialog>,
    /// Seed for the colour chooser
    current_colour: TableColour,
}

impl Dialogs {
    pub fn new(current_colour: TableColour) -> Self {
        Self {
            active: None,
            current_colour,
        }
    }

    pub fn active(&self) -> Option<&ActiveDialog> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Record the table colour now in effect.
    pub fn set_current_colour(&mut self, colour: TableColour) {
        self.current_colour = colour;
    }

    fn open(&mut self, dialog: ActiveDialog) {
        if let Some(previous) = &self.active {
            log::debug!("Replacing dialog {:?}", previous);
        }
        self.active = Some(dialog);
    }

    /// Draw the active dialog.
    pub fn show(&mut self, ctx: &Context, rules: &TableRules) -> Option<DialogAction> {
        let mut action = None;

        let close = match &mut self.active {
            None => false,
            Some(ActiveDialog::About) => about_ui::show(ctx),
            Some(ActiveDialog::Rules) => rules_ui::show(ctx, rules),
            Some(ActiveDialog::TableColour(picker)) => match picker.show(ctx) {
                Some(ColourPickerAction::Apply(colour)) => {
                    action = Some(DialogAction::ApplyTableColour(colour));
                    true
                }
                Some(ColourPickerAction::Cancel) => true,
                None => false,
            },
            Some(ActiveDialog::Error { title, message }) => show_error(ctx, title, message),
        };

        if close {
            self.active = None;
        }
        action
    }
}

impl TableHost for Dialogs {
    fn choose_table_colour(&mut self) {
        self.open(ActiveDialog::TableColour(ColourPicker::new(
            self.current_colour,
        )));
    }

    fn show_rules(&mut self) {
        self.open(ActiveDialog::Rules);
    }

    fn show_about(&mut self) {
        self.open(ActiveDialog::About);
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.open(ActiveDialog::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn has_open_dialog(&self) -> bool {
        self.is_open()
    }

    fn close_dialog(&mut self) {
        if let Some(dialog) = self.active.take() {
            log::debug!("Dismissing dialog {:?}", dialog);
        }
    }
}

/// Draw an error dialog. Returns `true` once it should close.
fn show_error(ctx: &Context, title: &str, message: &str) -> bool {
    let mut close = false;

    let modal = Modal::new(Id::new("error_modal")).show(ctx, |ui| {
        ui.set_width(ERROR_DIALOG_WIDTH);
        ui.heading(title);
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(8.0);
        let ok = egui::Button::new("OK").min_size(egui::vec2(DIALOG_BUTTON_MIN_WIDTH, 0.0));
        if ui.add(ok).clicked() {
            close = true;
        }
    });

    close || modal.should_close()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dialog_replaces_current() {
        let mut dialogs = Dialogs::new(TableColour::DEFAULT);
        dialogs.show_about();
        dialogs.show_error("Deal", "Place a bet before dealing");
        assert!(matches!(
            dialogs.active(),
            Some(ActiveDialog::Error { title, .. }) if title == "Deal"
        ));
    }

    #[test]
    fn test_colour_chooser_seeded_with_current_colour() {
        let mut dialogs = Dialogs::new(TableColour::DEFAULT);
        let blue = TableColour::new(0, 0, 200);
        dialogs.set_current_colour(blue);
        dialogs.choose_table_colour();
        match dialogs.active() {
            Some(ActiveDialog::TableColour(picker)) => assert_eq!(picker.initial(), blue),
            other => panic!("unexpected dialog {:?}", other),
        }
    }
}
