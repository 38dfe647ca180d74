//! About Blackjack dialog.

use crate::ui_constants::{ABOUT_DIALOG_WIDTH, DIALOG_BUTTON_MIN_WIDTH};
use egui::{Context, Id, Modal, RichText};

pub const ABOUT_TITLE: &str = "About Blackjack";

/// Version shown in the About dialog.
pub const ABOUT_VERSION: &str = "Version 1.0";

/// Lines of the About dialog, top to bottom.
pub const ABOUT_LINES: [&str; 8] = [
    "Written by David Winter © 2006",
    ABOUT_VERSION,
    "",
    "Become such an expert while developing this,",
    "I won $1000 online in a game of Blackjack!",
    "",
    "email: djw@davidwinter.me.uk",
    "web: davidwinter.me.uk",
];

/// Full About text, one line per entry.
pub fn about_text() -> String {
    ABOUT_LINES.join("\n")
}

/// Draw the About dialog. Returns `true` once it should close.
pub fn show(ctx: &Context) -> bool {
    let mut close = false;

    let modal = Modal::new(Id::new("about_modal")).show(ctx, |ui| {
        ui.set_width(ABOUT_DIALOG_WIDTH);
        ui.vertical_centered(|ui| {
            ui.heading(ABOUT_TITLE);
            ui.add_space(8.0);
            for line in ABOUT_LINES {
                if line == ABOUT_VERSION {
                    ui.label(RichText::new(line).strong());
                } else {
                    ui.label(line);
                }
            }
            ui.add_space(8.0);
            let ok = egui::Button::new("OK").min_size(egui::vec2(DIALOG_BUTTON_MIN_WIDTH, 0.0));
            if ui.add(ok).clicked() {
                close = true;
            }
        });
    });

    close || modal.should_close()
}
