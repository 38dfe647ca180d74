//! In-window menu bar drawn with egui.
//!
//! Used on platforms without a native menu bar for winit windows, and as the
//! fallback when attaching the native menu fails.

use crate::menu::{MenuCommand, MenuEntry, MenuGroup};
use egui::{Context, TopBottomPanel};

/// Draw the menu bar. Returns the command of a clicked entry.
pub fn show(ctx: &Context) -> Option<MenuCommand> {
    let mut clicked = None;

    TopBottomPanel::top("blackjack_menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            for group in MenuGroup::ALL {
                ui.menu_button(group.title(), |ui| {
                    for entry in group.entries() {
                        match entry {
                            MenuEntry::Separator => {
                                ui.separator();
                            }
                            MenuEntry::Command(command) => {
                                let mut button = egui::Button::new(command.label());
                                if let Some(text) = command.shortcut_text() {
                                    button = button.shortcut_text(text);
                                }
                                if ui.add(button).clicked() {
                                    clicked = Some(command);
                                    ui.close();
                                }
                            }
                        }
                    }
                });
            }
        });
    });

    clicked
}
