//! Menu command dispatch.
//!
//! Every activated command results in exactly one delegated call (a game
//! action on the panel, or a dialog on the host) followed by exactly one
//! `update_values()` on the panel.
//!
//! The panel and the host each own dialogs, but only one is shown at a time.
//! A command that opens a dialog first dismisses whichever one is open; any
//! other command is ignored until the dialog is closed.

use crate::menu::MenuCommand;
use crate::traits::{GamePanel, TableHost};

/// Run `command` against the panel and host.
pub fn dispatch(command: MenuCommand, panel: &mut dyn GamePanel, host: &mut dyn TableHost) {
    crate::debug_log!("MENU", "Dispatching {:?}", command);

    if panel.has_open_dialog() || host.has_open_dialog() {
        if !command.opens_dialog() {
            crate::debug_log!("MENU", "Ignoring {:?} while a dialog is open", command);
            panel.update_values();
            return;
        }
        panel.close_dialog();
        host.close_dialog();
    }

    let result = match command {
        MenuCommand::Bet(chip) => panel.increase_bet(chip.amount()),
        MenuCommand::Deal => panel.new_game(),
        MenuCommand::Hit => panel.hit(),
        MenuCommand::Double => panel.play_double(),
        MenuCommand::Stand => panel.stand(),
        MenuCommand::UpdatePlayerDetails => panel.update_player(),
        MenuCommand::SaveCurrentPlayer => panel.save_player(),
        MenuCommand::OpenExistingPlayer => panel.open_player(),
        MenuCommand::ChangeTableColour => {
            host.choose_table_colour();
            Ok(())
        }
        MenuCommand::BlackjackRules => {
            host.show_rules();
            Ok(())
        }
        MenuCommand::AboutBlackjack => {
            host.show_about();
            Ok(())
        }
    };

    if let Err(e) = result {
        log::warn!("{} failed: {}", command.label(), e);
        host.show_error(command.label(), &e.to_string());
    }

    panel.update_values();
}

/// Resolve a display label and dispatch it.
///
/// Unknown labels perform no action; the panel is still refreshed.
/// Returns the resolved command, if any.
pub fn dispatch_label(
    label: &str,
    panel: &mut dyn GamePanel,
    host: &mut dyn TableHost,
) -> Option<MenuCommand> {
    match MenuCommand::from_label(label) {
        Some(command) => {
            dispatch(command, panel, host);
            Some(command)
        }
        None => {
            crate::debug_log!("MENU", "Ignoring unknown menu label {:?}", label);
            panel.update_values();
            None
        }
    }
}
