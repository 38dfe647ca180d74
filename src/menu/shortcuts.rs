//! Keyboard accelerators matched from winit key events.
//!
//! Used wherever the native menu does not deliver accelerators itself
//! (everywhere but macOS). Keys are matched by physical position on a QWERTY
//! layout first, so shortcuts keep working on non-Latin layouts, then by the
//! logical character.

use super::actions::MenuCommand;
use winit::event::KeyEvent;
use winit::keyboard::{Key, KeyCode, ModifiersState, PhysicalKey};

/// Whether `modifiers` is exactly the platform menu-shortcut modifier.
///
/// Cmd on macOS, Ctrl elsewhere. Shift and Alt variants are not accelerators.
pub fn is_menu_modifier(modifiers: ModifiersState) -> bool {
    #[cfg(target_os = "macos")]
    let expected = ModifiersState::SUPER;
    #[cfg(not(target_os = "macos"))]
    let expected = ModifiersState::CONTROL;

    modifiers == expected
}

/// Resolve a key plus modifiers to the command it accelerates.
pub fn command_for_combo(key: char, modifiers: ModifiersState) -> Option<MenuCommand> {
    if !is_menu_modifier(modifiers) {
        return None;
    }
    MenuCommand::from_shortcut(key)
}

/// Resolve a winit key event to the command it accelerates.
pub fn command_for_key(event: &KeyEvent, modifiers: ModifiersState) -> Option<MenuCommand> {
    if !event.state.is_pressed() || event.repeat {
        return None;
    }

    let physical = match event.physical_key {
        PhysicalKey::Code(code) => qwerty_char(code),
        PhysicalKey::Unidentified(_) => None,
    };
    let logical = match &event.logical_key {
        Key::Character(s) => s.chars().next(),
        _ => None,
    };

    physical
        .and_then(|ch| command_for_combo(ch, modifiers))
        .or_else(|| logical.and_then(|ch| command_for_combo(ch, modifiers)))
}

/// Character a physical key produces on a US QWERTY keyboard, for the keys
/// used as accelerators.
pub fn qwerty_char(code: KeyCode) -> Option<char> {
    let ch = match code {
        KeyCode::KeyC => 'c',
        KeyCode::KeyD => 'd',
        KeyCode::KeyF => 'f',
        KeyCode::KeyN => 'n',
        KeyCode::KeyO => 'o',
        KeyCode::KeyS => 's',
        KeyCode::KeyU => 'u',
        KeyCode::Digit1 => '1',
        KeyCode::Digit2 => '2',
        KeyCode::Digit3 => '3',
        KeyCode::Digit4 => '4',
        KeyCode::Digit5 => '5',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Chip;

    #[cfg(target_os = "macos")]
    const MENU_MOD: ModifiersState = ModifiersState::SUPER;
    #[cfg(not(target_os = "macos"))]
    const MENU_MOD: ModifiersState = ModifiersState::CONTROL;

    #[test]
    fn test_menu_modifier_resolves_commands() {
        assert_eq!(command_for_combo('n', MENU_MOD), Some(MenuCommand::Deal));
        assert_eq!(command_for_combo('C', MENU_MOD), Some(MenuCommand::Hit));
        assert_eq!(
            command_for_combo('4', MENU_MOD),
            Some(MenuCommand::Bet(Chip::TwentyFive))
        );
    }

    #[test]
    fn test_missing_or_extra_modifier_is_ignored() {
        assert_eq!(command_for_combo('n', ModifiersState::empty()), None);
        assert_eq!(
            command_for_combo('n', MENU_MOD | ModifiersState::SHIFT),
            None
        );
        assert_eq!(command_for_combo('n', MENU_MOD | ModifiersState::ALT), None);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(command_for_combo('x', MENU_MOD), None);
    }

    #[test]
    fn test_qwerty_covers_every_shortcut() {
        let codes = [
            KeyCode::KeyC,
            KeyCode::KeyD,
            KeyCode::KeyF,
            KeyCode::KeyN,
            KeyCode::KeyO,
            KeyCode::KeyS,
            KeyCode::KeyU,
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
        ];
        let chars: Vec<char> = codes.iter().filter_map(|c| qwerty_char(*c)).collect();
        for command in MenuCommand::ALL {
            if let Some(key) = command.shortcut() {
                assert!(chars.contains(&key), "{:?} not reachable", command);
            }
        }
    }
}
