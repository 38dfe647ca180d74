//! Tests for the menu command model: layout, labels, ids and accelerators.

use blackjack::menu::{Chip, MenuCommand, MenuEntry, MenuGroup};
use std::collections::HashSet;

#[test]
fn test_menu_layout() {
    let titles: Vec<&str> = MenuGroup::ALL.iter().map(|g| g.title()).collect();
    assert_eq!(titles, ["Player", "Actions", "Bet", "Window", "Help"]);

    let labels = |group: MenuGroup| -> Vec<String> {
        group
            .entries()
            .into_iter()
            .map(|e| match e {
                MenuEntry::Command(c) => c.label().to_string(),
                MenuEntry::Separator => "-".to_string(),
            })
            .collect()
    };

    assert_eq!(
        labels(MenuGroup::Player),
        [
            "Update Player Details",
            "-",
            "Save Current Player",
            "Open Existing Player"
        ]
    );
    assert_eq!(labels(MenuGroup::Actions), ["Deal", "Hit", "Double", "Stand"]);
    assert_eq!(labels(MenuGroup::Bet), ["$1", "$5", "$10", "$25", "$100"]);
    assert_eq!(labels(MenuGroup::Window), ["Change Table Colour"]);
    assert_eq!(
        labels(MenuGroup::Help),
        ["Blackjack Rules", "-", "About Blackjack"]
    );
}

#[test]
fn test_every_command_appears_exactly_once() {
    let listed: Vec<MenuCommand> = MenuGroup::ALL
        .iter()
        .flat_map(|g| g.entries())
        .filter_map(|e| match e {
            MenuEntry::Command(c) => Some(c),
            MenuEntry::Separator => None,
        })
        .collect();
    assert_eq!(listed, MenuCommand::ALL.to_vec());
}

#[test]
fn test_labels_ids_and_shortcuts_are_unique() {
    let labels: HashSet<_> = MenuCommand::ALL.iter().map(|c| c.label()).collect();
    let ids: HashSet<_> = MenuCommand::ALL.iter().map(|c| c.id()).collect();
    let shortcuts: Vec<char> = MenuCommand::ALL.iter().filter_map(|c| c.shortcut()).collect();
    let unique_shortcuts: HashSet<_> = shortcuts.iter().collect();

    assert_eq!(labels.len(), MenuCommand::ALL.len());
    assert_eq!(ids.len(), MenuCommand::ALL.len());
    assert_eq!(unique_shortcuts.len(), shortcuts.len());
}

#[test]
fn test_accelerators() {
    let expected = [
        (MenuCommand::UpdatePlayerDetails, Some('u')),
        (MenuCommand::SaveCurrentPlayer, Some('s')),
        (MenuCommand::OpenExistingPlayer, Some('o')),
        (MenuCommand::Deal, Some('n')),
        (MenuCommand::Hit, Some('c')),
        (MenuCommand::Double, Some('d')),
        (MenuCommand::Stand, Some('f')),
        (MenuCommand::Bet(Chip::One), Some('1')),
        (MenuCommand::Bet(Chip::Five), Some('2')),
        (MenuCommand::Bet(Chip::Ten), Some('3')),
        (MenuCommand::Bet(Chip::TwentyFive), Some('4')),
        (MenuCommand::Bet(Chip::Hundred), Some('5')),
        (MenuCommand::ChangeTableColour, None),
        (MenuCommand::BlackjackRules, None),
        (MenuCommand::AboutBlackjack, None),
    ];
    for (command, key) in expected {
        assert_eq!(command.shortcut(), key, "{:?}", command);
    }
}

#[test]
fn test_shortcut_text_uses_platform_modifier() {
    let text = MenuCommand::Deal.shortcut_text().unwrap();
    if cfg!(target_os = "macos") {
        assert_eq!(text, "⌘N");
    } else {
        assert_eq!(text, "Ctrl+N");
    }
    assert_eq!(MenuCommand::AboutBlackjack.shortcut_text(), None);
}

#[test]
fn test_lookups_round_trip() {
    for command in MenuCommand::ALL {
        assert_eq!(MenuCommand::from_label(command.label()), Some(command));
        assert_eq!(MenuCommand::from_id(command.id()), Some(command));
    }
    assert_eq!(MenuCommand::from_label("Surrender"), None);
    assert_eq!(MenuCommand::from_shortcut('N'), Some(MenuCommand::Deal));
    // Ids and labels are separate namespaces
    assert_eq!(MenuCommand::from_id("Deal"), None);
    assert_eq!(MenuCommand::from_label("deal"), None);
}

#[test]
fn test_dialog_commands() {
    let openers: Vec<MenuCommand> = MenuCommand::ALL
        .into_iter()
        .filter(|c| c.opens_dialog())
        .collect();
    assert_eq!(
        openers,
        [
            MenuCommand::UpdatePlayerDetails,
            MenuCommand::ChangeTableColour,
            MenuCommand::BlackjackRules,
            MenuCommand::AboutBlackjack,
        ]
    );
}
