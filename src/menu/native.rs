//! Native menu bar built with `muda`.
//!
//! - macOS: global application menu bar
//! - Windows: per-window menu bar attached to the HWND

use super::actions::{MenuCommand, MenuEntry, MenuGroup};
use super::MenuActivation;
use anyhow::Result;
use muda::{
    Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu,
    accelerator::{Accelerator, Code, Modifiers},
};
use std::collections::HashMap;
use std::sync::Arc;
use winit::window::Window;

/// Manages the native menu system
pub struct MenuManager {
    /// The root menu
    menu: Menu,
    /// Mapping from menu item IDs to commands
    action_map: HashMap<MenuId, MenuCommand>,
}

impl MenuManager {
    /// Create the menu bar with every Blackjack command
    pub fn new() -> Result<Self> {
        let menu = Menu::new();
        let mut action_map = HashMap::new();

        // Platform-specific modifier key
        #[cfg(target_os = "macos")]
        let cmd_or_ctrl = Modifiers::META;
        #[cfg(not(target_os = "macos"))]
        let cmd_or_ctrl = Modifiers::CONTROL;

        // The first submenu becomes the application menu on macOS
        #[cfg(target_os = "macos")]
        {
            let app_menu = Submenu::new("Blackjack", true);
            app_menu.append(&PredefinedMenuItem::hide(None))?;
            app_menu.append(&PredefinedMenuItem::hide_others(None))?;
            app_menu.append(&PredefinedMenuItem::separator())?;
            app_menu.append(&PredefinedMenuItem::quit(None))?;
            menu.append(&app_menu)?;
        }

        for group in MenuGroup::ALL {
            let submenu = Submenu::new(group.title(), true);
            for entry in group.entries() {
                match entry {
                    MenuEntry::Separator => {
                        submenu.append(&PredefinedMenuItem::separator())?;
                    }
                    MenuEntry::Command(command) => {
                        let accelerator = command
                            .shortcut()
                            .and_then(key_code)
                            .map(|code| Accelerator::new(Some(cmd_or_ctrl), code));
                        let item =
                            MenuItem::with_id(command.id(), command.label(), true, accelerator);
                        action_map.insert(item.id().clone(), command);
                        submenu.append(&item)?;
                    }
                }
            }
            menu.append(&submenu)?;
        }

        Ok(Self { menu, action_map })
    }

    /// Initialize the menu for a window
    ///
    /// On macOS, this initializes the global application menu.
    /// On Windows, this attaches a menu bar to the specific window.
    pub fn init_for_window(&self, window: &Arc<Window>) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            let _ = window;
            self.menu.init_for_nsapp();
            log::info!("Initialized macOS global menu bar");
            Ok(())
        }

        #[cfg(target_os = "windows")]
        {
            use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
            let handle = window.window_handle()?;
            if let RawWindowHandle::Win32(win32_handle) = handle.as_raw() {
                // SAFETY: the HWND belongs to a live winit window owned by the caller
                unsafe { self.menu.init_for_hwnd(win32_handle.hwnd.get() as _)? };
                log::info!("Initialized Windows menu bar for window");
            }
            Ok(())
        }
    }

    /// Poll for menu events and return any triggered commands
    pub fn poll_events(&self) -> impl Iterator<Item = MenuActivation> + '_ {
        std::iter::from_fn(|| match MenuEvent::receiver().try_recv() {
            Ok(event) => Some(resolve(&self.action_map, &event.id)),
            Err(_) => None,
        })
    }
}

/// Map a menu item id to its command. Ids are never matched against labels.
fn resolve(action_map: &HashMap<MenuId, MenuCommand>, id: &MenuId) -> MenuActivation {
    match action_map
        .get(id)
        .copied()
        .or_else(|| MenuCommand::from_id(&id.0))
    {
        Some(command) => MenuActivation::Command(command),
        None => MenuActivation::Unrecognised(id.0.clone()),
    }
}

/// Physical key for an accelerator character.
fn key_code(key: char) -> Option<Code> {
    let code = match key {
        'c' => Code::KeyC,
        'd' => Code::KeyD,
        'f' => Code::KeyF,
        'n' => Code::KeyN,
        'o' => Code::KeyO,
        's' => Code::KeyS,
        'u' => Code::KeyU,
        '1' => Code::Digit1,
        '2' => Code::Digit2,
        '3' => Code::Digit3,
        '4' => Code::Digit4,
        '5' => Code::Digit5,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shortcut_has_a_key_code() {
        for command in MenuCommand::ALL {
            if let Some(key) = command.shortcut() {
                assert!(key_code(key).is_some(), "{:?} has no key code", command);
            }
        }
    }

    #[test]
    fn test_resolve_known_and_unknown_ids() {
        let mut action_map = HashMap::new();
        action_map.insert(MenuId::new(MenuCommand::Hit.id()), MenuCommand::Hit);

        assert_eq!(
            resolve(&action_map, &MenuId::new(MenuCommand::Hit.id())),
            MenuActivation::Command(MenuCommand::Hit)
        );
        assert_eq!(
            resolve(&HashMap::new(), &MenuId::new(MenuCommand::Stand.id())),
            MenuActivation::Command(MenuCommand::Stand)
        );
        // A display label is not an id
        assert_eq!(
            resolve(&action_map, &MenuId::new("Deal")),
            MenuActivation::Unrecognised("Deal".to_string())
        );
    }
}
