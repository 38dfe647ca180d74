//! Menu support for Blackjack
//!
//! The command model in [`actions`] is shared by every menu surface:
//! - macOS: native global menu bar (`muda`), accelerators handled by the OS
//! - Windows: native per-window menu bar (`muda`), accelerators matched here
//! - Linux/BSD: in-window egui menu bar, accelerators matched here

mod actions;
#[cfg(any(target_os = "macos", target_os = "windows"))]
mod native;
pub mod shortcuts;

pub use actions::{Chip, MenuCommand, MenuEntry, MenuGroup};
#[cfg(any(target_os = "macos", target_os = "windows"))]
pub use native::MenuManager;

/// Whether this platform can attach a native menu bar to the window.
pub const NATIVE_MENU_SUPPORTED: bool = cfg!(any(target_os = "macos", target_os = "windows"));

/// Whether winit key events must be matched against accelerators.
///
/// On macOS the native menu consumes its own key equivalents.
pub const MATCH_SHORTCUTS_FROM_KEYS: bool = !cfg!(target_os = "macos");

/// An item activated in the native menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuActivation {
    /// A known Blackjack command
    Command(MenuCommand),
    /// An item id this build does not know
    Unrecognised(String),
}
