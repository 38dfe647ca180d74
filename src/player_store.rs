//! Player file persistence.
//!
//! Players are written as YAML files chosen by the user through native file
//! dialogs. The default folder is `~/.config/blackjack/players`.

use anyhow::{Context, Result};
use crate::config::Config;
use blackjack_engine::Player;
use std::path::{Path, PathBuf};

/// File extension of player files.
pub const PLAYER_FILE_EXTENSION: &str = "yaml";

/// Default folder offered by the save and open dialogs.
pub fn default_player_dir() -> PathBuf {
    Config::config_dir().join("players")
}

/// File name suggested when saving `player`, e.g. `Jane Doe` → `jane_doe.yaml`.
pub fn suggested_file_name(player: &Player) -> String {
    let stem: String = player
        .name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "player".to_string() } else { stem };
    format!("{}.{}", stem, PLAYER_FILE_EXTENSION)
}

/// Load a player from a specific file
pub fn load_player_from(path: &Path) -> Result<Player> {
    crate::debug_info!("PLAYER", "Loading player from {:?}", path);

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read player file {:?}", path))?;

    let player: Player = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse player file {:?}", path))?;

    crate::debug_info!(
        "PLAYER",
        "Loaded player {:?} with balance {}",
        player.name,
        player.balance
    );
    Ok(player)
}

/// Save a player to a specific file
pub fn save_player_to(player: &Player, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create player directory {:?}", parent))?;
    }

    let contents = serde_yaml_ng::to_string(player).context("Failed to serialize player")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write player file {:?}", path))?;

    log::info!("Saved player {:?} to {:?}", player.name, path);
    Ok(())
}

/// Asks the user where a player file lives.
///
/// `None` means the user cancelled.
pub trait PlayerFilePicker {
    /// Choose a destination for `suggested_name`, starting in `start_dir`.
    fn pick_save_path(&mut self, start_dir: &Path, suggested_name: &str) -> Option<PathBuf>;

    /// Choose an existing player file, starting in `start_dir`.
    fn pick_open_path(&mut self, start_dir: &Path) -> Option<PathBuf>;
}

/// Native file dialogs via `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl PlayerFilePicker for NativeFilePicker {
    fn pick_save_path(&mut self, start_dir: &Path, suggested_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Save Current Player")
            .add_filter("Blackjack player", &[PLAYER_FILE_EXTENSION, "yml"])
            .set_directory(start_dir)
            .set_file_name(suggested_name)
            .save_file()
    }

    fn pick_open_path(&mut self, start_dir: &Path) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Open Existing Player")
            .add_filter("Blackjack player", &[PLAYER_FILE_EXTENSION, "yml"])
            .set_directory(start_dir)
            .pick_file()
    }
}
