use blackjack_engine::TableError;
use thiserror::Error;

/// Reasons a game panel action fails.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The table refused the action.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Writing the player file failed.
    #[error("Could not save the player: {0:#}")]
    Save(anyhow::Error),

    /// Reading the player file failed.
    #[error("Could not open the player: {0:#}")]
    Open(anyhow::Error),
}
