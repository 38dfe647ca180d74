use crate::money::format_money;
use thiserror::Error;

/// Reasons a table action is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Deal requested with nothing staked.
    #[error("Place a bet before dealing")]
    NoBet,

    /// The stake would exceed the player's bank balance (amounts in cents).
    #[error("Insufficient funds: the bet needs {} but the balance is {}", money(.needed), money(.available))]
    InsufficientFunds { needed: u64, available: u64 },

    /// Betting, dealing or player changes attempted mid-hand.
    #[error("A hand is already in progress")]
    RoundInProgress,

    /// Hit, double or stand attempted with no hand in play.
    #[error("There is no hand in play; deal first")]
    NotPlayersTurn,

    /// Double attempted after the first two cards.
    #[error("You can only double down on your first two cards")]
    DoubleNotAllowed,
}

fn money(cents: &u64) -> String {
    format_money(*cents)
}
