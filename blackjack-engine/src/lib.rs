//! Blackjack rules engine.
//!
//! Provides the pieces the game panel drives:
//!
//! - [`Card`], [`Rank`], [`Suit`]: a standard 52-card deck
//! - [`Shoe`]: one or more shuffled decks the dealer draws from
//! - [`Hand`]: scoring with soft aces, blackjack and bust detection
//! - [`Player`]: the persisted player record (name, age, bank balance)
//! - [`Table`]: the betting/dealing state machine and dealer play

mod card;
mod error;
mod hand;
pub mod money;
mod player;
mod shoe;
mod table;

pub use card::{Card, Rank, Suit};
pub use error::TableError;
pub use hand::Hand;
pub use player::Player;
pub use shoe::Shoe;
pub use table::{Outcome, RoundState, Table, TableRules};
