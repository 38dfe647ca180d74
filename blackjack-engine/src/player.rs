use crate::money::dollars;
use serde::{Deserialize, Serialize};

/// The player at the table. This is the record written by "Save Current Player".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    /// Bank balance in cents
    pub balance: u64,
}

impl Player {
    /// Create a player with a balance given in whole dollars.
    pub fn new(name: impl Into<String>, balance_dollars: u64) -> Self {
        Self {
            name: name.into(),
            age: 0,
            balance: dollars(balance_dollars),
        }
    }

    pub fn can_afford(&self, cents: u64) -> bool {
        cents <= self.balance
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player", 1000)
    }
}
