use crate::card::Card;

/// Best possible blackjack total.
pub const BLACKJACK: u8 = 21;

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total with every ace counted as 1.
    pub fn hard_total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |acc, c| acc.saturating_add(c.value()))
    }

    /// Best total: one ace is promoted to 11 when that does not bust.
    pub fn total(&self) -> u8 {
        let hard = self.hard_total();
        if self.cards.iter().any(Card::is_ace) && hard <= BLACKJACK - 10 {
            hard + 10
        } else {
            hard
        }
    }

    /// An ace is currently counted as 11.
    pub fn is_soft(&self) -> bool {
        self.total() != self.hard_total()
    }

    /// Two-card 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }
}
