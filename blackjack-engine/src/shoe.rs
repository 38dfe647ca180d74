use crate::card::{Card, Rank, Suit};
use rand::seq::SliceRandom;

/// One or more decks the dealer draws from.
///
/// Cards are drawn from the end of the internal vector.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    deck_count: usize,
}

impl Shoe {
    /// Build a freshly shuffled shoe of `deck_count` decks (at least one).
    pub fn new(deck_count: usize) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            deck_count: deck_count.max(1),
        };
        shoe.reshuffle();
        shoe
    }

    /// Build a shoe that deals `cards` in the given order, first card first.
    ///
    /// Used for deterministic hands in tests and demos.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut cards = cards;
        cards.reverse();
        Self {
            cards,
            deck_count: 1,
        }
    }

    /// Refill with `deck_count` full decks and shuffle.
    pub fn reshuffle(&mut self) {
        self.cards.clear();
        for _ in 0..self.deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.cards.push(Card::new(rank, suit));
                }
            }
        }
        let mut rng = rand::thread_rng();
        self.cards.shuffle(&mut rng);
        log::debug!(
            "Shoe reshuffled: {} deck(s), {} cards",
            self.deck_count,
            self.cards.len()
        );
    }

    /// Draw the next card, reshuffling a fresh shoe when empty.
    pub fn draw(&mut self) -> Card {
        if let Some(card) = self.cards.pop() {
            return card;
        }
        log::info!("Shoe exhausted mid-hand, reshuffling");
        self.reshuffle();
        // A freshly built shoe always holds at least 52 cards
        self.cards
            .pop()
            .unwrap_or(Card::new(Rank::Ace, Suit::Spades))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn deck_count(&self) -> usize {
        self.deck_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_shoe_has_full_decks() {
        let shoe = Shoe::new(2);
        assert_eq!(shoe.remaining(), 104);
        assert_eq!(shoe.deck_count(), 2);
    }

    #[test]
    fn test_single_deck_has_unique_cards() {
        let mut shoe = Shoe::new(1);
        let mut seen = HashSet::new();
        for _ in 0..52 {
            assert!(seen.insert(shoe.draw()));
        }
        assert_eq!(shoe.remaining(), 0);
    }

    #[test]
    fn test_zero_decks_means_one() {
        assert_eq!(Shoe::new(0).remaining(), 52);
    }

    #[test]
    fn test_stacked_shoe_deals_in_order() {
        let first = Card::new(Rank::Ace, Suit::Hearts);
        let second = Card::new(Rank::Nine, Suit::Clubs);
        let mut shoe = Shoe::stacked(vec![first, second]);
        assert_eq!(shoe.draw(), first);
        assert_eq!(shoe.draw(), second);
    }

    #[test]
    fn test_empty_shoe_reshuffles_on_draw() {
        let mut shoe = Shoe::stacked(Vec::new());
        let _ = shoe.draw();
        assert_eq!(shoe.remaining(), 51);
    }
}
