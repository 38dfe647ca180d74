//! The betting and dealing state machine.
//!
//! ```text
//! Betting ──deal──▶ PlayerTurn ──stand / double / bust / natural──▶ RoundOver
//!    ▲                                                                  │
//!    └──────────────── chip (clears the table) ◀───────────────────────┘
//! ```
//!
//! A deal from `RoundOver` starts the next hand with the same wager.

use crate::card::Card;
use crate::error::TableError;
use crate::hand::Hand;
use crate::money::dollars;
use crate::player::Player;
use crate::shoe::Shoe;
use blackjack_config::{BlackjackPayout, Config};

/// Dealer stands on this total.
const DEALER_STANDS_ON: u8 = 17;

/// Rule settings for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRules {
    pub deck_count: usize,
    pub reshuffle_threshold: usize,
    pub dealer_hits_soft_17: bool,
    pub blackjack_payout: BlackjackPayout,
}

impl TableRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            deck_count: config.deck_count,
            reshuffle_threshold: config.reshuffle_threshold,
            dealer_hits_soft_17: config.dealer_hits_soft_17,
            blackjack_payout: config.blackjack_payout,
        }
    }
}

impl Default for TableRules {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// How a finished hand was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player natural, paid at the blackjack ratio
    PlayerBlackjack,
    /// Player total beats the dealer
    PlayerWin,
    /// Dealer went over 21
    DealerBust,
    /// Equal totals, stake returned
    Push,
    /// Dealer natural
    DealerBlackjack,
    /// Dealer total beats the player
    DealerWin,
    /// Player went over 21
    PlayerBust,
}

impl Outcome {
    pub fn player_won(&self) -> bool {
        matches!(
            self,
            Outcome::PlayerBlackjack | Outcome::PlayerWin | Outcome::DealerBust
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerBlackjack => "Blackjack! You win.",
            Outcome::PlayerWin => "You win!",
            Outcome::DealerBust => "Dealer busts. You win!",
            Outcome::Push => "Push. Your bet is returned.",
            Outcome::DealerBlackjack => "Dealer has blackjack.",
            Outcome::DealerWin => "Dealer wins.",
            Outcome::PlayerBust => "Bust! Dealer wins.",
        }
    }
}

/// Where the table is in the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Chips may be placed; nothing dealt yet
    Betting,
    /// Cards are out and the player acts
    PlayerTurn,
    /// The hand has been settled
    RoundOver(Outcome),
}

/// A single-player blackjack table.
#[derive(Debug, Clone)]
pub struct Table {
    rules: TableRules,
    shoe: Shoe,
    player: Player,
    player_hand: Hand,
    dealer_hand: Hand,
    /// Wager chosen with chips, in cents
    bet: u64,
    /// Amount at risk in the current hand, in cents (twice `bet` after a double)
    stake: u64,
    /// Amount returned to the balance at settlement, in cents
    last_payout: u64,
    state: RoundState,
}

impl Table {
    /// Create a table with a freshly shuffled shoe.
    pub fn new(rules: TableRules, player: Player) -> Self {
        let shoe = Shoe::new(rules.deck_count);
        Self::with_shoe(rules, player, shoe)
    }

    /// Create a table that draws from `shoe`.
    pub fn with_shoe(rules: TableRules, player: Player, shoe: Shoe) -> Self {
        Self {
            rules,
            shoe,
            player,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            bet: 0,
            stake: 0,
            last_payout: 0,
            state: RoundState::Betting,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    pub fn last_payout(&self) -> u64 {
        self.last_payout
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn in_progress(&self) -> bool {
        self.state == RoundState::PlayerTurn
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// The dealer's second card stays face-down while the player acts.
    pub fn dealer_hole_hidden(&self) -> bool {
        self.in_progress()
    }

    /// Dealer cards the player may see.
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        if self.dealer_hole_hidden() && cards.len() > 1 {
            &cards[..1]
        } else {
            cards
        }
    }

    /// Total of the visible dealer cards.
    pub fn visible_dealer_total(&self) -> u8 {
        Hand::from_cards(self.visible_dealer_cards().to_vec()).total()
    }

    pub fn can_double(&self) -> bool {
        self.in_progress()
            && self.player_hand.len() == 2
            && self.player.can_afford(self.bet)
    }

    // ========================================================================
    // Betting
    // ========================================================================

    /// Add a chip of `amount` whole dollars to the wager.
    ///
    /// A chip placed after a finished hand clears the table and starts a new
    /// wager from zero.
    pub fn increase_bet(&mut self, amount: u32) -> Result<(), TableError> {
        if self.in_progress() {
            return Err(TableError::RoundInProgress);
        }

        let base = match self.state {
            RoundState::RoundOver(_) => 0,
            _ => self.bet,
        };
        let needed = base + dollars(u64::from(amount));
        if !self.player.can_afford(needed) {
            return Err(TableError::InsufficientFunds {
                needed,
                available: self.player.balance,
            });
        }

        if matches!(self.state, RoundState::RoundOver(_)) {
            self.clear_table();
            self.state = RoundState::Betting;
        }
        self.bet = needed;
        log::debug!("Bet increased by ${} to {} cents", amount, self.bet);
        Ok(())
    }

    // ========================================================================
    // Play
    // ========================================================================

    /// Stake the wager and deal two cards each, player first.
    pub fn deal(&mut self) -> Result<(), TableError> {
        if self.in_progress() {
            return Err(TableError::RoundInProgress);
        }
        if self.bet == 0 {
            return Err(TableError::NoBet);
        }
        if !self.player.can_afford(self.bet) {
            return Err(TableError::InsufficientFunds {
                needed: self.bet,
                available: self.player.balance,
            });
        }

        if self.shoe.remaining() < self.rules.reshuffle_threshold {
            log::info!(
                "{} cards left (threshold {}), reshuffling before the deal",
                self.shoe.remaining(),
                self.rules.reshuffle_threshold
            );
            self.shoe.reshuffle();
        }

        self.clear_table();
        self.player.balance -= self.bet;
        self.stake = self.bet;

        for _ in 0..2 {
            self.player_hand.push(self.shoe.draw());
            self.dealer_hand.push(self.shoe.draw());
        }
        self.state = RoundState::PlayerTurn;
        log::debug!(
            "Dealt player {:?} dealer {:?}",
            self.player_hand.cards(),
            self.dealer_hand.cards()
        );

        match (
            self.player_hand.is_blackjack(),
            self.dealer_hand.is_blackjack(),
        ) {
            (true, true) => self.settle(Outcome::Push),
            (true, false) => self.settle(Outcome::PlayerBlackjack),
            (false, true) => self.settle(Outcome::DealerBlackjack),
            (false, false) => {}
        }
        Ok(())
    }

    /// Draw one card for the player. 21 stands automatically.
    pub fn hit(&mut self) -> Result<(), TableError> {
        if !self.in_progress() {
            return Err(TableError::NotPlayersTurn);
        }

        self.player_hand.push(self.shoe.draw());
        if self.player_hand.is_bust() {
            self.settle(Outcome::PlayerBust);
        } else if self.player_hand.total() == crate::hand::BLACKJACK {
            self.finish_with_dealer();
        }
        Ok(())
    }

    /// Double the stake, draw exactly one card, then stand.
    pub fn double(&mut self) -> Result<(), TableError> {
        if !self.in_progress() {
            return Err(TableError::NotPlayersTurn);
        }
        if self.player_hand.len() != 2 {
            return Err(TableError::DoubleNotAllowed);
        }
        if !self.player.can_afford(self.bet) {
            return Err(TableError::InsufficientFunds {
                needed: self.bet,
                available: self.player.balance,
            });
        }

        self.player.balance -= self.bet;
        self.stake += self.bet;
        self.player_hand.push(self.shoe.draw());

        if self.player_hand.is_bust() {
            self.settle(Outcome::PlayerBust);
        } else {
            self.finish_with_dealer();
        }
        Ok(())
    }

    /// End the player's turn and let the dealer play.
    pub fn stand(&mut self) -> Result<(), TableError> {
        if !self.in_progress() {
            return Err(TableError::NotPlayersTurn);
        }
        self.finish_with_dealer();
        Ok(())
    }

    // ========================================================================
    // Player record
    // ========================================================================

    /// Replace the player's details. Refused mid-hand.
    pub fn update_player(
        &mut self,
        name: String,
        age: u32,
        balance: u64,
    ) -> Result<(), TableError> {
        if self.in_progress() {
            return Err(TableError::RoundInProgress);
        }
        self.player.name = name;
        self.player.age = age;
        self.player.balance = balance;
        self.clamp_bet_to_balance();
        Ok(())
    }

    /// Seat a different player (e.g. one loaded from disk). Refused mid-hand.
    pub fn replace_player(&mut self, player: Player) -> Result<(), TableError> {
        if self.in_progress() {
            return Err(TableError::RoundInProgress);
        }
        self.player = player;
        self.clear_table();
        self.bet = 0;
        self.state = RoundState::Betting;
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn clear_table(&mut self) {
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.stake = 0;
        self.last_payout = 0;
    }

    fn clamp_bet_to_balance(&mut self) {
        if self.bet > self.player.balance {
            self.bet = 0;
        }
    }

    fn dealer_should_draw(&self) -> bool {
        let total = self.dealer_hand.total();
        total < DEALER_STANDS_ON
            || (self.rules.dealer_hits_soft_17
                && total == DEALER_STANDS_ON
                && self.dealer_hand.is_soft())
    }

    fn finish_with_dealer(&mut self) {
        while self.dealer_should_draw() {
            self.dealer_hand.push(self.shoe.draw());
        }

        let player = self.player_hand.total();
        let dealer = self.dealer_hand.total();
        let outcome = if self.dealer_hand.is_bust() {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::PlayerWin
        } else if player < dealer {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };
        self.settle(outcome);
    }

    fn settle(&mut self, outcome: Outcome) {
        let payout = match outcome {
            Outcome::PlayerBlackjack => {
                let (num, den) = self.rules.blackjack_payout.ratio();
                self.stake + self.stake * num / den
            }
            Outcome::PlayerWin | Outcome::DealerBust => self.stake * 2,
            Outcome::Push => self.stake,
            Outcome::DealerBlackjack | Outcome::DealerWin | Outcome::PlayerBust => 0,
        };
        self.player.balance += payout;
        self.last_payout = payout;
        self.state = RoundState::RoundOver(outcome);
        log::info!(
            "Hand settled: {:?} (player {}, dealer {}), paid {} cents, balance {} cents",
            outcome,
            self.player_hand.total(),
            self.dealer_hand.total(),
            payout,
            self.player.balance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|r| Card::new(*r, Suit::Spades)).collect()
    }

    /// Order: player, dealer, player, dealer, then hits.
    fn table_with(ranks: &[Rank]) -> Table {
        let rules = TableRules {
            reshuffle_threshold: 0,
            ..TableRules::default()
        };
        Table::with_shoe(rules, Player::new("Tester", 100), Shoe::stacked(cards(ranks)))
    }

    #[test]
    fn test_deal_requires_bet() {
        let mut table = table_with(&[]);
        assert_eq!(table.deal(), Err(TableError::NoBet));
        assert_eq!(table.state(), RoundState::Betting);
    }

    #[test]
    fn test_bet_cannot_exceed_balance() {
        let mut table = table_with(&[]);
        table.increase_bet(100).unwrap();
        assert_eq!(
            table.increase_bet(1),
            Err(TableError::InsufficientFunds {
                needed: 10_100,
                available: 10_000
            })
        );
        assert_eq!(table.bet(), 10_000);
    }

    #[test]
    fn test_stand_win_pays_even_money() {
        // Player 10+9 = 19, dealer 10+7 = 17
        let mut table = table_with(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven]);
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        assert!(table.in_progress());
        assert_eq!(table.player().balance, 9_000);
        assert_eq!(table.visible_dealer_cards().len(), 1);

        table.stand().unwrap();
        assert_eq!(table.state(), RoundState::RoundOver(Outcome::PlayerWin));
        assert_eq!(table.player().balance, 11_000);
        assert_eq!(table.last_payout(), 2_000);
        assert_eq!(table.visible_dealer_cards().len(), 2);
    }

    #[test]
    fn test_player_blackjack_pays_three_to_two() {
        let mut table = table_with(&[Rank::Ace, Rank::Ten, Rank::King, Rank::Seven]);
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        assert_eq!(
            table.state(),
            RoundState::RoundOver(Outcome::PlayerBlackjack)
        );
        assert_eq!(table.player().balance, 11_500);
    }

    #[test]
    fn test_both_naturals_push() {
        let mut table = table_with(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
        table.increase_bet(5).unwrap();
        table.deal().unwrap();
        assert_eq!(table.state(), RoundState::RoundOver(Outcome::Push));
        assert_eq!(table.player().balance, 10_000);
    }

    #[test]
    fn test_hit_to_bust_loses_stake() {
        let mut table = table_with(&[
            Rank::Ten,
            Rank::Ten,
            Rank::Six,
            Rank::Seven,
            Rank::King,
        ]);
        table.increase_bet(25).unwrap();
        table.deal().unwrap();
        table.hit().unwrap();
        assert_eq!(table.state(), RoundState::RoundOver(Outcome::PlayerBust));
        assert_eq!(table.player().balance, 7_500);
    }

    #[test]
    fn test_dealer_draws_to_seventeen_and_busts() {
        // Player 10+8 = 18, dealer 10+6 draws a 9 -> 25
        let mut table = table_with(&[
            Rank::Ten,
            Rank::Ten,
            Rank::Eight,
            Rank::Six,
            Rank::Nine,
        ]);
        table.increase_bet(1).unwrap();
        table.deal().unwrap();
        table.stand().unwrap();
        assert_eq!(table.dealer_hand().len(), 3);
        assert_eq!(table.state(), RoundState::RoundOver(Outcome::DealerBust));
        assert_eq!(table.player().balance, 10_100);
    }

    #[test]
    fn test_dealer_hits_soft_seventeen_when_configured() {
        // Player 10+9 = 19, dealer A+6 soft 17, draws a 2 -> 19
        let ranks = cards(&[Rank::Ten, Rank::Ace, Rank::Nine, Rank::Six, Rank::Two]);
        let rules = TableRules {
            reshuffle_threshold: 0,
            dealer_hits_soft_17: true,
            ..TableRules::default()
        };
        let mut table = Table::with_shoe(rules, Player::new("Tester", 100), Shoe::stacked(ranks));
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        table.stand().unwrap();
        assert_eq!(table.dealer_hand().total(), 19);
        assert_eq!(table.state(), RoundState::RoundOver(Outcome::Push));
    }

    #[test]
    fn test_double_draws_one_card_and_doubles_stake() {
        // Player 6+5 = 11 doubles onto a 10 -> 21, dealer 10+8 = 18
        let mut table = table_with(&[
            Rank::Six,
            Rank::Ten,
            Rank::Five,
            Rank::Eight,
            Rank::Ten,
        ]);
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        assert!(table.can_double());
        table.double().unwrap();
        assert_eq!(table.player_hand().len(), 3);
        assert_eq!(table.stake(), 2_000);
        assert_eq!(table.state(), RoundState::RoundOver(Outcome::PlayerWin));
        assert_eq!(table.player().balance, 12_000);
        // The chosen wager is unchanged for the next deal
        assert_eq!(table.bet(), 1_000);
    }

    #[test]
    fn test_double_after_hit_is_refused() {
        let mut table = table_with(&[
            Rank::Two,
            Rank::Ten,
            Rank::Three,
            Rank::Seven,
            Rank::Four,
        ]);
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        table.hit().unwrap();
        assert_eq!(table.double(), Err(TableError::DoubleNotAllowed));
    }

    #[test]
    fn test_actions_without_hand_are_refused() {
        let mut table = table_with(&[]);
        assert_eq!(table.hit(), Err(TableError::NotPlayersTurn));
        assert_eq!(table.stand(), Err(TableError::NotPlayersTurn));
        assert_eq!(table.double(), Err(TableError::NotPlayersTurn));
    }

    #[test]
    fn test_betting_mid_hand_is_refused() {
        let mut table = table_with(&[Rank::Ten, Rank::Ten, Rank::Six, Rank::Seven]);
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        assert_eq!(table.increase_bet(5), Err(TableError::RoundInProgress));
        assert_eq!(table.deal(), Err(TableError::RoundInProgress));
        assert_eq!(
            table.update_player("Other".into(), 30, 100),
            Err(TableError::RoundInProgress)
        );
    }

    #[test]
    fn test_chip_after_round_starts_fresh_wager() {
        let mut table = table_with(&[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Seven]);
        table.increase_bet(10).unwrap();
        table.deal().unwrap();
        table.stand().unwrap();

        table.increase_bet(5).unwrap();
        table.increase_bet(1).unwrap();
        assert_eq!(table.bet(), 600);
        assert_eq!(table.state(), RoundState::Betting);
        assert!(table.player_hand().is_empty());
    }

    #[test]
    fn test_replace_player_resets_table() {
        let mut table = table_with(&[]);
        table.increase_bet(10).unwrap();
        table.replace_player(Player::new("Loaded", 50)).unwrap();
        assert_eq!(table.player().name, "Loaded");
        assert_eq!(table.bet(), 0);
        assert_eq!(table.state(), RoundState::Betting);
    }

    #[test]
    fn test_update_player_drops_unaffordable_bet() {
        let mut table = table_with(&[]);
        table.increase_bet(100).unwrap();
        table.update_player("Rich".into(), 40, 500).unwrap();
        assert_eq!(table.player().name, "Rich");
        assert_eq!(table.player().age, 40);
        assert_eq!(table.bet(), 0);
    }
}
