//! Display snapshot of the table, refreshed by `update_values()`.

use blackjack_engine::money::format_money;
use blackjack_engine::{Hand, Outcome, RoundState, Table};

/// Text and button states shown around the cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelValues {
    pub player_name: String,
    pub balance: String,
    pub bet: String,
    /// Player total, e.g. `17` or `Soft 17`; `None` before the deal
    pub player_total: Option<String>,
    /// Dealer total of the visible cards; `None` before the deal
    pub dealer_total: Option<String>,
    pub message: String,
    pub can_bet: bool,
    pub can_deal: bool,
    pub can_hit: bool,
    pub can_double: bool,
    pub can_stand: bool,
    pub shoe_remaining: usize,
}

impl PanelValues {
    pub fn from_table(table: &Table) -> Self {
        let player = table.player();
        let in_progress = table.in_progress();

        let dealer_total = if table.dealer_hand().is_empty() {
            None
        } else if table.dealer_hole_hidden() {
            Some(format!("Showing {}", table.visible_dealer_total()))
        } else {
            Some(describe_total(table.dealer_hand()))
        };

        Self {
            player_name: player.name.clone(),
            balance: format_money(player.balance),
            bet: format_money(table.bet()),
            player_total: (!table.player_hand().is_empty())
                .then(|| describe_total(table.player_hand())),
            dealer_total,
            message: round_message(table),
            can_bet: !in_progress,
            can_deal: !in_progress && table.bet() > 0 && player.can_afford(table.bet()),
            can_hit: in_progress,
            can_double: table.can_double(),
            can_stand: in_progress,
            shoe_remaining: table.shoe_remaining(),
        }
    }
}

fn describe_total(hand: &Hand) -> String {
    if hand.is_soft() && hand.total() < 21 {
        format!("Soft {}", hand.total())
    } else {
        hand.total().to_string()
    }
}

fn round_message(table: &Table) -> String {
    match table.state() {
        RoundState::Betting if table.bet() == 0 => "Place your bet from the Bet menu.".to_string(),
        RoundState::Betting => format!("Betting {}. Deal when ready.", format_money(table.bet())),
        RoundState::PlayerTurn => "Hit, Double or Stand?".to_string(),
        RoundState::RoundOver(outcome) => {
            if outcome.player_won() {
                format!(
                    "{} Paid {}.",
                    outcome.message(),
                    format_money(table.last_payout())
                )
            } else if outcome == Outcome::Push {
                outcome.message().to_string()
            } else {
                format!("{} Lost {}.", outcome.message(), format_money(table.stake()))
            }
        }
    }
}
