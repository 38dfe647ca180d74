//! Blackjack Rules dialog.
//!
//! The rules text reflects the table settings in effect (decks, dealer soft
//! 17, blackjack payout).

use crate::ui_constants::{DIALOG_BUTTON_MIN_WIDTH, RULES_DIALOG_MAX_HEIGHT, RULES_DIALOG_WIDTH};
use blackjack_engine::TableRules;
use egui::{Context, Id, Modal};

pub const RULES_TITLE: &str = "Blackjack Rules";

/// Rule paragraphs for `rules`.
pub fn rules_text(rules: &TableRules) -> Vec<String> {
    let decks = if rules.deck_count == 1 {
        "a single 52-card deck".to_string()
    } else {
        format!("a shoe of {} decks", rules.deck_count)
    };
    let soft_17 = if rules.dealer_hits_soft_17 {
        "The dealer draws to 16 and also hits a soft 17."
    } else {
        "The dealer draws to 16 and stands on all 17s."
    };

    vec![
        "Get closer to 21 than the dealer without going over.".to_string(),
        format!("Cards are dealt from {}.", decks),
        "Number cards count their face value, picture cards count 10, and an \
         Ace counts 1 or 11."
            .to_string(),
        "Choose your bet with the Bet menu, then Deal. You and the dealer \
         receive two cards each; one dealer card stays face down."
            .to_string(),
        "Hit takes another card. Stand ends your turn. Double doubles your bet \
         on your first two cards, takes exactly one more card and stands."
            .to_string(),
        soft_17.to_string(),
        format!(
            "A two-card 21 is Blackjack and pays {}. Other wins pay 1:1; equal \
             totals push and your bet is returned.",
            rules.blackjack_payout.display_name()
        ),
        "Going over 21 is a bust and loses the bet.".to_string(),
    ]
}

/// Draw the rules dialog. Returns `true` once it should close.
pub fn show(ctx: &Context, rules: &TableRules) -> bool {
    let mut close = false;

    let modal = Modal::new(Id::new("rules_modal")).show(ctx, |ui| {
        ui.set_width(RULES_DIALOG_WIDTH);
        ui.heading(RULES_TITLE);
        ui.add_space(8.0);
        egui::ScrollArea::vertical()
            .max_height(RULES_DIALOG_MAX_HEIGHT)
            .show(ui, |ui| {
                for paragraph in rules_text(rules) {
                    ui.label(paragraph);
                    ui.add_space(4.0);
                }
            });
        ui.separator();
        let ok = egui::Button::new("OK").min_size(egui::vec2(DIALOG_BUTTON_MIN_WIDTH, 0.0));
        if ui.add(ok).clicked() {
            close = true;
        }
    });

    close || modal.should_close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_config::BlackjackPayout;

    #[test]
    fn test_rules_follow_table_settings() {
        let rules = TableRules {
            deck_count: 6,
            reshuffle_threshold: 52,
            dealer_hits_soft_17: true,
            blackjack_payout: BlackjackPayout::SixToFive,
        };
        let text = rules_text(&rules).join(" ");
        assert!(text.contains("6 decks"));
        assert!(text.contains("hits a soft 17"));
        assert!(text.contains(BlackjackPayout::SixToFive.display_name()));
    }

    #[test]
    fn test_default_rules_single_deck() {
        let text = rules_text(&TableRules::default()).join(" ");
        assert!(text.contains("single 52-card deck"));
        assert!(text.contains("stands on all 17s"));
    }
}
