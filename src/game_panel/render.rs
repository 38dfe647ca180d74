//! egui drawing of the table: hands, totals, message, chips and actions.

use super::values::PanelValues;
use crate::menu::{Chip, MenuCommand};
use crate::ui_constants::{
    CARD_CORNER_RADIUS, CARD_HEIGHT, CARD_RANK_FONT_SIZE, CARD_SPACING, CARD_SUIT_FONT_SIZE,
    CARD_WIDTH, TABLE_BUTTON_MIN_WIDTH, TABLE_MARGIN, TABLE_MESSAGE_FONT_SIZE,
};
use blackjack_config::TableColour;
use blackjack_engine::Card;
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, StrokeKind, Ui, vec2};

const CARD_RED: Color32 = Color32::from_rgb(190, 20, 30);
const CARD_BLACK: Color32 = Color32::from_rgb(20, 20, 20);
const CARD_BACK: Color32 = Color32::from_rgb(30, 60, 140);
const TABLE_TEXT: Color32 = Color32::from_rgb(245, 245, 235);

/// Convert a table colour to an egui colour.
pub fn to_color32(colour: TableColour) -> Color32 {
    Color32::from_rgb(colour.r, colour.g, colour.b)
}

/// Everything drawn for one frame of the table.
pub struct TableView<'a> {
    pub values: &'a PanelValues,
    pub dealer_cards: &'a [Card],
    /// Draw a face-down card after the visible dealer cards
    pub dealer_hole_hidden: bool,
    pub player_cards: &'a [Card],
    pub background: TableColour,
}

/// Draw the table into the central panel. Returns a command for a clicked
/// chip or action button.
pub fn draw_table(ctx: &egui::Context, view: &TableView<'_>) -> Option<MenuCommand> {
    let mut clicked = None;

    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(to_color32(view.background))
                .inner_margin(TABLE_MARGIN),
        )
        .show(ctx, |ui| {
            ui.visuals_mut().override_text_color = Some(TABLE_TEXT);

            hand_row(
                ui,
                "Dealer",
                view.values.dealer_total.as_deref(),
                view.dealer_cards,
                view.dealer_hole_hidden,
            );

            ui.add_space(TABLE_MARGIN);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(&view.values.message)
                        .font(FontId::proportional(TABLE_MESSAGE_FONT_SIZE))
                        .strong(),
                );
            });
            ui.add_space(TABLE_MARGIN);

            hand_row(
                ui,
                &view.values.player_name,
                view.values.player_total.as_deref(),
                view.player_cards,
                false,
            );

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("Balance: {}", view.values.balance));
                    ui.separator();
                    ui.label(format!("Bet: {}", view.values.bet));
                    ui.separator();
                    ui.label(format!("Cards left: {}", view.values.shoe_remaining));
                });
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let actions = [
                        (MenuCommand::Deal, view.values.can_deal),
                        (MenuCommand::Hit, view.values.can_hit),
                        (MenuCommand::Double, view.values.can_double),
                        (MenuCommand::Stand, view.values.can_stand),
                    ];
                    for (command, enabled) in actions {
                        if table_button(ui, command.label(), enabled) {
                            clicked = Some(command);
                        }
                    }
                    ui.separator();
                    for chip in Chip::ALL {
                        let command = MenuCommand::Bet(chip);
                        if table_button(ui, command.label(), view.values.can_bet) {
                            clicked = Some(command);
                        }
                    }
                });
            });
        });

    clicked
}

fn table_button(ui: &mut Ui, label: &str, enabled: bool) -> bool {
    let button = egui::Button::new(label).min_size(vec2(TABLE_BUTTON_MIN_WIDTH, 0.0));
    ui.add_enabled(enabled, button).clicked()
}

fn hand_row(ui: &mut Ui, title: &str, total: Option<&str>, cards: &[Card], hole_card: bool) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(title).strong());
        if let Some(total) = total {
            ui.label(format!("({})", total));
        }
    });
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = CARD_SPACING;
        // Keep the row height stable when the hand is empty
        let _ = ui.allocate_exact_size(vec2(0.0, CARD_HEIGHT), Sense::hover());
        for card in cards {
            card_face(ui, Some(*card));
        }
        if hole_card {
            card_face(ui, None);
        }
    });
}

/// Draw one card; `None` draws the back.
fn card_face(ui: &mut Ui, card: Option<Card>) {
    let (rect, _) = ui.allocate_exact_size(vec2(CARD_WIDTH, CARD_HEIGHT), Sense::hover());
    let painter = ui.painter();

    match card {
        Some(card) => {
            painter.rect_filled(rect, CARD_CORNER_RADIUS, Color32::WHITE);
            painter.rect_stroke(
                rect,
                CARD_CORNER_RADIUS,
                Stroke::new(1.0, Color32::DARK_GRAY),
                StrokeKind::Inside,
            );
            let ink = if card.suit.is_red() {
                CARD_RED
            } else {
                CARD_BLACK
            };
            painter.text(
                rect.left_top() + vec2(6.0, 4.0),
                Align2::LEFT_TOP,
                card.rank.label(),
                FontId::proportional(CARD_RANK_FONT_SIZE),
                ink,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                card.suit.symbol().to_string(),
                FontId::proportional(CARD_SUIT_FONT_SIZE),
                ink,
            );
        }
        None => {
            painter.rect_filled(rect, CARD_CORNER_RADIUS, CARD_BACK);
            painter.rect_stroke(
                rect.shrink(4.0),
                CARD_CORNER_RADIUS,
                Stroke::new(1.5, Color32::WHITE),
                StrokeKind::Inside,
            );
        }
    }
}
