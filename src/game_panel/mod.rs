//! The game panel: owns the table, renders it and carries out game commands.

mod error;
mod render;
mod values;

pub use error::PanelError;
pub use render::to_color32;
pub use values::PanelValues;

use crate::menu::MenuCommand;
use crate::player_details_ui::{PlayerDetails, PlayerDetailsAction, PlayerDetailsForm};
use crate::player_store::{self, NativeFilePicker, PlayerFilePicker};
use crate::traits::{GamePanel, Surface};
use blackjack_config::{Config, TableColour};
use blackjack_engine::{Player, Table, TableError, TableRules};
use render::TableView;
use std::path::{Path, PathBuf};

/// Game panel backed by a [`Table`].
pub struct TablePanel {
    table: Table,
    /// Snapshot shown around the cards; refreshed by `update_values()`
    values: PanelValues,
    background: TableColour,
    repaint_requested: bool,
    /// Open Player Details dialog
    details_form: Option<PlayerDetailsForm>,
    picker: Box<dyn PlayerFilePicker>,
    /// Last file a player was saved to or opened from
    last_player_path: Option<PathBuf>,
}

impl TablePanel {
    /// Create a panel for a new table seated with the configured player.
    pub fn new(config: &Config) -> Self {
        let player = Player::new(config.player_name.clone(), config.starting_balance);
        let table = Table::new(TableRules::from_config(config), player);
        Self::with_table(table, config.table_colour, Box::new(NativeFilePicker))
    }

    /// Create a panel over an existing table and file picker.
    pub fn with_table(
        table: Table,
        background: TableColour,
        picker: Box<dyn PlayerFilePicker>,
    ) -> Self {
        let values = PanelValues::from_table(&table);
        Self {
            table,
            values,
            background,
            repaint_requested: false,
            details_form: None,
            picker,
            last_player_path: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn rules(&self) -> &TableRules {
        self.table.rules()
    }

    pub fn values(&self) -> &PanelValues {
        &self.values
    }

    pub fn last_player_path(&self) -> Option<&Path> {
        self.last_player_path.as_deref()
    }

    /// Whether the Player Details dialog is open.
    pub fn is_editing_player(&self) -> bool {
        self.details_form.is_some()
    }

    pub fn details_form_mut(&mut self) -> Option<&mut PlayerDetailsForm> {
        self.details_form.as_mut()
    }

    /// Return and clear the pending repaint flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Apply a confirmed Player Details dialog.
    pub fn apply_player_details(&mut self, details: PlayerDetails) -> Result<(), PanelError> {
        log::info!(
            "Updating player details: name={:?} age={} balance={}",
            details.name,
            details.age,
            details.balance
        );
        self.table
            .update_player(details.name, details.age, details.balance)?;
        Ok(())
    }

    /// Draw the table and any open Player Details dialog.
    ///
    /// Returns the command of a clicked table button.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<MenuCommand> {
        let view = TableView {
            values: &self.values,
            dealer_cards: self.table.visible_dealer_cards(),
            dealer_hole_hidden: self.table.dealer_hole_hidden()
                && self.table.dealer_hand().len() > 1,
            player_cards: self.table.player_hand().cards(),
            background: self.background,
        };
        let clicked = render::draw_table(ctx, &view);

        let action = self.details_form.as_mut().and_then(|form| form.show(ctx));
        match action {
            Some(PlayerDetailsAction::Apply(details)) => match self.apply_player_details(details) {
                Ok(()) => {
                    self.details_form = None;
                    self.update_values();
                }
                Err(e) => {
                    log::warn!("Player details rejected: {}", e);
                    if let Some(form) = self.details_form.as_mut() {
                        form.set_error(e.to_string());
                    }
                }
            },
            Some(PlayerDetailsAction::Cancel) => self.details_form = None,
            None => {}
        }

        // Table buttons are inert while a dialog is open
        if self.details_form.is_some() {
            None
        } else {
            clicked
        }
    }

    fn ensure_between_hands(&self) -> Result<(), PanelError> {
        if self.table.in_progress() {
            return Err(TableError::RoundInProgress.into());
        }
        Ok(())
    }

    fn player_dir(&self) -> PathBuf {
        self.last_player_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(player_store::default_player_dir)
    }
}

impl Surface for TablePanel {
    fn set_background(&mut self, colour: TableColour) {
        self.background = colour;
    }

    fn background(&self) -> TableColour {
        self.background
    }

    fn repaint(&mut self) {
        self.repaint_requested = true;
    }
}

impl GamePanel for TablePanel {
    fn increase_bet(&mut self, amount: u32) -> Result<(), PanelError> {
        self.table.increase_bet(amount)?;
        Ok(())
    }

    fn new_game(&mut self) -> Result<(), PanelError> {
        self.table.deal()?;
        Ok(())
    }

    fn hit(&mut self) -> Result<(), PanelError> {
        self.table.hit()?;
        Ok(())
    }

    fn play_double(&mut self) -> Result<(), PanelError> {
        self.table.double()?;
        Ok(())
    }

    fn stand(&mut self) -> Result<(), PanelError> {
        self.table.stand()?;
        Ok(())
    }

    fn update_player(&mut self) -> Result<(), PanelError> {
        self.ensure_between_hands()?;
        self.details_form = Some(PlayerDetailsForm::from_player(self.table.player()));
        Ok(())
    }

    fn save_player(&mut self) -> Result<(), PanelError> {
        self.ensure_between_hands()?;

        let suggested = player_store::suggested_file_name(self.table.player());
        let start_dir = self.player_dir();
        let Some(path) = self.picker.pick_save_path(&start_dir, &suggested) else {
            log::debug!("Save Current Player cancelled");
            return Ok(());
        };

        player_store::save_player_to(self.table.player(), &path).map_err(PanelError::Save)?;
        self.last_player_path = Some(path);
        Ok(())
    }

    fn open_player(&mut self) -> Result<(), PanelError> {
        self.ensure_between_hands()?;

        let start_dir = self.player_dir();
        let Some(path) = self.picker.pick_open_path(&start_dir) else {
            log::debug!("Open Existing Player cancelled");
            return Ok(());
        };

        let player = player_store::load_player_from(&path).map_err(PanelError::Open)?;
        self.table.replace_player(player)?;
        self.last_player_path = Some(path);
        Ok(())
    }

    fn update_values(&mut self) {
        self.values = PanelValues::from_table(&self.table);
        self.repaint_requested = true;
    }

    fn has_open_dialog(&self) -> bool {
        self.is_editing_player()
    }

    fn close_dialog(&mut self) {
        if self.details_form.take().is_some() {
            log::debug!("Player Details dismissed");
        }
    }
}
