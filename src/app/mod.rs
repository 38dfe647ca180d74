//! Application module for Blackjack
//!
//! This module contains the main application logic, including:
//! - `App`: Entry point that loads the config and runs the event loop
//! - `WindowManager`: winit handler owning the table window and native menu
//! - `TableWindow`: the window, its renderer, the game panel and dialogs

use crate::cli::RuntimeOptions;
use anyhow::Result;
use blackjack_config::Config;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::event_loop::{ControlFlow, EventLoop};

pub mod dispatcher;
pub mod frame;
pub mod geometry;
mod handler;
pub mod table_window;

pub use handler::WindowManager;
pub use table_window::{TableWindow, TableWindowAction};

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
}

impl App {
    /// Create a new application
    pub fn new(runtime: Arc<Runtime>, runtime_options: RuntimeOptions) -> Result<Self> {
        let config = match &runtime_options.config_path {
            // An explicitly requested file must load
            Some(path) => Config::load_from(path)?,
            None => Config::load().unwrap_or_else(|e| {
                log::warn!("Failed to load config, using defaults: {:#}", e);
                Config::default()
            }),
        };

        crate::debug::apply_config_level(config.log_level);
        log::info!(
            "Config loaded: {}x{}, {} deck(s), colour {}",
            config.window_width,
            config.window_height,
            config.deck_count,
            config.table_colour.to_hex()
        );

        Ok(Self { config, runtime })
    }

    /// Run the application
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        // Nothing animates; wake only for input
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut window_manager = WindowManager::new(self.config, self.runtime);

        event_loop.run_app(&mut window_manager)?;

        Ok(())
    }
}
