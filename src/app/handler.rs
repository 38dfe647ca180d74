//! `ApplicationHandler` impl for `WindowManager`.
//!
//! Creates the table window on `resumed`, routes window events to it, and
//! polls the native menu in `about_to_wait`.

use super::table_window::{TableWindow, TableWindowAction};
use blackjack_config::Config;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

#[cfg(any(target_os = "macos", target_os = "windows"))]
use crate::menu::{MenuActivation, MenuManager};

/// Owns the table window and the native menu for the life of the event loop.
pub struct WindowManager {
    config: Config,
    runtime: Arc<Runtime>,
    window: Option<TableWindow>,
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    menu: Option<MenuManager>,
    /// Set once the window has been created, so it is not re-created on resume
    created: bool,
}

impl WindowManager {
    pub fn new(config: Config, runtime: Arc<Runtime>) -> Self {
        Self {
            config,
            runtime,
            window: None,
            #[cfg(any(target_os = "macos", target_os = "windows"))]
            menu: None,
            created: false,
        }
    }

    /// Create the table window, attach menus, then show it.
    fn create_window(&mut self, event_loop: &ActiveEventLoop) {
        let runtime = Arc::clone(&self.runtime);
        let mut window = match runtime.block_on(TableWindow::new(event_loop, &self.config)) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Failed to create table window: {:#}", e);
                eprintln!("blackjack: error: {e:#}");
                event_loop.exit();
                return;
            }
        };

        self.attach_menu(&mut window);

        window.show();
        self.window = Some(window);
        self.created = true;
    }

    #[cfg(any(target_os = "macos", target_os = "windows"))]
    fn attach_menu(&mut self, window: &mut TableWindow) {
        match MenuManager::new() {
            Ok(menu) => {
                if let Err(e) = menu.init_for_window(window.window()) {
                    log::warn!("Failed to initialize menu for window: {:#}", e);
                    window.set_menu_bar_visible(true);
                } else {
                    window.set_menu_bar_visible(false);
                }
                self.menu = Some(menu);
            }
            Err(e) => {
                log::warn!("Failed to create menu: {:#}", e);
                window.set_menu_bar_visible(true);
            }
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    fn attach_menu(&mut self, window: &mut TableWindow) {
        log::info!("Using in-window menu bar");
        window.set_menu_bar_visible(true);
    }
}

impl ApplicationHandler for WindowManager {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.created {
            self.create_window(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if window.handle_window_event(event) == TableWindowAction::Close {
            // Drop the window (and its GPU resources) before leaving the loop
            self.window = None;
            log::info!("Exiting");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        #[cfg(any(target_os = "macos", target_os = "windows"))]
        if let (Some(menu), Some(window)) = (&self.menu, self.window.as_mut()) {
            for activation in menu.poll_events() {
                match activation {
                    MenuActivation::Command(command) => window.dispatch(command),
                    MenuActivation::Unrecognised(id) => {
                        log::debug!("Ignoring unknown menu item {:?}", id);
                    }
                }
            }
        }
    }
}
