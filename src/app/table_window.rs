//! The Blackjack table window.
//!
//! Owns the winit window, its wgpu surface and egui renderer, the game panel
//! and the window-level dialogs. Menu commands from every source end up in
//! [`TableWindow::dispatch`].

use super::dispatcher;
use super::frame::{FrameState, apply_table_colour};
use super::geometry::{Lifecycle, ResizeDecision, WindowGeometry, centred_position};
use crate::dialogs::{DialogAction, Dialogs};
use crate::game_panel::TablePanel;
use crate::menu::{self, MenuCommand};
use crate::menu_bar_ui;
use crate::traits::Surface;
use anyhow::{Context, Result};
use blackjack_config::{Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TableColour};
use std::sync::Arc;
use wgpu::SurfaceError;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

/// Result of processing a table window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableWindowAction {
    /// No action needed
    None,
    /// Close the window and exit
    Close,
}

/// The main window with its own egui context and wgpu renderer
pub struct TableWindow {
    /// The winit window
    window: Arc<Window>,
    /// Window ID for event routing
    window_id: WindowId,
    /// wgpu surface
    surface: wgpu::Surface<'static>,
    /// wgpu device
    device: Arc<wgpu::Device>,
    /// wgpu queue
    queue: Arc<wgpu::Queue>,
    /// Surface configuration
    surface_config: wgpu::SurfaceConfiguration,
    /// egui context
    egui_ctx: egui::Context,
    /// egui-winit state
    egui_state: egui_winit::State,
    /// egui-wgpu renderer
    egui_renderer: egui_wgpu::Renderer,
    /// Background, geometry and lifecycle
    frame: FrameState,
    /// The game
    panel: TablePanel,
    /// About, Rules, colour and error dialogs
    dialogs: Dialogs,
    /// Draw the in-window menu bar
    show_menu_bar: bool,
    /// Current keyboard modifiers
    modifiers: ModifiersState,
}

impl TableWindow {
    /// Create the table window, hidden. Call [`TableWindow::show`] once menus are attached.
    pub async fn new(event_loop: &ActiveEventLoop, config: &Config) -> Result<Self> {
        let geometry = WindowGeometry::new(config.window_width, config.window_height);

        let window_attrs = Window::default_attributes()
            .with_title(&config.window_title)
            .with_inner_size(LogicalSize::new(geometry.width(), geometry.height()))
            .with_min_inner_size(LogicalSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
            .with_resizable(true)
            .with_visible(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let window_id = window.id();
        let size = window.inner_size();

        // Centre on the primary monitor
        if let Some(monitor) = event_loop
            .primary_monitor()
            .or_else(|| window.current_monitor())
        {
            let origin = monitor.position();
            let monitor_size = monitor.size();
            let outer = window.outer_size();
            let (x, y) = centred_position(
                (origin.x, origin.y),
                (monitor_size.width, monitor_size.height),
                (outer.width, outer.height),
            );
            window.set_outer_position(PhysicalPosition::new(x, y));
        }

        // Platform-specific backend selection for better VM compatibility
        #[cfg(target_os = "windows")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::DX12,
            ..Default::default()
        });
        #[cfg(target_os = "macos")]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::VULKAN | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("Failed to find suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await?;

        let device = Arc::new(device);
        let queue = Arc::new(queue);

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("GPU surface reports no texture formats")?;

        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::Opaque)
        {
            wgpu::CompositeAlphaMode::Opaque
        } else {
            surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // Initialize egui
        let scale_factor = window.scale_factor() as f32;
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(scale_factor),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_format,
            egui_wgpu::RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                predictable_texture_filtering: false,
            },
        );

        let mut frame = FrameState::new(config.table_colour, geometry);
        let mut panel = TablePanel::new(config);
        frame.set_background(config.table_colour);
        panel.set_background(config.table_colour);

        log::info!(
            "Table window created: {}x{} ({:?})",
            geometry.width(),
            geometry.height(),
            surface_format
        );

        Ok(Self {
            window,
            window_id,
            surface,
            device,
            queue,
            surface_config,
            egui_ctx,
            egui_state,
            egui_renderer,
            frame,
            panel,
            dialogs: Dialogs::new(config.table_colour),
            show_menu_bar: !menu::NATIVE_MENU_SUPPORTED,
            modifiers: ModifiersState::empty(),
        })
    }

    /// Get the window ID
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Draw the egui menu bar inside the window.
    pub fn set_menu_bar_visible(&mut self, visible: bool) {
        self.show_menu_bar = visible;
    }

    /// Make the window visible. Ends construction.
    pub fn show(&mut self) {
        self.window.set_visible(true);
        self.frame.mark_visible();
        self.window.request_redraw();
    }

    /// Run a menu command.
    pub fn dispatch(&mut self, command: MenuCommand) {
        dispatcher::dispatch(command, &mut self.panel, &mut self.dialogs);
        self.window.request_redraw();
    }

    /// Apply a confirmed table colour to the window and the panel.
    pub fn apply_table_colour(&mut self, colour: TableColour) {
        apply_table_colour(colour, &mut self.frame, &mut self.panel);
        self.dialogs.set_current_colour(colour);
        if self.panel.take_repaint_request() | self.frame.take_redraw_request() {
            self.window.request_redraw();
        }
    }

    /// Accelerators are ignored while a modal dialog is open.
    fn accepts_shortcuts(&self) -> bool {
        self.frame.lifecycle() == Lifecycle::Visible
            && !self.dialogs.is_open()
            && !self.panel.is_editing_player()
    }

    /// Handle a window event
    pub fn handle_window_event(&mut self, event: WindowEvent) -> TableWindowAction {
        // Let egui handle the event
        let event_response = self.egui_state.on_window_event(&self.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Table window close requested");
                return TableWindowAction::Close;
            }

            WindowEvent::Resized(new_size) => {
                // Minimized windows report 0x0
                if new_size.width > 0 && new_size.height > 0 {
                    self.surface_config.width = new_size.width;
                    self.surface_config.height = new_size.height;
                    self.surface.configure(&self.device, &self.surface_config);
                    self.enforce_minimum_size(new_size.to_logical(self.window.scale_factor()));
                    self.window.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if menu::MATCH_SHORTCUTS_FROM_KEYS
                    && self.accepts_shortcuts()
                    && let Some(command) = menu::shortcuts::command_for_key(&event, self.modifiers)
                {
                    crate::debug_log!("MENU", "Accelerator for {:?}", command);
                    self.dispatch(command);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            // Move, focus, occlusion: nothing to do
            _ => {}
        }

        // Request redraw if egui needs it
        if event_response.repaint {
            self.window.request_redraw();
        }

        TableWindowAction::None
    }

    fn enforce_minimum_size(&mut self, logical: LogicalSize<u32>) {
        if let ResizeDecision::Resize { width, height } =
            self.frame.on_resized(logical.width, logical.height)
            && (width, height) != (logical.width, logical.height)
        {
            log::debug!(
                "Window resized to {}x{}, restoring {}x{}",
                logical.width,
                logical.height,
                width,
                height
            );
            let _ = self
                .window
                .request_inner_size(LogicalSize::new(width, height));
        }
    }

    /// Render the table window
    fn render(&mut self) {
        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                self.window.request_redraw();
                return;
            }
            Err(SurfaceError::Timeout) => {
                log::warn!("Table window surface timeout");
                return;
            }
            Err(e) => {
                log::error!("Table window surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let show_menu_bar = self.show_menu_bar;
        let mut commands = Vec::new();
        let mut dialog_action = None;

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if show_menu_bar && let Some(command) = menu_bar_ui::show(ctx) {
                commands.push(command);
            }
            if let Some(command) = self.panel.show(ctx) {
                commands.push(command);
            }
            dialog_action = self.dialogs.show(ctx, self.panel.rules());
        });

        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);

        // Tessellate shapes
        let paint_jobs = self
            .egui_ctx
            .tessellate(egui_output.shapes, self.egui_ctx.pixels_per_point());

        // Upload egui textures
        for (id, delta) in &egui_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, delta);
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Table Window Encoder"),
            });

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        // Clear to the table colour; egui draws the table on top
        let [r, g, b] = self.frame.background().to_f64_rgb();
        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Table Window Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a: 1.0 }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Convert to 'static lifetime as required by egui_renderer.render()
            let mut render_pass = render_pass.forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        // Act on this frame's input after presenting it
        for command in commands {
            self.dispatch(command);
        }
        if let Some(DialogAction::ApplyTableColour(colour)) = dialog_action {
            self.apply_table_colour(colour);
        }

        if repaint_now || self.panel.take_repaint_request() | self.frame.take_redraw_request() {
            self.window.request_redraw();
        }
    }
}
