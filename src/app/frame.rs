//! Window-frame state that is independent of the GPU: background colour,
//! logical geometry, lifecycle and pending redraw.

use super::geometry::{Lifecycle, ResizeDecision, WindowGeometry};
use crate::traits::Surface;
use blackjack_config::TableColour;

/// Non-GPU state of the table window.
#[derive(Debug, Clone)]
pub struct FrameState {
    background: TableColour,
    geometry: WindowGeometry,
    lifecycle: Lifecycle,
    redraw_requested: bool,
}

impl FrameState {
    pub fn new(background: TableColour, geometry: WindowGeometry) -> Self {
        Self {
            background,
            geometry,
            lifecycle: Lifecycle::Constructing,
            redraw_requested: false,
        }
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Mark construction finished.
    pub fn mark_visible(&mut self) {
        if self.lifecycle == Lifecycle::Constructing {
            log::info!("Table window visible");
        }
        self.lifecycle = Lifecycle::Visible;
    }

    /// Apply the minimum-size guard to a resize notification.
    pub fn on_resized(&mut self, width: u32, height: u32) -> ResizeDecision {
        self.geometry.on_resized(width, height)
    }

    /// Return and clear the pending redraw flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Surface for FrameState {
    fn set_background(&mut self, colour: TableColour) {
        self.background = colour;
    }

    fn background(&self) -> TableColour {
        self.background
    }

    fn repaint(&mut self) {
        self.redraw_requested = true;
    }
}

/// Apply a confirmed table colour to the frame and the panel.
///
/// Both backgrounds are set first, then the panel is repainted, then the frame.
pub fn apply_table_colour(colour: TableColour, frame: &mut dyn Surface, panel: &mut dyn Surface) {
    log::info!("Table colour changed to {}", colour.to_hex());
    frame.set_background(colour);
    panel.set_background(colour);
    panel.repaint();
    frame.repaint();
}
