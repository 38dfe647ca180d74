//! Window size enforcement and start-up placement.

use blackjack_config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

/// What to do after a resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// Accept the size the user chose
    Keep,
    /// Ask the window system for this (logical) size
    Resize { width: u32, height: u32 },
}

/// Logical window size with the 600×500 floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    width: u32,
    height: u32,
}

impl WindowGeometry {
    /// Create a geometry, raising either dimension to its minimum.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(MIN_WINDOW_WIDTH),
            height: height.max(MIN_WINDOW_HEIGHT),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Handle a resize to `width`×`height` logical pixels.
    ///
    /// Each dimension is clamped to its minimum. The clamped size is requested
    /// when the window fell below either minimum, and also whenever the height
    /// is under the minimum *width* (600); in that last case the clamped size
    /// equals the reported one, so the caller's request is a no-op.
    pub fn on_resized(&mut self, width: u32, height: u32) -> ResizeDecision {
        let clamped_width = width.max(MIN_WINDOW_WIDTH);
        let clamped_height = height.max(MIN_WINDOW_HEIGHT);

        let guard =
            width < MIN_WINDOW_WIDTH || height < MIN_WINDOW_HEIGHT || height < MIN_WINDOW_WIDTH;

        self.width = clamped_width;
        self.height = clamped_height;

        if guard {
            log::trace!(
                "Resize {}x{} guarded, requesting {}x{}",
                width,
                height,
                clamped_width,
                clamped_height
            );
            ResizeDecision::Resize {
                width: clamped_width,
                height: clamped_height,
            }
        } else {
            ResizeDecision::Keep
        }
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
    }
}

/// Window lifecycle. Transitions once, at the end of construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Window exists but is hidden while menus, panel and renderer are built
    #[default]
    Constructing,
    /// Window shown; accepts input
    Visible,
}

/// Top-left position that centres a window of `window` size on a monitor.
///
/// All values in physical pixels. A window larger than the monitor is placed
/// at the monitor's origin.
pub fn centred_position(
    monitor_origin: (i32, i32),
    monitor_size: (u32, u32),
    window_size: (u32, u32),
) -> (i32, i32) {
    let offset = |monitor: u32, window: u32| -> i32 {
        i32::try_from(monitor.saturating_sub(window) / 2).unwrap_or(0)
    };
    (
        monitor_origin.0 + offset(monitor_size.0, window_size.0),
        monitor_origin.1 + offset(monitor_size.1, window_size.1),
    )
}
