//! Tests for window size enforcement, lifecycle and placement.

use blackjack::app::frame::FrameState;
use blackjack::app::geometry::{Lifecycle, ResizeDecision, WindowGeometry, centred_position};
use blackjack::config::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TableColour};

#[test]
fn test_small_resize_clamps_to_minimum() {
    let mut geometry = WindowGeometry::default();
    let decision = geometry.on_resized(300, 200);
    assert_eq!(
        decision,
        ResizeDecision::Resize {
            width: 600,
            height: 500
        }
    );
    assert_eq!(geometry.size(), (600, 500));
}

#[test]
fn test_large_resize_is_kept() {
    let mut geometry = WindowGeometry::default();
    assert_eq!(geometry.on_resized(800, 700), ResizeDecision::Keep);
    assert_eq!(geometry.size(), (800, 700));
}

#[test]
fn test_narrow_window_clamps_width_only() {
    let mut geometry = WindowGeometry::default();
    assert_eq!(
        geometry.on_resized(400, 900),
        ResizeDecision::Resize {
            width: 600,
            height: 900
        }
    );
}

#[test]
fn test_height_under_600_requests_unchanged_size() {
    // Heights between 500 and 600 pass the floor but still trip the guard;
    // the requested size equals the reported one.
    let mut geometry = WindowGeometry::default();
    assert_eq!(
        geometry.on_resized(800, 550),
        ResizeDecision::Resize {
            width: 800,
            height: 550
        }
    );
    assert_eq!(geometry.size(), (800, 550));
}

#[test]
fn test_exact_minimum_is_not_below_floor() {
    let mut geometry = WindowGeometry::default();
    let decision = geometry.on_resized(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    assert_eq!(
        decision,
        ResizeDecision::Resize {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT
        }
    );
    assert_eq!(geometry.size(), (600, 500));
}

#[test]
fn test_constructed_geometry_respects_minimum() {
    assert_eq!(WindowGeometry::new(100, 100).size(), (600, 500));
    assert_eq!(WindowGeometry::default().size(), (600, 500));
}

#[test]
fn test_window_constructed_then_resized_small() {
    let mut frame = FrameState::new(TableColour::DEFAULT, WindowGeometry::new(600, 500));
    assert_eq!(frame.lifecycle(), Lifecycle::Constructing);
    frame.mark_visible();
    assert_eq!(frame.lifecycle(), Lifecycle::Visible);

    frame.on_resized(300, 200);
    assert_eq!(frame.geometry().size(), (600, 500));
}

#[test]
fn test_visible_is_one_way() {
    let mut frame = FrameState::new(TableColour::DEFAULT, WindowGeometry::default());
    frame.mark_visible();
    frame.mark_visible();
    assert_eq!(frame.lifecycle(), Lifecycle::Visible);
}

#[test]
fn test_centred_position() {
    assert_eq!(
        centred_position((0, 0), (1920, 1080), (600, 500)),
        (660, 290)
    );
    assert_eq!(
        centred_position((1920, 0), (1280, 1024), (600, 500)),
        (2260, 262)
    );
}

#[test]
fn test_oversized_window_sits_at_monitor_origin() {
    assert_eq!(
        centred_position((-1280, 0), (1280, 720), (1600, 900)),
        (-1280, 0)
    );
}
