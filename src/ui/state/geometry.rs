// SPDX-License-Identifier: MPL-2.0
//! Launcher and panel geometry.
//!
//! The panel is never positioned on its own: its top-left corner is derived
//! from the launcher center so that the launcher sits on the panel's
//! bottom-right corner (the anchor relation). Every helper here keeps that
//! relation intact and clamps against the viewport.

use crate::config::{
    LAUNCHER_CLICK_SLOP, LAUNCHER_SIZE, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH,
    TOOLTIP_ESTIMATED_WIDTH,
};
use iced::{Point, Size};

/// Clamps `value` into `[lo, hi]`, letting `lo` win when the range is inverted.
///
/// Unlike [`f32::clamp`] this never panics, which matters when the viewport is
/// smaller than the widget's minimum dimensions.
#[must_use]
pub fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Fixed dimensions driving the geometry rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetMetrics {
    /// Half the launcher diameter.
    pub button_radius: f32,
    pub min_width: f32,
    pub min_height: f32,
    /// Width reserved for the launcher tooltip when choosing its side.
    pub tooltip_width: f32,
    /// Pointer travel under which a launcher press still counts as a click.
    pub click_slop: f32,
}

impl Default for WidgetMetrics {
    fn default() -> Self {
        Self {
            button_radius: LAUNCHER_SIZE / 2.0,
            min_width: MIN_PANEL_WIDTH,
            min_height: MIN_PANEL_HEIGHT,
            tooltip_width: TOOLTIP_ESTIMATED_WIDTH,
            click_slop: LAUNCHER_CLICK_SLOP,
        }
    }
}

/// Center of the circular launcher, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherPosition {
    pub x: f32,
    pub y: f32,
}

impl LauncherPosition {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Keeps the whole launcher circle inside the viewport.
    #[must_use]
    pub fn clamped(self, viewport: Size, radius: f32) -> Self {
        Self {
            x: clamp_axis(self.x, radius, viewport.width - radius),
            y: clamp_axis(self.y, radius, viewport.height - radius),
        }
    }

    #[must_use]
    pub fn as_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<Point> for LauncherPosition {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Chat panel dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

impl PanelSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the chat panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPosition {
    pub left: f32,
    pub top: f32,
}

impl PanelPosition {
    #[must_use]
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Panel corner implied by the launcher center (inverse anchor relation).
    #[must_use]
    pub fn anchored_to(launcher: LauncherPosition, size: PanelSize, radius: f32) -> Self {
        Self {
            left: launcher.x - size.width + radius,
            top: launcher.y - size.height + radius,
        }
    }

    /// Launcher center glued to this panel's bottom-right corner.
    #[must_use]
    pub fn launcher(self, size: PanelSize, radius: f32) -> LauncherPosition {
        LauncherPosition {
            x: self.left + size.width - radius,
            y: self.top + size.height - radius,
        }
    }

    /// Keeps the whole panel inside the viewport, top-left winning on overflow.
    #[must_use]
    pub fn clamped(self, size: PanelSize, viewport: Size) -> Self {
        Self {
            left: clamp_axis(self.left, 0.0, viewport.width - size.width),
            top: clamp_axis(self.top, 0.0, viewport.height - size.height),
        }
    }

    #[must_use]
    pub fn as_point(self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Moves the far edge (right or bottom) of one axis by `delta`.
///
/// Returns the new extent, bounded by the minimum and by the viewport space
/// left after `origin`.
#[must_use]
pub fn resize_far_edge(extent: f32, delta: f32, min: f32, origin: f32, viewport: f32) -> f32 {
    clamp_axis(extent + delta, min, viewport - origin)
}

/// Moves the near edge (left or top) of one axis by `delta`.
///
/// Returns `(origin, extent)`. Crossing the viewport start pins the edge at 0
/// and keeps the far edge where it was; shrinking below `min` stops at `min`
/// with the far edge fixed.
#[must_use]
pub fn resize_near_edge(origin: f32, extent: f32, delta: f32, min: f32) -> (f32, f32) {
    let potential = extent - delta;
    if origin + delta < 0.0 {
        (0.0, origin + extent)
    } else if potential < min {
        (origin + extent - min, min)
    } else {
        (origin + delta, potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const RADIUS: f32 = 30.0;

    #[test]
    fn clamp_axis_keeps_values_in_range() {
        assert_abs_diff_eq!(clamp_axis(5.0, 0.0, 10.0), 5.0);
        assert_abs_diff_eq!(clamp_axis(-5.0, 0.0, 10.0), 0.0);
        assert_abs_diff_eq!(clamp_axis(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn clamp_axis_lower_bound_wins_when_inverted() {
        assert_abs_diff_eq!(clamp_axis(50.0, 200.0, 100.0), 200.0);
        assert_abs_diff_eq!(clamp_axis(-50.0, 30.0, -30.0), 30.0);
    }

    #[test]
    fn anchor_relation_round_trips() {
        let size = PanelSize::new(300.0, 400.0);
        let launcher = LauncherPosition::new(1200.0, 720.0);

        let panel = PanelPosition::anchored_to(launcher, size, RADIUS);
        assert_abs_diff_eq!(panel.left, 930.0);
        assert_abs_diff_eq!(panel.top, 350.0);
        assert_eq!(panel.launcher(size, RADIUS), launcher);
    }

    #[test]
    fn launcher_clamp_keeps_circle_visible() {
        let viewport = Size::new(800.0, 600.0);
        let clamped = LauncherPosition::new(-40.0, 900.0).clamped(viewport, RADIUS);
        assert_abs_diff_eq!(clamped.x, 30.0);
        assert_abs_diff_eq!(clamped.y, 570.0);
    }

    #[test]
    fn panel_clamp_keeps_panel_inside_viewport() {
        let viewport = Size::new(1280.0, 800.0);
        let size = PanelSize::new(300.0, 400.0);
        let clamped = PanelPosition::new(1100.0, -20.0).clamped(size, viewport);
        assert_abs_diff_eq!(clamped.left, 980.0);
        assert_abs_diff_eq!(clamped.top, 0.0);
    }

    #[test]
    fn panel_clamp_pins_to_origin_when_viewport_is_too_small() {
        let viewport = Size::new(150.0, 100.0);
        let size = PanelSize::new(300.0, 400.0);
        let clamped = PanelPosition::new(40.0, 40.0).clamped(size, viewport);
        assert_eq!(clamped, PanelPosition::new(0.0, 0.0));
    }

    #[test]
    fn far_edge_grows_until_viewport_edge() {
        assert_abs_diff_eq!(resize_far_edge(300.0, 50.0, 200.0, 100.0, 1280.0), 350.0);
        assert_abs_diff_eq!(resize_far_edge(300.0, 5000.0, 200.0, 100.0, 1280.0), 1180.0);
    }

    #[test]
    fn far_edge_never_shrinks_below_minimum() {
        assert_abs_diff_eq!(resize_far_edge(220.0, -100.0, 200.0, 0.0, 1280.0), 200.0);
        // Less room than the minimum: the minimum still wins.
        assert_abs_diff_eq!(resize_far_edge(220.0, 10.0, 200.0, 1200.0, 1280.0), 200.0);
    }

    #[test]
    fn near_edge_applies_full_delta() {
        let (origin, extent) = resize_near_edge(100.0, 300.0, -40.0, 200.0);
        assert_abs_diff_eq!(origin, 60.0);
        assert_abs_diff_eq!(extent, 340.0);
    }

    #[test]
    fn near_edge_pins_at_viewport_start() {
        let (origin, extent) = resize_near_edge(50.0, 300.0, -80.0, 200.0);
        assert_abs_diff_eq!(origin, 0.0);
        assert_abs_diff_eq!(extent, 350.0);
    }

    #[test]
    fn near_edge_stops_at_minimum_with_far_edge_fixed() {
        let (origin, extent) = resize_near_edge(100.0, 220.0, 50.0, 200.0);
        assert_abs_diff_eq!(extent, 200.0);
        assert_abs_diff_eq!(origin + extent, 320.0);
    }
}
