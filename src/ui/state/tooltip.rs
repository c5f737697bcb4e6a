// SPDX-License-Identifier: MPL-2.0
//! Launcher tooltip placement.

/// Side of the launcher where its tooltip is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipSide {
    #[default]
    Left,
    Right,
}

/// Picks the tooltip side for a launcher centered at `launcher_x`.
///
/// The tooltip goes left only when the right side is too narrow for it and
/// the left side is wide enough; every other case falls back to the right.
#[must_use]
pub fn tooltip_side(
    launcher_x: f32,
    button_radius: f32,
    viewport_width: f32,
    tooltip_width: f32,
) -> TooltipSide {
    let space_right = viewport_width - (launcher_x + button_radius);
    let space_left = launcher_x - button_radius;

    if space_right < tooltip_width && space_left > tooltip_width {
        TooltipSide::Left
    } else {
        TooltipSide::Right
    }
}
