// SPDX-License-Identifier: MPL-2.0
//! Circular launcher button shown while the panel is closed.
//!
//! The button itself never reports clicks. Presses go through a `mouse_area`
//! so the controller can tell a click from a drag once the pointer is released.

use crate::ui::design_tokens::{sizing, typography};
use crate::ui::state::TooltipSide;
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, text, tooltip};
use iced::{mouse, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
}

pub struct ViewContext {
    pub diameter: f32,
    pub tooltip: String,
    pub tooltip_side: TooltipSide,
    pub dragging: bool,
}

const CHAT_GLYPH: &str = "💬";

/// Tooltip placement for a side chosen by the controller.
#[must_use]
pub fn tooltip_position(side: TooltipSide) -> tooltip::Position {
    match side {
        TooltipSide::Left => tooltip::Position::Left,
        TooltipSide::Right => tooltip::Position::Right,
    }
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let face = button(
        container(text(CHAT_GLYPH).size(typography::LAUNCHER_ICON))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(ctx.diameter))
    .height(Length::Fixed(ctx.diameter))
    .padding(0)
    .style(styles::button::launcher);

    // Without `on_press` the button stays passive and the press reaches the area.
    let area = mouse_area(face)
        .on_press(Message::Pressed)
        .interaction(if ctx.dragging {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        });

    // No tooltip while the launcher follows the pointer.
    if ctx.dragging {
        return area.into();
    }
    styles::tooltip::styled(area, ctx.tooltip, tooltip_position(ctx.tooltip_side)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_side_maps_to_position() {
        assert!(matches!(
            tooltip_position(TooltipSide::Left),
            tooltip::Position::Left
        ));
        assert!(matches!(
            tooltip_position(TooltipSide::Right),
            tooltip::Position::Right
        ));
    }
}
