// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Exactly one of the launcher or the chat panel is visible. It is placed at
//! the absolute position the controller computed, by padding a full-window
//! container from the top-left corner.

use super::Message;
use crate::chat::ChatState;
use crate::i18n::I18n;
use crate::speech::VoiceInput;
use crate::ui::chat_panel;
use crate::ui::launcher;
use crate::ui::state::ViewportController;
use iced::widget::Container;
use iced::{Element, Length, Padding, Rectangle};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a ViewportController,
    pub chat: &'a ChatState,
    pub voice: &'a VoiceInput,
    pub input: &'a str,
    pub company: Option<&'a str>,
}

/// Padding that puts a child's top-left corner at `bounds.position()`.
#[must_use]
pub fn place_at(bounds: Rectangle) -> Padding {
    Padding {
        top: bounds.y.max(0.0),
        right: 0.0,
        bottom: 0.0,
        left: bounds.x.max(0.0),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.controller;
    let mode = controller.mode();

    let (content, bounds): (Element<'_, Message>, Rectangle) = if controller.is_panel_open() {
        let panel = chat_panel::view(chat_panel::ViewContext {
            i18n: ctx.i18n,
            chat: ctx.chat,
            voice: ctx.voice,
            input: ctx.input,
            company: ctx.company,
            size: controller.panel_size(),
            dragging: mode.is_dragging_panel(),
        });
        (panel.map(Message::Panel), controller.panel_bounds())
    } else {
        let button = launcher::view(launcher::ViewContext {
            diameter: controller.metrics().button_radius * 2.0,
            tooltip: ctx.i18n.tr("launcher-tooltip"),
            tooltip_side: controller.tooltip_side(),
            dragging: mode.is_dragging_launcher(),
        });
        (button.map(Message::Launcher), controller.launcher_bounds())
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(place_at(bounds))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    #[test]
    fn padding_places_child_at_bounds_origin() {
        let padding = place_at(Rectangle::new(Point::new(870.0, 290.0), Size::new(300.0, 400.0)));
        assert_eq!(padding.left, 870.0);
        assert_eq!(padding.top, 290.0);
        assert_eq!(padding.right, 0.0);
        assert_eq!(padding.bottom, 0.0);
    }

    #[test]
    fn negative_origin_is_pinned_to_window_edge() {
        let padding = place_at(Rectangle::new(Point::new(-5.0, -1.0), Size::new(10.0, 10.0)));
        assert_eq!(padding.left, 0.0);
        assert_eq!(padding.top, 0.0);
    }
}
