// SPDX-License-Identifier: MPL-2.0
//! Panel header: drag handle, title and close button.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::PointerTarget;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, mouse_area, text, Row, Space};
use iced::{mouse, Element, Length};

pub struct ViewContext {
    /// Company name or the generic fallback.
    pub title: String,
    pub close_label: String,
    /// The panel is being dragged right now.
    pub dragging: bool,
}

pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let close = button(
        container(text("✕").size(typography::TITLE))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::ICON_BUTTON))
    .height(Length::Fixed(sizing::ICON_BUTTON))
    .padding(0)
    .style(styles::button::header_icon)
    .on_press(Message::Close);

    let close = styles::tooltip::styled(
        close,
        ctx.close_label,
        iced::widget::tooltip::Position::Bottom,
    );

    let content = Row::new()
        .push(text(ctx.title).size(typography::TITLE))
        .push(Space::new().width(Length::Fill))
        .push(close)
        .align_y(Vertical::Center)
        .spacing(spacing::XS);

    let bar = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .align_y(Vertical::Center)
        .style(styles::container::header);

    // The close button captures its own press, so it never starts a drag.
    mouse_area(bar)
        .on_press(Message::Pressed(PointerTarget::PanelHeader))
        .interaction(if ctx.dragging {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        })
        .into()
}
