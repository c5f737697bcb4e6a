// SPDX-License-Identifier: MPL-2.0
//! Eight resize grips laid over the panel border.
//!
//! Each grip is an invisible `mouse_area` pinned to one edge or corner of the
//! panel. Corners are stacked above edges so they win where the two overlap.

use super::Message;
use crate::ui::design_tokens::sizing;
use crate::ui::state::{PointerTarget, ResizeHandle};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, text, Stack};
use iced::{mouse, Element, Length};

/// Cursor shown over a grip.
#[must_use]
pub fn cursor_for(handle: ResizeHandle) -> mouse::Interaction {
    match handle {
        ResizeHandle::Left | ResizeHandle::Right => mouse::Interaction::ResizingHorizontally,
        ResizeHandle::Top | ResizeHandle::Bottom => mouse::Interaction::ResizingVertically,
        ResizeHandle::TopLeft | ResizeHandle::BottomRight => {
            mouse::Interaction::ResizingDiagonallyDown
        }
        ResizeHandle::TopRight | ResizeHandle::BottomLeft => {
            mouse::Interaction::ResizingDiagonallyUp
        }
    }
}

/// Grip extent along (x, y).
fn grip_size(handle: ResizeHandle) -> (Length, Length) {
    if handle.is_corner() {
        (
            Length::Fixed(sizing::RESIZE_CORNER),
            Length::Fixed(sizing::RESIZE_CORNER),
        )
    } else if handle.moves_left() || handle.moves_right() {
        (Length::Fixed(sizing::RESIZE_EDGE), Length::Fill)
    } else {
        (Length::Fill, Length::Fixed(sizing::RESIZE_EDGE))
    }
}

fn alignment(handle: ResizeHandle) -> (Horizontal, Vertical) {
    let x = if handle.moves_right() {
        Horizontal::Right
    } else if handle.moves_left() {
        Horizontal::Left
    } else {
        Horizontal::Center
    };
    let y = if handle.moves_bottom() {
        Vertical::Bottom
    } else if handle.moves_top() {
        Vertical::Top
    } else {
        Vertical::Center
    };
    (x, y)
}

fn grip(handle: ResizeHandle) -> Element<'static, Message> {
    let (width, height) = grip_size(handle);
    let (align_x, align_y) = alignment(handle);

    let area = mouse_area(container(text("")).width(width).height(height))
        .on_press(Message::Pressed(PointerTarget::ResizeHandle(handle)))
        .interaction(cursor_for(handle));

    container(area)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

/// Renders the grip overlay. It fills its parent, so stack it over the panel.
pub fn view() -> Element<'static, Message> {
    ResizeHandle::ALL
        .iter()
        .filter(|handle| !handle.is_corner())
        .chain(ResizeHandle::ALL.iter().filter(|handle| handle.is_corner()))
        .fold(Stack::new(), |stack, handle| stack.push(grip(*handle)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
