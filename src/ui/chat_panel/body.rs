// SPDX-License-Identifier: MPL-2.0
//! Scrollable conversation transcript.

use super::Message;
use crate::chat::{Sender, TranscriptEntry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length, Theme};

pub struct ViewContext<'a> {
    pub transcript: Vec<TranscriptEntry<'a>>,
    pub welcome: String,
    pub thinking: String,
    /// Width available to the body, used to cap bubble width.
    pub width: f32,
}

/// Widest a bubble may grow inside a body of `width`.
#[must_use]
pub fn bubble_max_width(width: f32) -> f32 {
    ((width - 2.0 * spacing::SM) * sizing::BUBBLE_MAX_RATIO).max(0.0)
}

fn bubble<'a>(
    content: String,
    sender: Sender,
    max_width: f32,
) -> Element<'a, Message> {
    let style: fn(&Theme) -> container::Style = match sender {
        Sender::User => styles::container::user_bubble,
        Sender::Bot => styles::container::bot_bubble,
    };
    let align = match sender {
        Sender::User => Horizontal::Right,
        Sender::Bot => Horizontal::Left,
    };

    let bubble = container(text(content).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .max_width(max_width)
        .style(style);

    container(bubble)
        .width(Length::Fill)
        .align_x(align)
        .into()
}

fn error_line<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::error_line)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let max_width = bubble_max_width(ctx.width);

    let rows = ctx.transcript.into_iter().map(|entry| match entry {
        TranscriptEntry::Thinking => bubble(ctx.thinking.clone(), Sender::Bot, max_width),
        TranscriptEntry::Error(message) => error_line(message),
        TranscriptEntry::Welcome => bubble(ctx.welcome.clone(), Sender::Bot, max_width),
        TranscriptEntry::Message(message) => {
            bubble(message.text.clone(), message.sender, max_width)
        }
    });

    let content = Column::with_children(rows)
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .width(Length::Fill);

    scrollable(content)
        .anchor_bottom()
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
