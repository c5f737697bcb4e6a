// SPDX-License-Identifier: MPL-2.0
//! Floating chat panel.
//!
//! The panel is a fixed-size card made of a draggable [`header`], a scrolling
//! [`body`] and the input [`footer`], with the [`resize_handles`] stacked on
//! top. Where it sits on screen is decided by the app from the
//! [`ViewportController`](crate::ui::state::ViewportController).

pub mod body;
pub mod footer;
pub mod header;
pub mod resize_handles;

use crate::chat::{self, ChatState};
use crate::i18n::I18n;
use crate::speech::VoiceInput;
use crate::ui::state::{PanelSize, PointerTarget};
use crate::ui::styles;
use iced::widget::{container, Column, Stack};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Press on the header or a resize handle.
    Pressed(PointerTarget),
    Close,
    InputChanged(String),
    Send,
    ToggleVoice,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub chat: &'a ChatState,
    pub voice: &'a VoiceInput,
    pub input: &'a str,
    pub company: Option<&'a str>,
    pub size: PanelSize,
    pub dragging: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let title = chat::panel_title(ctx.company, i18n);

    let header = header::view(header::ViewContext {
        title,
        close_label: i18n.tr("chat-close"),
        dragging: ctx.dragging,
    });

    let body = body::view(body::ViewContext {
        transcript: ctx.chat.transcript(),
        welcome: chat::welcome_message(ctx.company, i18n),
        thinking: i18n.tr("chat-thinking"),
        width: ctx.size.width,
    });

    let listening = ctx.voice.is_listening();
    let footer = footer::view(footer::ViewContext {
        input: ctx.input,
        placeholder: i18n.tr("chat-input-placeholder"),
        send_tooltip: i18n.tr("chat-send"),
        voice_tooltip: i18n.tr(if listening {
            "voice-stop"
        } else {
            "voice-start"
        }),
        loading: ctx.chat.is_loading(),
        listening,
        voice_supported: ctx.voice.is_supported(),
        listening_status: i18n.tr("voice-listening"),
        voice_error: ctx.voice.error().map(|err| err.user_message(i18n)),
    });

    let card = container(
        Column::new()
            .push(header)
            .push(body)
            .push(footer)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::panel);

    Stack::new()
        .push(card)
        .push(resize_handles::view())
        .width(Length::Fixed(ctx.size.width))
        .height(Length::Fixed(ctx.size.height))
        .into()
}
