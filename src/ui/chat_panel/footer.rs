// SPDX-License-Identifier: MPL-2.0
//! Message input, send and voice buttons, and voice status lines.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub input: &'a str,
    pub placeholder: String,
    pub send_tooltip: String,
    /// "Start voice input" or "Stop listening", matching `listening`.
    pub voice_tooltip: String,
    /// A backend request is pending.
    pub loading: bool,
    pub listening: bool,
    pub voice_supported: bool,
    /// "Listening..." status, shown while listening.
    pub listening_status: String,
    pub voice_error: Option<String>,
}

/// Enabled states of the footer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub input: bool,
    pub send: bool,
    pub voice: bool,
}

impl Controls {
    #[must_use]
    pub fn new(loading: bool, listening: bool, voice_supported: bool, input: &str) -> Self {
        Self {
            input: !loading && !listening,
            send: !loading && !input.trim().is_empty(),
            voice: !loading && voice_supported,
        }
    }
}

const SEND_GLYPH: &str = "➤";
const MIC_GLYPH: &str = "●";
const STOP_GLYPH: &str = "■";

fn glyph(symbol: &str) -> Element<'_, Message> {
    container(text(symbol).size(typography::BODY))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = Controls::new(ctx.loading, ctx.listening, ctx.voice_supported, ctx.input);

    let input = text_input(&ctx.placeholder, ctx.input)
        .on_input_maybe(controls.input.then_some(Message::InputChanged))
        .on_submit_maybe(controls.send.then_some(Message::Send))
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill);
    let input = container(input)
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .align_y(Vertical::Center);

    let send = button(glyph(SEND_GLYPH))
        .width(Length::Fixed(sizing::ICON_BUTTON))
        .height(Length::Fixed(sizing::ICON_BUTTON))
        .padding(0)
        .style(styles::button::action)
        .on_press_maybe(controls.send.then_some(Message::Send));
    let send = styles::tooltip::styled(
        send,
        ctx.send_tooltip,
        iced::widget::tooltip::Position::Top,
    );

    let voice = button(glyph(if ctx.listening { STOP_GLYPH } else { MIC_GLYPH }))
        .width(Length::Fixed(sizing::ICON_BUTTON))
        .height(Length::Fixed(sizing::ICON_BUTTON))
        .padding(0)
        .style(if ctx.listening {
            styles::button::action_active
        } else {
            styles::button::action
        })
        .on_press_maybe(controls.voice.then_some(Message::ToggleVoice));
    let voice = styles::tooltip::styled(
        voice,
        ctx.voice_tooltip,
        iced::widget::tooltip::Position::Top,
    );

    let row = Row::new()
        .push(input)
        .push(send)
        .push(voice)
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    let mut column = Column::new().push(row).spacing(spacing::XXS);
    if ctx.listening {
        column = column.push(text(ctx.listening_status).size(typography::CAPTION));
    }
    if let Some(error) = ctx.voice_error {
        column = column.push(
            container(text(error).size(typography::CAPTION))
                .width(Length::Fill)
                .style(styles::container::error_line),
        );
    }

    container(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_footer_enables_everything_with_text() {
        let controls = Controls::new(false, false, true, "hello");
        assert_eq!(
            controls,
            Controls {
                input: true,
                send: true,
                voice: true,
            }
        );
    }

    #[test]
    fn blank_input_cannot_be_sent() {
        assert!(!Controls::new(false, false, true, "   ").send);
    }

    #[test]
    fn loading_disables_all_controls() {
        let controls = Controls::new(true, false, true, "hello");
        assert!(!controls.input);
        assert!(!controls.send);
        assert!(!controls.voice);
    }

    #[test]
    fn listening_locks_input_but_not_send_or_voice() {
        let controls = Controls::new(false, true, true, "hello");
        assert!(!controls.input);
        assert!(controls.send);
        assert!(controls.voice);
    }

    #[test]
    fn unsupported_voice_is_disabled() {
        assert!(!Controls::new(false, false, false, "").voice);
    }
}
