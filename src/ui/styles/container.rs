// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Chat panel surface.
///
/// Derived from the active theme's background with a near-opaque alpha so it
/// reads as a floating card over whatever sits behind it.
pub fn panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface_primary
        })),
        border: Border {
            radius: radius::LG.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.text_secondary
            },
        },
        shadow: shadow::LG,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Brand-colored draggable header with rounded top corners.
pub fn header(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            radius: Radius {
                top_left: radius::LG,
                top_right: radius::LG,
                bottom_right: radius::NONE,
                bottom_left: radius::NONE,
            },
            ..Border::default()
        },
        text_color: Some(colors.on_brand),
        ..Default::default()
    }
}

/// Separator strip above the footer input.
pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            radius: Radius {
                top_left: radius::NONE,
                top_right: radius::NONE,
                bottom_right: radius::LG,
                bottom_left: radius::LG,
            },
            ..Border::default()
        },
        ..Default::default()
    }
}

pub fn user_bubble(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.brand_primary)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        text_color: Some(colors.on_brand),
        ..Default::default()
    }
}

pub fn bot_bubble(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Request error line in the conversation.
pub fn error_line(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.error
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        text_color: Some(colors.error),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_nearly_opaque() {
        let style = panel(&Theme::Light);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.a > 0.9);
    }

    #[test]
    fn header_rounds_top_corners_only() {
        let style = header(&Theme::Dark);
        assert_eq!(style.border.radius.top_left, radius::LG);
        assert_eq!(style.border.radius.bottom_left, radius::NONE);
    }

    #[test]
    fn bubbles_differ_between_senders() {
        let user = user_bubble(&Theme::Light);
        let bot = bot_bubble(&Theme::Light);
        assert_ne!(user.background, bot.background);
    }

    #[test]
    fn error_line_uses_error_color_for_text() {
        let style = error_line(&Theme::Light);
        assert_eq!(style.text_color, Some(ColorScheme::light().error));
    }
}
