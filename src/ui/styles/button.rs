// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Circular floating launcher.
pub fn launcher(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_hover,
        _ => colors.brand_primary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.on_brand,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Flat icon button drawn on the brand-colored header (close).
pub fn header_icon(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..Color::WHITE })),
        text_color: colors.on_brand,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Footer action (send, voice).
pub fn action(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Active => (colors.brand_primary, colors.on_brand),
        button::Status::Hovered | button::Status::Pressed => (colors.brand_hover, colors.on_brand),
        button::Status::Disabled => (colors.surface_secondary, colors.text_secondary),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Voice button while listening.
pub fn action_active(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    button::Style {
        background: Some(Background::Color(colors.error)),
        text_color: colors.on_brand,
        ..action(theme, status)
    }
}
