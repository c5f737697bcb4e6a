// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors of the chat widget for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand (launcher, header, user bubbles)
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub on_brand: Color,

    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_hover: palette::PRIMARY_700,
            on_brand: palette::WHITE,

            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_500,
            brand_hover: palette::PRIMARY_400,
            on_brand: palette::WHITE,

            error: palette::ERROR_500,
        }
    }

    /// Scheme matching an Iced theme, judged by background luminance.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let bg = theme.extended_palette().background.base.color;
        if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// System mode asks the OS and assumes dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
