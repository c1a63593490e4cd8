// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, VIBRANT_GREEN, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid green consult button (hero, call to action, sticky bar).
pub fn accent(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::VIBRANT_GREEN_LIGHT,
        _ => VIBRANT_GREEN,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: BLACK,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: if matches!(status, button::Status::Pressed) {
            shadow::NONE
        } else {
            shadow::ACCENT_GLOW
        },
        snap: true,
    }
}

/// Outlined green button used in the navbar.
pub fn outline_accent(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (VIBRANT_GREEN, BLACK),
        _ => (Color::TRANSPARENT, VIBRANT_GREEN),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: VIBRANT_GREEN,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button (footer links, wordmark).
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => VIBRANT_GREEN,
        _ => Color {
            a: opacity::TEXT_MUTED,
            ..WHITE
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
