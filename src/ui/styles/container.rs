// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, VIBRANT_GREEN, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn tinted(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Black page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Alternate section background, one step lighter than the page.
pub fn section_alt(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_950)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Fixed top bar.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tinted(BLACK, opacity::NAVBAR))),
        border: Border {
            color: tinted(WHITE, opacity::HAIRLINE),
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Black scrim drawn over the hero video.
pub fn hero_scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tinted(BLACK, opacity::HERO_SCRIM))),
        ..Default::default()
    }
}

/// Zinc card with a hairline border.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ZINC_900)),
        border: Border {
            color: tinted(WHITE, opacity::HAIRLINE),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Green-tinted card (mission values, testimonial, CTA options).
pub fn accent_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tinted(VIBRANT_GREEN, opacity::ACCENT_TINT))),
        border: Border {
            color: tinted(VIBRANT_GREEN, opacity::ACCENT_BORDER),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Small pill (hero badge, instructor tags).
pub fn pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tinted(VIBRANT_GREEN, opacity::ACCENT_TINT))),
        text_color: Some(VIBRANT_GREEN),
        border: Border {
            color: tinted(VIBRANT_GREEN, opacity::ACCENT_BORDER),
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Red-bordered caution box in the audience section.
pub fn caution(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tinted(palette::RED_500, opacity::ACCENT_TINT))),
        text_color: Some(palette::RED_400),
        border: Border {
            color: palette::RED_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Bottom bar holding the sticky consult button.
pub fn sticky_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tinted(BLACK, opacity::NAVBAR))),
        border: Border {
            color: tinted(WHITE, opacity::HAIRLINE),
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
