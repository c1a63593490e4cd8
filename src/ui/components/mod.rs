// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the page sections.

use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

/// Wraps section content: full-width background, centered content column
/// capped at [`sizing::CONTENT_MAX_WIDTH`].
pub fn section<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    style: fn(&Theme) -> container::Style,
) -> Element<'a, M> {
    let inner = Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(inner)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::SECTION, spacing::MD])
        .style(style)
        .into()
}

/// Large centered section heading.
pub fn section_title<'a>(label: String) -> Text<'a> {
    Text::new(label)
        .size(typography::TITLE_LG)
        .font(typography::BOLD)
        .width(Length::Fill)
        .center()
}

/// Small green label above a heading.
pub fn eyebrow<'a>(label: String) -> Text<'a> {
    Text::new(label)
        .size(typography::BODY_SM)
        .font(typography::BOLD)
        .color(palette::VIBRANT_GREEN)
}

/// White text at `alpha` opacity.
pub fn soft<'a>(label: String, size: f32, alpha: f32) -> Text<'a> {
    Text::new(label).size(size).color(Color {
        a: alpha,
        ..palette::WHITE
    })
}

/// Secondary paragraph text.
pub fn muted<'a>(label: String, size: f32) -> Text<'a> {
    soft(label, size, opacity::TEXT_MUTED)
}

/// Lays `items` out in rows of `columns` equal-width cells.
///
/// The last row is padded with empty cells so every cell keeps the same width.
pub fn grid<'a, M: 'a>(items: Vec<Element<'a, M>>, columns: usize) -> Element<'a, M> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut in_row = 0;

    for item in items {
        row = row.push(Container::new(item).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            in_row = 0;
        }
    }

    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Column::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Centered column used by single-message sections.
pub fn centered_column<'a, M: 'a>() -> Column<'a, M> {
    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
}

/// Number of grid columns for a card list.
#[must_use]
pub fn card_columns(compact: bool, wide: usize) -> usize {
    if compact {
        1
    } else {
        wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_layout_uses_one_column() {
        assert_eq!(card_columns(true, 3), 1);
        assert_eq!(card_columns(false, 3), 3);
    }
}
