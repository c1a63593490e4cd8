// SPDX-License-Identifier: MPL-2.0
//! "Are you worried about this?" cards.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

const CARD_COUNT: usize = 6;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compact: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let cards: Vec<Element<'_, Action>> = (1..=CARD_COUNT)
        .map(|n| {
            let quote = Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new("\u{201C}")
                        .size(typography::TITLE_LG)
                        .font(typography::BOLD)
                        .color(palette::VIBRANT_GREEN),
                )
                .push(components::soft(
                    ctx.i18n.tr(&format!("empathy-card-{n}")),
                    typography::BODY,
                    opacity::TEXT_SOFT,
                ));

            Container::new(quote)
                .width(Length::Fill)
                .height(Length::Shrink)
                .padding(spacing::LG)
                .style(styles::container::card)
                .into()
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .push(components::section_title(ctx.i18n.tr("empathy-title")))
        .push(components::grid(
            cards,
            components::card_columns(ctx.compact, 3),
        ));

    components::section(content, styles::container::section_alt)
}
