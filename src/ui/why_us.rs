// SPDX-License-Identifier: MPL-2.0
//! "Why the FIMBROW method" cards.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Text},
    Element, Length,
};

const CARD_COUNT: usize = 4;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compact: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let cards: Vec<Element<'_, Action>> = (1..=CARD_COUNT)
        .map(|n| {
            let body = Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(format!("{n:02}"))
                        .size(typography::TITLE_MD)
                        .font(typography::EXTRA_BOLD)
                        .color(palette::VIBRANT_GREEN),
                )
                .push(
                    Text::new(ctx.i18n.tr(&format!("why-card-{n}-title")))
                        .size(typography::TITLE_SM)
                        .font(typography::BOLD),
                )
                .push(components::muted(
                    ctx.i18n.tr(&format!("why-card-{n}-desc")),
                    typography::BODY,
                ));

            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::XL)
                .style(styles::container::card)
                .into()
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .push(components::section_title(ctx.i18n.tr("why-title")))
        .push(components::grid(
            cards,
            components::card_columns(ctx.compact, 2),
        ));

    components::section(content, styles::container::page)
}
