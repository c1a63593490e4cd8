// SPDX-License-Identifier: MPL-2.0
//! Who the course is for, a caution note and a student testimonial.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

const ITEM_COUNT: usize = 6;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let checklist = (1..=ITEM_COUNT).fold(Column::new().spacing(spacing::SM), |col, n| {
        col.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    Text::new("\u{2713}")
                        .size(typography::BODY_LG)
                        .font(typography::BOLD)
                        .color(palette::VIBRANT_GREEN),
                )
                .push(Text::new(ctx.i18n.tr(&format!("audience-item-{n}"))).size(typography::BODY_LG)),
        )
    });

    let caution = Container::new(Text::new(ctx.i18n.tr("audience-caution")).size(typography::BODY_SM))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::caution);

    let testimonial = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(ctx.i18n.tr("testimonial-title"))
                    .size(typography::TITLE_SM)
                    .font(typography::BOLD)
                    .color(palette::VIBRANT_GREEN),
            )
            .push(components::soft(
                ctx.i18n.tr("testimonial-body"),
                typography::BODY,
                opacity::TEXT_SOFT,
            ))
            .push(components::soft(
                format!("\u{2014} {}", ctx.i18n.tr("testimonial-author")),
                typography::BODY_SM,
                opacity::TEXT_FAINT,
            )),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::accent_card);

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(sizing::TEXT_MAX_WIDTH)
        .push(components::section_title(ctx.i18n.tr("audience-title")))
        .push(checklist)
        .push(caution)
        .push(testimonial);

    let centered = Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    components::section(centered, styles::container::section_alt)
}
