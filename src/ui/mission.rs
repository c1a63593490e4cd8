// SPDX-License-Identifier: MPL-2.0
//! Mission statement next to the instructor's portrait.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{image, Column, Container, Row, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Portrait shown beside the mission statement.
pub const PROFILE_IMAGE: &str = "profile.jpeg";

const VALUE_COUNT: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets_dir: &'a Path,
    pub compact: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let portrait = image(image::Handle::from_path(ctx.assets_dir.join(PROFILE_IMAGE)))
        .content_fit(ContentFit::Cover)
        .width(sizing::PROFILE_IMAGE_WIDTH)
        .height(sizing::PROFILE_IMAGE_HEIGHT);

    let highlighted = Row::new()
        .push(statement(ctx.i18n.tr("mission-statement-line-2-before") + " ", palette::WHITE))
        .push(statement(
            ctx.i18n.tr("mission-statement-line-2-highlight"),
            palette::VIBRANT_GREEN,
        ))
        .push(statement(ctx.i18n.tr("mission-statement-line-2-after"), palette::WHITE));

    let values = (1..=VALUE_COUNT).fold(Column::new().spacing(spacing::SM), |col, n| {
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new("\u{2713}")
                    .size(typography::BODY_LG)
                    .color(palette::VIBRANT_GREEN),
            )
            .push(Text::new(ctx.i18n.tr(&format!("mission-value-{n}"))).size(typography::BODY));
        col.push(
            Container::new(row)
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::accent_card),
        )
    });

    let copy = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(components::eyebrow(ctx.i18n.tr("mission-eyebrow")))
        .push(statement(ctx.i18n.tr("mission-statement-line-1"), palette::WHITE))
        .push(highlighted)
        .push(values);

    let content: Element<'_, Action> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(portrait)
            .push(copy)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(portrait)
            .push(copy)
            .into()
    };

    components::section(content, styles::container::page)
}

fn statement<'a>(label: String, color: iced::Color) -> Text<'a> {
    Text::new(label)
        .size(typography::TITLE_MD)
        .font(typography::BOLD)
        .color(color)
}
