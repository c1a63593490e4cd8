// SPDX-License-Identifier: MPL-2.0
//! About the instructor.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{image, Column, Container, Row, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

pub const PROFILE_IMAGE: &str = "profile2.jpeg";

const PARAGRAPH_COUNT: usize = 2;
const TAG_COUNT: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets_dir: &'a Path,
    pub compact: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(heading_line(ctx.i18n.tr("instructor-heading-line-1")))
        .push(heading_line(ctx.i18n.tr("instructor-heading-line-2")));

    let paragraphs = (1..=PARAGRAPH_COUNT).fold(Column::new().spacing(spacing::MD), |col, n| {
        col.push(components::soft(
            ctx.i18n.tr(&format!("instructor-paragraph-{n}")),
            typography::BODY_LG,
            opacity::TEXT_SOFT,
        ))
    });

    let tags = (1..=TAG_COUNT).fold(Row::new().spacing(spacing::XS), |row, n| {
        row.push(
            Container::new(
                Text::new(ctx.i18n.tr(&format!("instructor-tag-{n}"))).size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::pill),
        )
    });

    let copy = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(components::eyebrow(ctx.i18n.tr("instructor-eyebrow")))
        .push(heading)
        .push(paragraphs)
        .push(tags);

    let portrait = image(image::Handle::from_path(ctx.assets_dir.join(PROFILE_IMAGE)))
        .content_fit(ContentFit::Cover)
        .width(sizing::PROFILE_IMAGE_WIDTH)
        .height(sizing::PROFILE_IMAGE_HEIGHT);

    let content: Element<'_, Action> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(copy)
            .push(portrait)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(copy)
            .push(portrait)
            .into()
    };

    components::section(content, styles::container::section_alt)
}

fn heading_line<'a>(label: String) -> Text<'a> {
    Text::new(label)
        .size(typography::TITLE_LG)
        .font(typography::BOLD)
}
