// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Container, Row, Text},
    Element, Length,
};

const LINK_KEYS: [&str; 3] = [
    "footer-link-instagram",
    "footer-link-blog",
    "footer-link-kakao",
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let links = LINK_KEYS.iter().fold(Row::new().spacing(spacing::LG), |row, key| {
        row.push(components::muted(ctx.i18n.tr(key), typography::BODY_SM))
    });

    let content = components::centered_column()
        .spacing(spacing::MD)
        .push(
            Text::new(ctx.i18n.tr("brand-name"))
                .size(typography::TITLE_MD)
                .font(typography::EXTRA_BOLD),
        )
        .push(links)
        .push(components::soft(
            ctx.i18n.tr("footer-copyright"),
            typography::CAPTION,
            opacity::TEXT_FAINT,
        ));

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::MD])
        .style(styles::container::section_alt)
        .into()
}
