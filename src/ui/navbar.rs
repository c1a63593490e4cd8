// SPDX-License-Identifier: MPL-2.0
//! Top bar with the wordmark and the consult shortcut.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the navigation bar.
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let wordmark = Text::new(ctx.i18n.tr("brand-name"))
        .size(typography::TITLE_MD)
        .font(typography::EXTRA_BOLD)
        .color(palette::WHITE)
        .width(Length::Fill);

    let consult = button(Text::new(ctx.i18n.tr("navbar-consult-button")).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::outline_accent)
        .on_press(Action::ScrollToConsultation);

    let bar = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(wordmark)
        .push(consult);

    Container::new(bar)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .style(styles::container::navbar)
        .into()
}
