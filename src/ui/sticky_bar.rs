// SPDX-License-Identifier: MPL-2.0
//! Bottom consult bar, shown on narrow windows only.

use super::Action;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Container, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let consult = button(
        Text::new(ctx.i18n.tr("sticky-consult-button"))
            .size(typography::BODY)
            .font(typography::BOLD)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::accent)
    .on_press(Action::ScrollToConsultation);

    Container::new(consult)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::sticky_bar)
        .into()
}
