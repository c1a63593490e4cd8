// SPDX-License-Identifier: MPL-2.0
//! Consultation call to action, the target of every consult shortcut.

use super::Action;
use crate::contact::CONSULTATION_URL;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, Column, Container, Text},
    Element, Length,
};

const OPTION_KEYS: [&str; 3] = [
    "cta-option-curriculum",
    "cta-option-schedule",
    "cta-option-consult",
];
const REASSURANCE_COUNT: usize = 3;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub compact: bool,
    /// Set when the last attempt to open the chat link failed.
    pub launch_failed: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let lead = Column::new()
        .spacing(spacing::XXS)
        .push(lead_line(ctx.i18n.tr("cta-lead-line-1")))
        .push(lead_line(ctx.i18n.tr("cta-lead-line-2")));

    let options: Vec<Element<'_, Action>> = OPTION_KEYS
        .iter()
        .map(|key| {
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::BODY)
                    .font(typography::BOLD)
                    .width(Length::Fill)
                    .center(),
            )
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::accent_card)
            .into()
        })
        .collect();

    let primary = button(
        Text::new(ctx.i18n.tr("cta-primary-button"))
            .size(typography::TITLE_SM)
            .font(typography::EXTRA_BOLD),
    )
    .padding([spacing::MD, spacing::XXL])
    .style(styles::button::accent)
    .on_press(Action::OpenConsultation);

    let reassurance = (1..=REASSURANCE_COUNT).fold(
        components::centered_column().spacing(spacing::XXS),
        |col, n| {
            col.push(
                components::muted(ctx.i18n.tr(&format!("cta-reassurance-{n}")), typography::BODY_SM)
                    .width(Length::Fill)
                    .center(),
            )
        },
    );

    let mut content = components::centered_column()
        .spacing(spacing::XL)
        .push(
            Text::new(ctx.i18n.tr("cta-title"))
                .size(typography::TITLE_LG)
                .font(typography::EXTRA_BOLD)
                .color(palette::VIBRANT_GREEN)
                .width(Length::Fill)
                .center(),
        )
        .push(lead)
        .push(components::grid(
            options,
            components::card_columns(ctx.compact, 3),
        ))
        .push(primary)
        .push(reassurance);

    if ctx.launch_failed {
        content = content.push(
            components::centered_column()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr("cta-launch-failed"))
                        .size(typography::BODY_SM)
                        .color(palette::RED_400),
                )
                .push(Text::new(CONSULTATION_URL).size(typography::BODY_SM)),
        );
    }

    components::section(content, styles::container::page)
}

fn lead_line<'a>(label: String) -> Text<'a> {
    components::soft(label, typography::BODY_LG, opacity::TEXT_SOFT)
        .width(Length::Fill)
        .center()
}
