// SPDX-License-Identifier: MPL-2.0
//! Hero section: the sequenced background clip under the rotating headline.
//!
//! This view is the rendering boundary of both hero components. It reads the
//! current headline and the latest decoded frame and nothing else.

use super::Action;
use crate::hero::HeadlineEntry;
use crate::i18n::fluent::I18n;
use crate::ui::components;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, image, Container, Stack, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub headline: &'a HeadlineEntry,
    /// Latest frame of the bound clip, if one has been decoded.
    pub frame: Option<&'a image::Handle>,
    pub compact: bool,
}

#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Action> {
    let background: Element<'_, Action> = match ctx.frame {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into(),
    };

    let scrim = Container::new(Text::new(""))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::hero_scrim);

    let badge = Container::new(Text::new(ctx.i18n.tr("hero-badge")).size(typography::BODY_SM))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::pill);

    let headline_size = if ctx.compact {
        typography::DISPLAY_SM
    } else {
        typography::DISPLAY
    };
    let main = Text::new(ctx.headline.main.as_str())
        .size(headline_size)
        .font(typography::EXTRA_BOLD)
        .color(palette::WHITE)
        .width(Length::Fill)
        .center();
    let sub = components::soft(ctx.headline.sub.clone(), typography::BODY_LG, opacity::TEXT_SOFT)
        .width(Length::Fill)
        .center();

    let cta = button(
        Text::new(ctx.i18n.tr("hero-cta-button"))
            .size(typography::BODY_LG)
            .font(typography::BOLD),
    )
    .padding([spacing::MD, spacing::XL])
    .style(styles::button::accent)
    .on_press(Action::ScrollToConsultation);

    let copy = components::centered_column()
        .max_width(sizing::TEXT_MAX_WIDTH)
        .push(badge)
        .push(main)
        .push(sub)
        .push(cta);

    let foreground = Container::new(copy)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(sizing::HERO_HEIGHT)
        .push(background)
        .push(scrim)
        .push(foreground)
        .into()
}
