// SPDX-License-Identifier: MPL-2.0
//! Page composition: navbar, scrollable sections, optional sticky bar.

use super::{App, Message};
use crate::ui::{
    self, audience, cta, empathy, footer, hero, instructor, mission, navbar, sticky_bar, styles,
    why_us, CONSULTATION_SECTION_ID, PAGE_SCROLLABLE_ID,
};
use iced::widget::{scrollable, Column, Container, Id};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let compact = ui::is_compact(app.window_width);
    let i18n = &app.i18n;

    let sections = Column::new()
        .width(Length::Fill)
        .push(hero::view(hero::ViewContext {
            i18n,
            headline: app.headlines.current(),
            frame: app.media.surface().frame(),
            compact,
        }))
        .push(empathy::view(empathy::ViewContext { i18n, compact }))
        .push(mission::view(mission::ViewContext {
            i18n,
            assets_dir: &app.assets_dir,
            compact,
        }))
        .push(instructor::view(instructor::ViewContext {
            i18n,
            assets_dir: &app.assets_dir,
            compact,
        }))
        .push(why_us::view(why_us::ViewContext { i18n, compact }))
        .push(audience::view(audience::ViewContext { i18n }))
        .push(
            Container::new(cta::view(cta::ViewContext {
                i18n,
                compact,
                launch_failed: app.launch_failed,
            }))
            .id(Id::new(CONSULTATION_SECTION_ID))
            .width(Length::Fill),
        )
        .push(footer::view(footer::ViewContext { i18n }));

    let page = scrollable(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar::view(navbar::ViewContext { i18n }))
        .push(page);

    if compact {
        layout = layout.push(sticky_bar::view(sticky_bar::ViewContext { i18n }));
    }

    let root: Element<'_, ui::Action> = Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into();

    root.map(Message::Page)
}
