// SPDX-License-Identifier: MPL-2.0
//! In-page anchors: scroll the page so a given section sits at the top.
//!
//! Section heights depend on the window width and the copy, so the offset is
//! measured from the laid-out tree before scrolling.

use iced::advanced::widget::operation::{Operation, Outcome, Scrollable};
use iced::advanced::widget::{self, Id};
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Task, Vector};

/// Scrolls the scrollable `page` until the container `section` reaches its top.
///
/// Does nothing when either id is missing from the current view.
pub fn scroll_to_section<T>(page: &'static str, section: &'static str) -> Task<T>
where
    T: Send + 'static,
{
    widget::operate(SectionOffset::new(Id::new(page), Id::new(section))).then(move |y| {
        operation::scroll_to(
            Id::new(page),
            AbsoluteOffset {
                x: None,
                y: Some(y),
            },
        )
    })
}

/// Measures how far `section` sits below the top of `page`'s content.
#[derive(Debug)]
struct SectionOffset {
    page: Id,
    section: Id,
    content_top: Option<f32>,
    section_top: Option<f32>,
}

impl SectionOffset {
    fn new(page: Id, section: Id) -> Self {
        Self {
            page,
            section,
            content_top: None,
            section_top: None,
        }
    }
}

impl Operation<f32> for SectionOffset {
    fn traverse(&mut self, operate: &mut dyn FnMut(&mut dyn Operation<f32>)) {
        operate(self);
    }

    fn container(&mut self, id: Option<&Id>, bounds: Rectangle) {
        if id == Some(&self.section) {
            self.section_top = Some(bounds.y);
        }
    }

    fn scrollable(
        &mut self,
        id: Option<&Id>,
        _bounds: Rectangle,
        content_bounds: Rectangle,
        _translation: Vector,
        _state: &mut dyn Scrollable,
    ) {
        if id == Some(&self.page) {
            self.content_top = Some(content_bounds.y);
        }
    }

    fn finish(&self) -> Outcome<f32> {
        match (self.content_top, self.section_top) {
            (Some(content_top), Some(section_top)) => {
                Outcome::Some((section_top - content_top).max(0.0))
            }
            _ => Outcome::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::scrollable::RelativeOffset;

    struct NoopScrollable;

    impl Scrollable for NoopScrollable {
        fn snap_to(&mut self, _offset: RelativeOffset<Option<f32>>) {}
        fn scroll_to(&mut self, _offset: AbsoluteOffset<Option<f32>>) {}
        fn scroll_by(&mut self, _offset: AbsoluteOffset, _bounds: Rectangle, _content: Rectangle) {}
    }

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height,
        }
    }

    fn offset(op: &SectionOffset) -> Option<f32> {
        match op.finish() {
            Outcome::Some(y) => Some(y),
            _ => None,
        }
    }

    #[test]
    fn offset_is_section_top_relative_to_page_content() {
        let mut op = SectionOffset::new(Id::new("page"), Id::new("cta"));
        op.scrollable(
            Some(&Id::new("page")),
            rect(64.0, 700.0),
            rect(64.0, 5200.0),
            Vector::new(0.0, 0.0),
            &mut NoopScrollable,
        );
        op.container(None, rect(64.0, 900.0));
        op.container(Some(&Id::new("cta")), rect(4300.0, 700.0));

        assert_eq!(offset(&op), Some(4236.0));
    }

    #[test]
    fn missing_section_produces_nothing() {
        let mut op = SectionOffset::new(Id::new("page"), Id::new("cta"));
        op.scrollable(
            Some(&Id::new("page")),
            rect(0.0, 700.0),
            rect(0.0, 5200.0),
            Vector::new(0.0, 0.0),
            &mut NoopScrollable,
        );

        assert_eq!(offset(&op), None);
    }

    #[test]
    fn other_scrollables_are_ignored() {
        let mut op = SectionOffset::new(Id::new("page"), Id::new("cta"));
        op.scrollable(
            Some(&Id::new("gallery")),
            rect(300.0, 200.0),
            rect(300.0, 900.0),
            Vector::new(0.0, 0.0),
            &mut NoopScrollable,
        );
        op.container(Some(&Id::new("cta")), rect(4300.0, 700.0));

        assert_eq!(offset(&op), None);
    }
}
