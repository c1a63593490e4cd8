// SPDX-License-Identifier: MPL-2.0
use crate::i18n::fluent::I18n;

/// Number of headline pairs shipped in the copy catalogue.
pub const HEADLINE_COUNT: usize = 6;

/// One hero headline with its supporting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineEntry {
    pub main: String,
    pub sub: String,
}

impl HeadlineEntry {
    pub fn new(main: impl Into<String>, sub: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            sub: sub.into(),
        }
    }
}

/// Builds the shipped headline list from the copy catalogue, in display order.
#[must_use]
pub fn shipped_headlines(i18n: &I18n) -> Vec<HeadlineEntry> {
    (1..=HEADLINE_COUNT)
        .map(|n| {
            HeadlineEntry::new(
                i18n.tr(&format!("hero-headline-{n}-main")),
                i18n.tr(&format!("hero-headline-{n}-sub")),
            )
        })
        .collect()
}
