// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the hero headline rotation with the shipped copy.

use fimbrow_site::hero::{shipped_headlines, HeadlineInterval, HeadlineRotator, HEADLINE_COUNT};
use fimbrow_site::i18n::fluent::I18n;
use std::time::{Duration, Instant};

const PERIOD: Duration = Duration::from_millis(4000);

fn shipped_rotator() -> HeadlineRotator {
    HeadlineRotator::new(shipped_headlines(&I18n::default()), HeadlineInterval::default())
        .expect("shipped headlines are not empty")
}

#[test]
fn shipped_rotation_shows_second_headline_after_one_period() {
    let start = Instant::now();
    let mut rotator = shipped_rotator();
    let token = rotator.mount();

    assert_eq!(rotator.len(), HEADLINE_COUNT);
    assert_eq!(rotator.period(), PERIOD);

    rotator.tick(token, start + PERIOD);
    assert_eq!(rotator.index(), 1);
}

#[test]
fn shipped_rotation_wraps_after_six_periods() {
    let start = Instant::now();
    let mut rotator = shipped_rotator();
    let token = rotator.mount();
    let first = rotator.current().clone();

    for n in 1..=6 {
        rotator.tick(token, start + PERIOD * n);
    }

    assert_eq!(rotator.index(), 0);
    assert_eq!(rotator.current(), &first);
}

#[test]
fn late_tick_catches_up_on_missed_periods() {
    let start = Instant::now();
    let mut rotator = shipped_rotator();
    let token = rotator.mount();

    rotator.tick(token, start + PERIOD);
    assert_eq!(rotator.tick(token, start + PERIOD * 4 + Duration::from_millis(10)), 3);
    assert_eq!(rotator.index(), 4);
}

#[test]
fn unmounted_rotation_never_changes_again() {
    let start = Instant::now();
    let mut rotator = shipped_rotator();
    let token = rotator.mount();
    rotator.tick(token, start + PERIOD);
    rotator.tick(token, start + PERIOD * 2);
    rotator.unmount();

    for n in 3..20 {
        rotator.tick(token, start + PERIOD * n);
    }
    assert_eq!(rotator.index(), 2);
}
