// SPDX-License-Identifier: MPL-2.0
//! Page sections and their styling.
//!
//! Each section is a stateless view over the copy catalogue. Sections only
//! emit [`Action`]s; the page root decides what they do.
//!
//! # Sections (top to bottom)
//!
//! - [`navbar`] - Wordmark and consult shortcut
//! - [`hero`] - Background clip, rotating headline, consult button
//! - [`empathy`] - Pain-point cards
//! - [`mission`] - Mission statement and values
//! - [`instructor`] - Instructor introduction
//! - [`why_us`] - Method cards
//! - [`audience`] - Target audience checklist and testimonial
//! - [`cta`] - Consultation call to action
//! - [`footer`] - Copyright and social labels
//! - [`sticky_bar`] - Bottom consult bar on narrow windows
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Section wrapper, headings, responsive grid
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`anchor`] - Scrolling the page to a section

pub mod anchor;
pub mod audience;
pub mod components;
pub mod cta;
pub mod design_tokens;
pub mod empathy;
pub mod footer;
pub mod hero;
pub mod instructor;
pub mod mission;
pub mod navbar;
pub mod sticky_bar;
pub mod styles;
pub mod why_us;

use design_tokens::sizing;

/// Requests a section can send to the page root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bring the consultation section into view.
    ScrollToConsultation,
    /// Open the external consultation chat.
    OpenConsultation,
}

/// Id of the page scrollable, used to scroll to the consultation section.
pub const PAGE_SCROLLABLE_ID: &str = "fimbrow-page";

/// Id of the consultation section, the target of every consult shortcut.
pub const CONSULTATION_SECTION_ID: &str = "consult";

/// Returns true when `window_width` calls for the single-column layout.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < sizing::MOBILE_BREAKPOINT
}
