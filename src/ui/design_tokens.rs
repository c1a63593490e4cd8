// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size used by the page sections.

## Organization

- **Palette**: Base colors (black page, zinc cards, vibrant green accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Layout sizes and the mobile breakpoint
- **Typography**: Font size scale and weights
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use fimbrow_site::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let tint = Color {
    a: opacity::ACCENT_TINT,
    ..palette::VIBRANT_GREEN
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Card surfaces (zinc scale)
    pub const ZINC_950: Color = Color::from_rgb8(9, 9, 11);
    pub const ZINC_900: Color = Color::from_rgb8(24, 24, 27);
    pub const ZINC_800: Color = Color::from_rgb8(39, 39, 42);

    // Brand accent
    pub const VIBRANT_GREEN: Color = Color::from_rgb8(0, 212, 21);
    pub const VIBRANT_GREEN_LIGHT: Color = Color::from_rgb8(51, 226, 68);

    // Caution box
    pub const RED_400: Color = Color::from_rgb8(248, 113, 113);
    pub const RED_500: Color = Color::from_rgb8(239, 68, 68);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Card borders on the black page
    pub const HAIRLINE: f32 = 0.05;
    /// Accent-tinted card backgrounds
    pub const ACCENT_TINT: f32 = 0.1;
    /// Accent-tinted borders
    pub const ACCENT_BORDER: f32 = 0.3;
    pub const TEXT_FAINT: f32 = 0.4;
    pub const TEXT_MUTED: f32 = 0.6;
    /// Black scrim over the hero video
    pub const HERO_SCRIM: f32 = 0.6;
    pub const TEXT_SOFT: f32 = 0.8;
    pub const NAVBAR: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
    /// Vertical padding of each page section
    pub const SECTION: f32 = 96.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 64.0;
    pub const HERO_HEIGHT: f32 = 640.0;
    /// Maximum width of section content
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const TEXT_MAX_WIDTH: f32 = 760.0;
    pub const PROFILE_IMAGE_WIDTH: f32 = 420.0;
    pub const PROFILE_IMAGE_HEIGHT: f32 = 520.0;
    pub const CARD_MIN_HEIGHT: f32 = 120.0;
    pub const BUTTON_HEIGHT: f32 = 48.0;

    /// Windows narrower than this get the single-column layout and the
    /// sticky consult bar.
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes from the hero display text down to captions.

    use iced::font::{Font, Weight};

    /// Rotating hero headline
    pub const DISPLAY: f32 = 52.0;

    /// Hero headline on narrow windows
    pub const DISPLAY_SM: f32 = 34.0;

    /// Section titles
    pub const TITLE_LG: f32 = 36.0;

    pub const TITLE_MD: f32 = 24.0;

    /// Card titles
    pub const TITLE_SM: f32 = 20.0;

    /// Hero subheadline, lead paragraphs
    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 16.0;

    pub const BODY_SM: f32 = 14.0;

    /// Eyebrows, tags, footer
    pub const CAPTION: f32 = 12.0;

    pub const BOLD: Font = Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    };

    pub const EXTRA_BOLD: Font = Font {
        weight: Weight::ExtraBold,
        ..Font::DEFAULT
    };
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Green glow under the primary consult buttons
    pub const ACCENT_GLOW: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::VIBRANT_GREEN
        },
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 20.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HERO_SCRIM > 0.0 && opacity::HERO_SCRIM < 1.0);
    assert!(opacity::ACCENT_TINT < opacity::ACCENT_BORDER);

    assert!(typography::DISPLAY > typography::DISPLAY_SM);
    assert!(typography::DISPLAY_SM > typography::TITLE_MD);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(sizing::MOBILE_BREAKPOINT < sizing::CONTENT_MAX_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_is_vibrant_green() {
        assert_eq!(palette::VIBRANT_GREEN, Color::from_rgb8(0, 212, 21));
    }
}
