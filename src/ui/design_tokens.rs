// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralised design tokens for the GoBarber client.

## Organization

- **Palette**: Brand and surface colors
- **Toast**: Background and text colors for each toast kind
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use gobarber::ui::design_tokens::{palette, spacing};

let accent = palette::ORANGE_500;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Surfaces
    pub const BACKGROUND: Color = Color::from_rgb8(0x31, 0x2e, 0x38);
    pub const SURFACE: Color = Color::from_rgb8(0x3e, 0x3b, 0x47);
    pub const SURFACE_SUNKEN: Color = Color::from_rgb8(0x28, 0x26, 0x2e);
    pub const INPUT: Color = Color::from_rgb8(0x23, 0x21, 0x29);

    // Text
    pub const TEXT: Color = Color::from_rgb8(0xf4, 0xed, 0xe8);
    pub const TEXT_MUTED: Color = Color::from_rgb8(0x99, 0x95, 0x91);
    pub const PLACEHOLDER: Color = Color::from_rgb8(0x66, 0x63, 0x60);

    // Brand
    pub const ORANGE_500: Color = Color::from_rgb8(0xff, 0x90, 0x00);
    pub const ORANGE_600: Color = Color::from_rgb8(0xe0, 0x7e, 0x00);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb8(0xc5, 0x30, 0x30);
}

// ============================================================================
// Toast Colors
// ============================================================================

pub mod toast {
    //! One background/text pair per toast kind. These values are part of the
    //! visual contract and must not drift.
    use super::Color;

    pub const INFO_BACKGROUND: Color = Color::from_rgb8(0xeb, 0xf8, 0xff);
    pub const INFO_TEXT: Color = Color::from_rgb8(0x31, 0x72, 0xb7);

    pub const SUCCESS_BACKGROUND: Color = Color::from_rgb8(0xe6, 0xff, 0xfa);
    pub const SUCCESS_TEXT: Color = Color::from_rgb8(0x2e, 0x65, 0x6a);

    pub const ERROR_BACKGROUND: Color = Color::from_rgb8(0xfd, 0xde, 0xde);
    pub const ERROR_TEXT: Color = Color::from_rgb8(0xc5, 0x30, 0x30);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 56.0;
    pub const INPUT_HEIGHT: f32 = 56.0;

    pub const FORM_WIDTH: f32 = 340.0;
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const AVATAR: f32 = 56.0;
    pub const SCHEDULE_WIDTH: f32 = 560.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings ("Faça seu logon", "Meu perfil")
    pub const TITLE_LG: f32 = 30.0;

    /// Section headers (Manhã, Tarde)
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Form inputs, toast titles
    pub const BODY_LG: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Small body - Toast descriptions, hints
    pub const BODY_SM: f32 = 13.0;
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
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_pairs_have_readable_contrast() {
        // Text must be darker than its background for every kind.
        for (bg, text) in [
            (toast::INFO_BACKGROUND, toast::INFO_TEXT),
            (toast::SUCCESS_BACKGROUND, toast::SUCCESS_TEXT),
            (toast::ERROR_BACKGROUND, toast::ERROR_TEXT),
        ] {
            let lum = |c: Color| 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
            assert!(lum(text) < lum(bg));
        }
    }

    #[test]
    fn brand_orange_round_trips() {
        assert_eq!(palette::ORANGE_500.into_rgba8(), [0xff, 0x90, 0x00, 0xff]);
    }
}
