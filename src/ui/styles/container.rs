// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window page background.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Dashboard and profile header bar.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_SUNKEN)),
        text_color: Some(palette::TEXT),
        ..Default::default()
    }
}

/// Raised card holding one appointment.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE)),
        text_color: Some(palette::TEXT),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Highlighted card for the next appointment, with the brand accent border.
pub fn highlighted_card(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::ORANGE_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        ..card(theme)
    }
}
