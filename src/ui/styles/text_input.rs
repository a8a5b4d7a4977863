// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Dark form field with an orange outline while focused.
pub fn field(_theme: &Theme, status: Status) -> Style {
    let border_color = match status {
        Status::Focused { .. } => palette::ORANGE_500,
        Status::Active | Status::Hovered | Status::Disabled => palette::INPUT,
    };

    Style {
        background: palette::INPUT.into(),
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        icon: palette::PLACEHOLDER,
        placeholder: palette::PLACEHOLDER,
        value: palette::TEXT,
        selection: palette::ORANGE_600,
    }
}
