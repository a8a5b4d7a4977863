// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Orange call-to-action button used to submit forms.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ORANGE_600,
        button::Status::Disabled => Color {
            a: 0.5,
            ..palette::ORANGE_500
        },
        button::Status::Active => palette::ORANGE_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BACKGROUND,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Borderless text button for navigation links.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ORANGE_500,
        button::Status::Disabled => palette::TEXT_MUTED,
        button::Status::Active => palette::TEXT,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Link variant rendered in the brand color (user name, "create account").
pub fn accent_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ORANGE_600,
        _ => palette::ORANGE_500,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_darkens_on_hover() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let hovered = primary(&Theme::Dark, button::Status::Hovered);
        assert_eq!(active.background, Some(Background::Color(palette::ORANGE_500)));
        assert_eq!(hovered.background, Some(Background::Color(palette::ORANGE_600)));
    }

    #[test]
    fn links_have_no_background() {
        assert!(link(&Theme::Dark, button::Status::Active).background.is_none());
        assert_eq!(
            accent_link(&Theme::Dark, button::Status::Active).text_color,
            palette::ORANGE_500
        );
    }
}
