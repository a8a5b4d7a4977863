// SPDX-License-Identifier: MPL-2.0
//! Form building blocks: fields, submit button, links and page frame.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container};
use iced::{alignment, font, Element, Font, Length};

/// A single-line form field.
pub fn field<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(spacing::MD)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(styles::text_input::field)
        .into()
}

/// A password field. Characters are masked.
pub fn secret_field<'a, Message: Clone + 'a>(
    placeholder: &str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .secure(true)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(spacing::MD)
        .size(typography::BODY_LG)
        .width(Length::Fill)
        .style(styles::text_input::field)
        .into()
}

/// Full-width submit button. Disabled while `on_press` is `None`.
pub fn submit_button<'a, Message: Clone + 'a>(
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let label = Container::new(text(label).size(typography::BODY_LG).font(bold()))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(label)
        .on_press_maybe(on_press)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding(spacing::MD)
        .style(styles::button::primary)
        .into()
}

/// Text-only navigation link.
pub fn link<'a, Message: Clone + 'a>(label: String, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY_LG))
        .on_press(on_press)
        .padding(spacing::XS)
        .style(styles::button::link)
        .into()
}

/// Page heading.
pub fn title<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::TITLE_MD)
        .font(bold())
        .into()
}

/// Centers a form column on the page background.
pub fn page<'a, Message: 'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    let form = Container::new(content.spacing(spacing::XS).align_x(alignment::Horizontal::Center))
        .width(Length::Fixed(sizing::FORM_WIDTH));

    Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .style(styles::container::page)
        .into()
}

pub fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}
