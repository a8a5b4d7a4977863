// SPDX-License-Identifier: MPL-2.0
//! Toast container widget.
//!
//! The container keeps one [`ToastPresenter`] per live toast, in store order,
//! and renders them as a stack of cards in the top-right corner. Presenters
//! whose toast left the store are dropped on the next [`ToastContainer::sync`],
//! which cancels their timers.

use super::notification::{ToastId, ToastVariant};
use super::presenter::ToastPresenter;
use super::store::ToastContext;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, font, Background, Border, Element, Font, Length, Shadow, Theme};
use std::time::Duration;

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The dismiss control of a toast was activated.
    Dismiss(ToastId),
}

/// Owns the presenters for every live toast.
#[derive(Debug)]
pub struct ToastContainer {
    ctx: ToastContext,
    duration: Duration,
    presenters: Vec<ToastPresenter<ToastContext>>,
}

impl ToastContainer {
    /// Creates an empty container bound to `ctx`.
    pub fn new(ctx: ToastContext, duration: Duration) -> Self {
        Self {
            ctx,
            duration,
            presenters: Vec::new(),
        }
    }

    /// Returns the context this container renders.
    #[must_use]
    pub fn context(&self) -> &ToastContext {
        &self.ctx
    }

    /// Returns the auto-dismiss duration given to new presenters.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Reconciles presenters with the store.
    ///
    /// New toasts get a freshly mounted presenter, removed toasts lose theirs.
    /// Must be called from within a Tokio runtime.
    pub fn sync(&mut self) {
        let mut existing = std::mem::take(&mut self.presenters);
        for message in self.ctx.messages() {
            let presenter = match existing.iter().position(|p| p.id() == message.id()) {
                Some(pos) => existing.swap_remove(pos),
                None => ToastPresenter::mount(message, self.ctx.clone(), self.duration),
            };
            self.presenters.push(presenter);
        }
        // Whatever is left in `existing` is unmounted here.
    }

    /// Handles a toast overlay message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(&id),
        }
    }

    /// Dismisses a toast through its presenter, cancelling the timer.
    pub fn dismiss(&mut self, id: &ToastId) {
        if let Some(presenter) = self.presenters.iter_mut().find(|p| p.id() == id) {
            presenter.dismiss();
        } else {
            self.ctx.remove_toast(id);
        }
        self.sync();
    }

    /// Returns the mounted presenters in display order.
    pub fn presenters(&self) -> impl Iterator<Item = &ToastPresenter<ToastContext>> {
        self.presenters.iter()
    }

    /// Returns whether any toast is live or still mounted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.presenters.is_empty() || !self.ctx.is_empty()
    }

    /// Renders the overlay with every mounted toast.
    pub fn view(&self) -> Element<'_, Message> {
        if self.presenters.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let cards = Column::with_children(self.presenters.iter().map(view_toast))
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(cards)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::LG)
            .into()
    }
}

/// Tearing down the overlay cancels every timer and discards the toasts.
impl Drop for ToastContainer {
    fn drop(&mut self) {
        self.presenters.clear();
        self.ctx.clear();
    }
}

/// Renders a single toast card.
fn view_toast(presenter: &ToastPresenter<ToastContext>) -> Element<'_, Message> {
    let message = presenter.message();
    let variant = presenter.variant();

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill).push(
        text(message.title())
            .size(typography::BODY_LG)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }),
    );
    if let Some(description) = message.description() {
        body = body.push(text(description).size(typography::BODY_SM));
    }

    let dismiss = button(text("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(message.id().clone()))
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| dismiss_button_style(theme, status, variant));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Top)
        .push(body)
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(move |theme: &Theme| toast_container_style(theme, variant))
        .into()
}

/// Style function for a toast card.
fn toast_container_style(_theme: &Theme, variant: ToastVariant) -> container::Style {
    container::Style {
        background: Some(Background::Color(variant.background)),
        text_color: Some(variant.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Style function for the dismiss control. Inherits the card's text color.
fn dismiss_button_style(
    _theme: &Theme,
    status: button::Status,
    variant: ToastVariant,
) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => iced::Color {
            a: 0.7,
            ..variant.text
        },
        button::Status::Active | button::Status::Disabled => variant.text,
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
    use crate::ui::notifications::{ToastDescriptor, ToastKind};

    const DURATION: Duration = Duration::from_millis(3000);

    #[tokio::test(start_paused = true)]
    async fn sync_mounts_one_presenter_per_message() {
        let ctx = ToastContext::new();
        ctx.add_toast(ToastDescriptor::error("Error Title").description("Error description"));
        ctx.add_toast(ToastDescriptor::error("Error Title").description("Error description 2"));

        let mut container = ToastContainer::new(ctx, DURATION);
        container.sync();

        let titles: Vec<&str> = container.presenters().map(|p| p.message().title()).collect();
        assert_eq!(titles, vec!["Error Title", "Error Title"]);
    }

    #[tokio::test(start_paused = true)]
    async fn sync_preserves_store_order() {
        let ctx = ToastContext::new();
        let first = ctx.add_toast(ToastDescriptor::new("first"));
        let mut container = ToastContainer::new(ctx.clone(), DURATION);
        container.sync();
        let second = ctx.add_toast(ToastDescriptor::new("second"));
        container.sync();
        container.sync();

        let ids: Vec<&ToastId> = container.presenters().map(ToastPresenter::id).collect();
        assert_eq!(ids, vec![&first, &second]);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_message_removes_from_store() {
        let ctx = ToastContext::new();
        let id = ctx.add_toast(ToastDescriptor::new("bye"));
        let mut container = ToastContainer::new(ctx.clone(), DURATION);
        container.sync();

        container.handle_message(Message::Dismiss(id));

        assert!(ctx.is_empty());
        assert_eq!(container.presenters().count(), 0);
        assert!(!container.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn expired_toasts_leave_the_overlay() {
        let ctx = ToastContext::new();
        ctx.add_toast(ToastDescriptor::info("Info Title"));
        let mut container = ToastContainer::new(ctx.clone(), DURATION);
        container.sync();

        tokio::time::sleep(DURATION + Duration::from_millis(1)).await;
        container.sync();

        assert!(ctx.is_empty());
        assert_eq!(container.presenters().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn externally_removed_toast_is_unmounted_without_firing() {
        let ctx = ToastContext::new();
        let gone = ctx.add_toast(ToastDescriptor::new("gone"));
        let mut container = ToastContainer::new(ctx.clone(), DURATION);
        container.sync();

        ctx.remove_toast(&gone);
        container.sync();
        assert_eq!(container.presenters().count(), 0);

        let later = ctx.add_toast(ToastDescriptor::new("later"));
        container.sync();
        tokio::time::sleep(DURATION / 2).await;

        assert!(ctx.contains(&later));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_container_discards_pending_toasts() {
        let ctx = ToastContext::new();
        ctx.add_toast(ToastDescriptor::info("pending"));
        let mut container = ToastContainer::new(ctx.clone(), DURATION);
        container.sync();

        drop(container);

        assert!(ctx.is_empty());
    }

    #[test]
    fn toast_container_style_uses_variant_colors() {
        let variant = ToastVariant::for_kind(ToastKind::Success);
        let style = toast_container_style(&Theme::Dark, variant);

        assert_eq!(style.background, Some(Background::Color(variant.background)));
        assert_eq!(style.text_color, Some(variant.text));
    }

    #[test]
    fn dismiss_button_uses_variant_text_color() {
        let variant = ToastVariant::for_kind(ToastKind::Error);
        let style = dismiss_button_style(&Theme::Dark, button::Status::Active, variant);

        assert_eq!(style.text_color, variant.text);
        assert!(style.background.is_none());
    }
}
