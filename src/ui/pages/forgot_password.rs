// SPDX-License-Identifier: MPL-2.0
//! Password recovery request page.

use super::ViewContext;
use crate::api::ApiResult;
use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::ui::components::form;
use crate::ui::notifications::ToastDescriptor;
use iced::widget::Column;
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct State {
    pub email: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
    BackToSignIn,
    Finished(ApiResult<()>),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit { email: String },
    Navigate(Route),
    Toast(ToastDescriptor),
}

impl State {
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::EmailChanged(email) => {
                self.email = email;
                Event::None
            }
            Message::Submit if self.submitting => Event::None,
            Message::Submit => {
                self.submitting = true;
                Event::Submit {
                    email: self.email.trim().to_string(),
                }
            }
            Message::BackToSignIn => Event::Navigate(Route::SignIn),
            Message::Finished(result) => {
                self.submitting = false;
                let toast = match result {
                    Ok(()) => ToastDescriptor::success(i18n.tr("toast-forgot-success-title"))
                        .description(i18n.tr("toast-forgot-success-description")),
                    Err(err) => {
                        tracing::debug!(error = %err, "password recovery failed");
                        ToastDescriptor::error(i18n.tr("toast-forgot-error-title"))
                            .description(i18n.tr("toast-forgot-error-description"))
                    }
                };
                Event::Toast(toast)
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let submit = (!state.submitting).then_some(Message::Submit);

    let content = Column::new()
        .push(form::title(i18n.tr("forgot-title")))
        .push(form::field(
            &i18n.tr("field-email"),
            &state.email,
            Message::EmailChanged,
            Message::Submit,
        ))
        .push(form::submit_button(i18n.tr("forgot-submit"), submit))
        .push(form::link(i18n.tr("back-to-signin"), Message::BackToSignIn));

    form::page(content)
}
