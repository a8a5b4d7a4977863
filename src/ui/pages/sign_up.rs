// SPDX-License-Identifier: MPL-2.0
//! Account registration page.

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
    pub name: String,
    pub email: String,
    pub password: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    BackToSignIn,
    Finished(ApiResult<()>),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit {
        name: String,
        email: String,
        password: String,
    },
    Navigate(Route),
    /// Account created: show the toast, then go to sign in.
    Registered(ToastDescriptor),
    Toast(ToastDescriptor),
}

impl State {
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                Event::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                Event::None
            }
            Message::PasswordChanged(password) => {
                self.password = password;
                Event::None
            }
            Message::Submit if self.submitting => Event::None,
            Message::Submit => {
                self.submitting = true;
                Event::Submit {
                    name: self.name.trim().to_string(),
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                }
            }
            Message::BackToSignIn => Event::Navigate(Route::SignIn),
            Message::Finished(Ok(())) => {
                *self = Self::default();
                Event::Registered(
                    ToastDescriptor::success(i18n.tr("toast-signup-success-title"))
                        .description(i18n.tr("toast-signup-success-description")),
                )
            }
            Message::Finished(Err(err)) => {
                self.submitting = false;
                tracing::debug!(error = %err, "sign up failed");
                Event::Toast(
                    ToastDescriptor::error(i18n.tr("toast-signup-error-title"))
                        .description(i18n.tr("toast-signup-error-description")),
                )
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let submit = (!state.submitting).then_some(Message::Submit);

    let content = Column::new()
        .push(form::title(i18n.tr("signup-title")))
        .push(form::field(
            &i18n.tr("field-name"),
            &state.name,
            Message::NameChanged,
            Message::Submit,
        ))
        .push(form::field(
            &i18n.tr("field-email"),
            &state.email,
            Message::EmailChanged,
            Message::Submit,
        ))
        .push(form::secret_field(
            &i18n.tr("field-password"),
            &state.password,
            Message::PasswordChanged,
            Message::Submit,
        ))
        .push(form::submit_button(i18n.tr("signup-submit"), submit))
        .push(form::link(i18n.tr("back-to-signin"), Message::BackToSignIn));

    form::page(content)
}
