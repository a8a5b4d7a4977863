// SPDX-License-Identifier: MPL-2.0
//! Sign-in page.

use super::ViewContext;
use crate::api::ApiResult;
use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::session::SessionResponse;
use crate::ui::components::form;
use crate::ui::notifications::ToastDescriptor;
use iced::widget::Column;
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct State {
    pub email: String,
    pub password: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Navigate(Route),
    Finished(ApiResult<SessionResponse>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit { email: String, password: String },
    Navigate(Route),
    SignedIn(SessionResponse),
    Toast(ToastDescriptor),
}

impl State {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
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
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                }
            }
            Message::Navigate(route) => Event::Navigate(route),
            Message::Finished(result) => {
                self.submitting = false;
                match result {
                    Ok(session) => {
                        self.password.clear();
                        Event::SignedIn(session)
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, "sign in failed");
                        Event::Toast(
                            ToastDescriptor::error(i18n.tr("toast-signin-error-title"))
                                .description(i18n.tr("toast-signin-error-description")),
                        )
                    }
                }
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let submit = (!state.submitting).then_some(Message::Submit);

    let content = Column::new()
        .push(form::title(i18n.tr("signin-title")))
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
        .push(form::submit_button(i18n.tr("signin-submit"), submit))
        .push(form::link(
            i18n.tr("signin-forgot-link"),
            Message::Navigate(Route::ForgotPassword),
        ))
        .push(form::link(
            i18n.tr("signin-signup-link"),
            Message::Navigate(Route::SignUp),
        ));

    form::page(content)
}
