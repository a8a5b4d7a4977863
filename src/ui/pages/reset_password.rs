// SPDX-License-Identifier: MPL-2.0
//! Password reset page, reached from the link in the recovery e-mail.

use super::ViewContext;
use crate::api::ApiResult;
use crate::i18n::fluent::I18n;
use crate::routes::{self, Route};
use crate::ui::components::form;
use crate::ui::notifications::ToastDescriptor;
use iced::widget::Column;
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct State {
    pub password: String,
    pub password_confirmation: String,
    token: Option<String>,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PasswordChanged(String),
    ConfirmationChanged(String),
    Submit,
    BackToSignIn,
    Finished(ApiResult<()>),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit {
        token: String,
        password: String,
        password_confirmation: String,
    },
    Navigate(Route),
    Toast(ToastDescriptor),
}

impl State {
    /// Creates the page for a reset link location such as
    /// `/reset-password?token=abc`.
    pub fn from_location(location: &str) -> Self {
        Self {
            token: routes::reset_token_from_query(location),
            ..Self::default()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::PasswordChanged(password) => {
                self.password = password;
                Event::None
            }
            Message::ConfirmationChanged(confirmation) => {
                self.password_confirmation = confirmation;
                Event::None
            }
            Message::Submit if self.submitting => Event::None,
            Message::Submit => match &self.token {
                Some(token) => {
                    self.submitting = true;
                    Event::Submit {
                        token: token.clone(),
                        password: self.password.clone(),
                        password_confirmation: self.password_confirmation.clone(),
                    }
                }
                None => Event::Toast(
                    ToastDescriptor::error(i18n.tr("toast-reset-error-title"))
                        .description(i18n.tr("toast-reset-missing-token-description")),
                ),
            },
            Message::BackToSignIn => Event::Navigate(Route::SignIn),
            Message::Finished(Ok(())) => {
                *self = Self::default();
                Event::Navigate(Route::SignIn)
            }
            Message::Finished(Err(err)) => {
                self.submitting = false;
                tracing::debug!(error = %err, "password reset failed");
                Event::Toast(
                    ToastDescriptor::error(i18n.tr("toast-reset-error-title"))
                        .description(i18n.tr("toast-reset-error-description")),
                )
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let submit = (!state.submitting).then_some(Message::Submit);

    let content = Column::new()
        .push(form::title(i18n.tr("reset-title")))
        .push(form::secret_field(
            &i18n.tr("field-new-password"),
            &state.password,
            Message::PasswordChanged,
            Message::Submit,
        ))
        .push(form::secret_field(
            &i18n.tr("field-password-confirmation"),
            &state.password_confirmation,
            Message::ConfirmationChanged,
            Message::Submit,
        ))
        .push(form::submit_button(i18n.tr("reset-submit"), submit))
        .push(form::link(i18n.tr("back-to-signin"), Message::BackToSignIn));

    form::page(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ApiError;
    use crate::ui::notifications::ToastKind;

    fn i18n() -> I18n {
        I18n::new(Some("pt-BR".to_string()), &Config::default())
    }

    fn filled(location: &str) -> State {
        let mut state = State::from_location(location);
        state.update(Message::PasswordChanged("654321".into()), &i18n());
        state.update(Message::ConfirmationChanged("654321".into()), &i18n());
        state
    }

    #[test]
    fn token_comes_from_location() {
        assert_eq!(
            State::from_location("/reset-password?token=valid-token").token(),
            Some("valid-token")
        );
        assert_eq!(State::from_location("/reset-password").token(), None);
    }

    #[test]
    fn submit_includes_token_and_passwords() {
        let mut state = filled("?token=valid-token");
        match state.update(Message::Submit, &i18n()) {
            Event::Submit {
                token,
                password,
                password_confirmation,
            } => {
                assert_eq!(token, "valid-token");
                assert_eq!(password, "654321");
                assert_eq!(password_confirmation, "654321");
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn missing_token_shows_error_without_request() {
        let mut state = filled("");
        match state.update(Message::Submit, &i18n()) {
            Event::Toast(toast) => assert_eq!(toast.kind, Some(ToastKind::Error)),
            other => panic!("expected toast, got {other:?}"),
        }
    }

    #[test]
    fn success_navigates_to_sign_in() {
        let mut state = filled("?token=valid-token");
        state.update(Message::Submit, &i18n());
        assert!(matches!(
            state.update(Message::Finished(Ok(())), &i18n()),
            Event::Navigate(Route::SignIn)
        ));
    }

    #[test]
    fn failure_shows_error_toast() {
        let mut state = filled("?token=expired");
        state.update(Message::Submit, &i18n());
        let event = state.update(
            Message::Finished(Err(ApiError::from_status(400, "Token expired."))),
            &i18n(),
        );
        assert!(matches!(event, Event::Toast(t) if t.kind == Some(ToastKind::Error)));
    }
}
