// SPDX-License-Identifier: MPL-2.0
//! Profile page: edit name, e-mail and optionally the password.

use super::ViewContext;
use crate::api::{ApiResult, ProfileUpdate};
use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::session::User;
use crate::ui::components::form;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::ToastDescriptor;
use iced::widget::{Column, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    CurrentPasswordChanged(String),
    PasswordChanged(String),
    ConfirmationChanged(String),
    Submit,
    Back,
    Finished(ApiResult<User>),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submit(ProfileUpdate),
    Navigate(Route),
    /// Store the user, show the toast, then return to the dashboard.
    Updated { user: User, toast: ToastDescriptor },
    Toast(ToastDescriptor),
}

impl State {
    /// Prefills the form with the signed-in user.
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                name: user.name.clone(),
                email: user.email.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::CurrentPasswordChanged(value) => {
                self.current_password = value;
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password = value;
                Event::None
            }
            Message::ConfirmationChanged(value) => {
                self.password_confirmation = value;
                Event::None
            }
            Message::Submit if self.submitting => Event::None,
            Message::Submit => {
                self.submitting = true;
                Event::Submit(ProfileUpdate::new(
                    self.name.trim(),
                    self.email.trim(),
                    &self.current_password,
                    &self.password,
                    &self.password_confirmation,
                ))
            }
            Message::Back => Event::Navigate(Route::Dashboard),
            Message::Finished(Ok(user)) => {
                *self = Self::for_user(Some(&user));
                Event::Updated {
                    user,
                    toast: ToastDescriptor::success(i18n.tr("toast-profile-success-title")),
                }
            }
            Message::Finished(Err(err)) => {
                self.submitting = false;
                tracing::debug!(error = %err, "profile update failed");
                Event::Toast(
                    ToastDescriptor::error(i18n.tr("toast-profile-error-title"))
                        .description(i18n.tr("toast-profile-error-description")),
                )
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let submit = (!state.submitting).then_some(Message::Submit);

    let content = Column::new()
        .push(form::title(i18n.tr("profile-title")))
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
        .push(Space::new().height(Length::Fixed(spacing::MD)))
        .push(form::secret_field(
            &i18n.tr("field-current-password"),
            &state.current_password,
            Message::CurrentPasswordChanged,
            Message::Submit,
        ))
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
        .push(form::submit_button(i18n.tr("profile-submit"), submit))
        .push(form::link("←".to_string(), Message::Back));

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

    fn john() -> User {
        User {
            id: "user-id".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            avatar_url: None,
        }
    }

    #[test]
    fn form_starts_with_user_data() {
        let state = State::for_user(Some(&john()));
        assert_eq!(state.name, "John Doe");
        assert_eq!(state.email, "john@example.com");
        assert!(state.current_password.is_empty());
    }

    #[test]
    fn submit_without_current_password_skips_password_change() {
        let mut state = State::for_user(Some(&john()));
        state.update(Message::PasswordChanged("123123".into()), &i18n());

        match state.update(Message::Submit, &i18n()) {
            Event::Submit(update) => {
                assert_eq!(update.name, "John Doe");
                assert!(!update.changes_password());
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn submit_with_current_password_changes_password() {
        let mut state = State::for_user(Some(&john()));
        state.update(Message::CurrentPasswordChanged("123456".into()), &i18n());
        state.update(Message::PasswordChanged("123123".into()), &i18n());
        state.update(Message::ConfirmationChanged("123123".into()), &i18n());

        assert!(matches!(
            state.update(Message::Submit, &i18n()),
            Event::Submit(update) if update.changes_password()
        ));
    }

    #[test]
    fn success_updates_user_with_success_toast() {
        let mut state = State::for_user(Some(&john()));
        state.update(Message::Submit, &i18n());

        let renamed = User {
            name: "John Tre".into(),
            ..john()
        };
        match state.update(Message::Finished(Ok(renamed.clone())), &i18n()) {
            Event::Updated { user, toast } => {
                assert_eq!(user, renamed);
                assert_eq!(toast.kind, Some(ToastKind::Success));
                assert_eq!(toast.title, "Perfil atualizado com sucesso!");
            }
            other => panic!("expected updated, got {other:?}"),
        }
        assert_eq!(state.name, "John Tre");
    }

    #[test]
    fn failure_shows_error_toast() {
        let mut state = State::for_user(Some(&john()));
        state.update(Message::Submit, &i18n());

        let event = state.update(
            Message::Finished(Err(ApiError::from_status(400, "Old password does not match."))),
            &i18n(),
        );
        match event {
            Event::Toast(toast) => {
                assert_eq!(toast.kind, Some(ToastKind::Error));
                assert_eq!(toast.title, "Erro na atualização");
            }
            other => panic!("expected toast, got {other:?}"),
        }
    }
}
