// SPDX-License-Identifier: MPL-2.0
//! Request and response bodies of the GoBarber API.

use crate::session::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SessionRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Body of `PUT /profile`.
///
/// The password fields are sent only together, and only when the user typed
/// their current password.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    password_change: Option<PasswordChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PasswordChange {
    current_password: String,
    password: String,
    password_confirmation: String,
}

impl ProfileUpdate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        current_password: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Self {
        let password_change = (!current_password.is_empty()).then(|| PasswordChange {
            current_password: current_password.to_string(),
            password: password.to_string(),
            password_confirmation: password_confirmation.to_string(),
        });
        Self {
            name: name.into(),
            email: email.into(),
            password_change,
        }
    }

    pub fn changes_password(&self) -> bool {
        self.password_change.is_some()
    }
}

/// `PUT /profile` answers with either the user or `{ "user": ... }`
/// depending on the server version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProfileResponse {
    Wrapped { user: User },
    Bare(User),
}

impl ProfileResponse {
    pub(crate) fn into_user(self) -> User {
        match self {
            ProfileResponse::Wrapped { user } | ProfileResponse::Bare(user) => user,
        }
    }
}

/// Customer shown on a provider's appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentCustomer {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: AppointmentCustomer,
}

/// Error body sent by the API alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_update_omits_password_fields_without_current_password() {
        let update = ProfileUpdate::new("John Doe", "john@example.com", "", "123456", "123456");
        assert!(!update.changes_password());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "name": "John Doe", "email": "john@example.com" })
        );
    }

    #[test]
    fn profile_update_sends_password_fields_with_current_password() {
        let update = ProfileUpdate::new("John Doe", "john@example.com", "old", "new123", "new123");
        assert!(update.changes_password());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "current_password": "old",
                "password": "new123",
                "password_confirmation": "new123",
            })
        );
    }

    #[test]
    fn profile_response_accepts_both_shapes() {
        let user = json!({ "id": "1", "name": "John", "email": "j@x.com", "avatar_url": null });

        let wrapped: ProfileResponse =
            serde_json::from_value(json!({ "user": user.clone() })).unwrap();
        let bare: ProfileResponse = serde_json::from_value(user).unwrap();

        assert_eq!(wrapped.into_user().id, "1");
        assert_eq!(bare.into_user().name, "John");
    }

    #[test]
    fn appointment_parses_api_payload() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": "1",
            "date": "2020-10-26T13:00:00.000Z",
            "user": { "name": "Paolla Oliveira", "avatar_url": "foto" },
        }))
        .unwrap();

        assert_eq!(appointment.user.name, "Paolla Oliveira");
        assert_eq!(appointment.date.to_rfc3339(), "2020-10-26T13:00:00+00:00");
    }
}
