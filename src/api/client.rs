// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the GoBarber API.

use super::models::{
    Appointment, CreateUserRequest, ErrorBody, ForgotPasswordRequest, ProfileResponse,
    ProfileUpdate, ResetPasswordRequest, SessionRequest,
};
use crate::error::ApiError;
use crate::session::{SessionResponse, User};
use chrono::{Datelike, NaiveDate};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("GoBarber/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the bearer token sent with every request, or clears it.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /sessions`
    pub async fn create_session(&self, email: String, password: String) -> ApiResult<SessionResponse> {
        let request = self
            .http
            .post(self.url("/sessions"))
            .json(&SessionRequest { email, password });
        self.send_json(request).await
    }

    /// `POST /users`
    pub async fn create_user(&self, name: String, email: String, password: String) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url("/users"))
            .json(&CreateUserRequest {
                name,
                email,
                password,
            });
        self.send(request).await.map(drop)
    }

    /// `POST /password/forgot`
    pub async fn forgot_password(&self, email: String) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url("/password/forgot"))
            .json(&ForgotPasswordRequest { email });
        self.send(request).await.map(drop)
    }

    /// `POST /password/reset`
    pub async fn reset_password(
        &self,
        token: String,
        password: String,
        password_confirmation: String,
    ) -> ApiResult<()> {
        let request = self
            .http
            .post(self.url("/password/reset"))
            .json(&ResetPasswordRequest {
                token,
                password,
                password_confirmation,
            });
        self.send(request).await.map(drop)
    }

    /// `PUT /profile`, returning the updated user.
    pub async fn update_profile(&self, update: ProfileUpdate) -> ApiResult<User> {
        let request = self.http.put(self.url("/profile")).json(&update);
        self.send_json::<ProfileResponse>(request)
            .await
            .map(ProfileResponse::into_user)
    }

    /// `GET /appointments/me` for one day of the signed-in provider.
    pub async fn appointments_for_day(&self, date: NaiveDate) -> ApiResult<Vec<Appointment>> {
        let request = self
            .http
            .get(self.url("/appointments/me"))
            .query(&day_query(date));
        self.send_json(request).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = error_from_body(status.as_u16(), &body);
        tracing::debug!(status = status.as_u16(), error = %error, "API request rejected");
        Err(error)
    }
}

/// Query parameters selecting a single day.
pub fn day_query(date: NaiveDate) -> [(&'static str, String); 3] {
    [
        ("year", date.year().to_string()),
        ("month", date.month().to_string()),
        ("day", date.day().to_string()),
    ]
}

/// Builds the error for a rejected request, keeping the server's message
/// when the body carries one.
pub fn error_from_body(code: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.message)
        .unwrap_or_default();
    ApiError::from_status(code, message)
}
