// SPDX-License-Identifier: MPL-2.0
//! Client for the GoBarber REST API.
//!
//! Every call returns [`ApiError`](crate::error::ApiError) on failure; the
//! pages turn those into error toasts. Requests carry the session's bearer
//! token once one is set with [`ApiClient::set_token`].

mod client;
mod models;

pub use client::{day_query, error_from_body, ApiClient, ApiResult};
pub use models::{
    Appointment, AppointmentCustomer, CreateUserRequest, ForgotPasswordRequest, ProfileUpdate,
    ResetPasswordRequest, SessionRequest,
};
