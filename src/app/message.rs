// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::ToastOverlayMessage;
use crate::ui::pages::{dashboard, forgot_password, profile, reset_password, sign_in, sign_up};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// page messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(sign_in::Message),
    SignUp(sign_up::Message),
    ForgotPassword(forgot_password::Message),
    ResetPassword(reset_password::Message),
    Dashboard(dashboard::Message),
    Profile(profile::Message),
    Toast(ToastOverlayMessage),
    /// Periodic tick while toasts are on screen, to pick up expired timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional location to open first, such as a password reset link
    /// (`/reset-password?token=...`).
    pub location: Option<String>,
    /// Optional data directory override (persisted session).
    /// Takes precedence over `GOBARBER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GOBARBER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
