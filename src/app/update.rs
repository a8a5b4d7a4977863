// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each page reports what it needs through its `Event`; the handlers here
//! turn those events into API requests, session changes, navigation and
//! toasts.

use super::{Message, Pages};
use crate::api::{ApiClient, ApiResult};
use crate::i18n::fluent::I18n;
use crate::routes::{self, Route, RouteDecision};
use crate::session::{AuthState, KeyValueStore, SessionResponse};
use crate::ui::notifications::{ToastContainer, ToastDescriptor};
use crate::ui::pages::{dashboard, forgot_password, profile, reset_password, sign_in, sign_up};
use chrono::NaiveDate;
use iced::Task;
use std::future::Future;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a, K: KeyValueStore> {
    pub i18n: &'a I18n,
    pub route: &'a mut Route,
    pub auth: &'a mut AuthState<K>,
    pub api: &'a mut ApiResult<ApiClient>,
    pub toasts: &'a mut ToastContainer,
    pub pages: &'a mut Pages,
}

/// Shows a toast right away.
pub fn push_toast<K: KeyValueStore>(ctx: &mut UpdateContext<'_, K>, toast: ToastDescriptor) {
    ctx.toasts.context().add_toast(toast);
    ctx.toasts.sync();
}

/// Moves to `route`, honoring the route guard, and prepares the target page.
pub fn navigate<K: KeyValueStore>(ctx: &mut UpdateContext<'_, K>, route: Route) -> Task<Message> {
    let decision = routes::guard(route, ctx.auth.is_signed_in());
    if let RouteDecision::Redirect { to, from } = decision {
        tracing::info!(%from, %to, "route guard redirect");
    }

    let target = decision.target();
    *ctx.route = target;
    tracing::info!(route = %target, "navigate");

    match target {
        Route::Dashboard => {
            let today = chrono::Local::now().date_naive();
            ctx.pages.dashboard = dashboard::State::new(today);
            load_appointments(ctx, today)
        }
        Route::Profile => {
            ctx.pages.profile = profile::State::for_user(ctx.auth.user());
            Task::none()
        }
        Route::SignIn | Route::SignUp | Route::ForgotPassword | Route::ResetPassword => Task::none(),
    }
}

/// Runs `call` against the API client and feeds its result back as a message.
fn request<K, T, Fut>(
    ctx: &UpdateContext<'_, K>,
    call: impl FnOnce(ApiClient) -> Fut,
    on_result: impl FnOnce(ApiResult<T>) -> Message + Send + 'static,
) -> Task<Message>
where
    K: KeyValueStore,
    T: Send + 'static,
    Fut: Future<Output = ApiResult<T>> + Send + 'static,
{
    match ctx.api.as_ref() {
        Ok(api) => Task::perform(call(api.clone()), on_result),
        Err(err) => Task::done(on_result(Err(err.clone()))),
    }
}

fn load_appointments<K: KeyValueStore>(
    ctx: &UpdateContext<'_, K>,
    day: NaiveDate,
) -> Task<Message> {
    request(
        ctx,
        move |api| async move { api.appointments_for_day(day).await },
        move |result| Message::Dashboard(dashboard::Message::Loaded { day, result }),
    )
}

fn set_api_token<K: KeyValueStore>(ctx: &mut UpdateContext<'_, K>) {
    let token = ctx.auth.token().map(str::to_string);
    if let Ok(api) = ctx.api.as_mut() {
        api.set_token(token);
    }
}

fn start_session<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    session: SessionResponse,
) -> Task<Message> {
    if let Err(err) = ctx.auth.establish(session) {
        tracing::warn!(error = %err, "session will not survive a restart");
        let toast = ToastDescriptor::info(ctx.i18n.tr("notification-session-save-error"));
        push_toast(ctx, toast);
    }
    set_api_token(ctx);
    navigate(ctx, Route::Dashboard)
}

fn end_session<K: KeyValueStore>(ctx: &mut UpdateContext<'_, K>) -> Task<Message> {
    if let Err(err) = ctx.auth.sign_out() {
        tracing::warn!(error = %err, "failed to clear stored session");
    }
    set_api_token(ctx);
    navigate(ctx, Route::SignIn)
}

pub fn handle_sign_in_message<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    message: sign_in::Message,
) -> Task<Message> {
    match ctx.pages.sign_in.update(message, ctx.i18n) {
        sign_in::Event::None => Task::none(),
        sign_in::Event::Submit { email, password } => request(
            ctx,
            move |api| async move { api.create_session(email, password).await },
            |result| Message::SignIn(sign_in::Message::Finished(result)),
        ),
        sign_in::Event::Navigate(route) => navigate(ctx, route),
        sign_in::Event::SignedIn(session) => start_session(ctx, session),
        sign_in::Event::Toast(toast) => {
            push_toast(ctx, toast);
            Task::none()
        }
    }
}

pub fn handle_sign_up_message<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    message: sign_up::Message,
) -> Task<Message> {
    match ctx.pages.sign_up.update(message, ctx.i18n) {
        sign_up::Event::None => Task::none(),
        sign_up::Event::Submit {
            name,
            email,
            password,
        } => request(
            ctx,
            move |api| async move { api.create_user(name, email, password).await },
            |result| Message::SignUp(sign_up::Message::Finished(result)),
        ),
        sign_up::Event::Navigate(route) => navigate(ctx, route),
        sign_up::Event::Registered(toast) => {
            push_toast(ctx, toast);
            navigate(ctx, Route::SignIn)
        }
        sign_up::Event::Toast(toast) => {
            push_toast(ctx, toast);
            Task::none()
        }
    }
}

pub fn handle_forgot_password_message<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    message: forgot_password::Message,
) -> Task<Message> {
    match ctx.pages.forgot_password.update(message, ctx.i18n) {
        forgot_password::Event::None => Task::none(),
        forgot_password::Event::Submit { email } => request(
            ctx,
            move |api| async move { api.forgot_password(email).await },
            |result| Message::ForgotPassword(forgot_password::Message::Finished(result)),
        ),
        forgot_password::Event::Navigate(route) => navigate(ctx, route),
        forgot_password::Event::Toast(toast) => {
            push_toast(ctx, toast);
            Task::none()
        }
    }
}

pub fn handle_reset_password_message<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    message: reset_password::Message,
) -> Task<Message> {
    match ctx.pages.reset_password.update(message, ctx.i18n) {
        reset_password::Event::None => Task::none(),
        reset_password::Event::Submit {
            token,
            password,
            password_confirmation,
        } => request(
            ctx,
            move |api| async move {
                api.reset_password(token, password, password_confirmation)
                    .await
            },
            |result| Message::ResetPassword(reset_password::Message::Finished(result)),
        ),
        reset_password::Event::Navigate(route) => navigate(ctx, route),
        reset_password::Event::Toast(toast) => {
            push_toast(ctx, toast);
            Task::none()
        }
    }
}

pub fn handle_dashboard_message<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    message: dashboard::Message,
) -> Task<Message> {
    match ctx.pages.dashboard.update(message, ctx.i18n) {
        dashboard::Event::None => Task::none(),
        dashboard::Event::Load(day) => load_appointments(ctx, day),
        dashboard::Event::Navigate(route) => navigate(ctx, route),
        dashboard::Event::SignOut => end_session(ctx),
        dashboard::Event::SessionExpired(toast) => {
            push_toast(ctx, toast);
            end_session(ctx)
        }
        dashboard::Event::Toast(toast) => {
            push_toast(ctx, toast);
            Task::none()
        }
    }
}

pub fn handle_profile_message<K: KeyValueStore>(
    ctx: &mut UpdateContext<'_, K>,
    message: profile::Message,
) -> Task<Message> {
    match ctx.pages.profile.update(message, ctx.i18n) {
        profile::Event::None => Task::none(),
        profile::Event::Submit(update) => request(
            ctx,
            move |api| async move { api.update_profile(update).await },
            |result| Message::Profile(profile::Message::Finished(result)),
        ),
        profile::Event::Navigate(route) => navigate(ctx, route),
        profile::Event::Updated { user, toast } => {
            if let Err(err) = ctx.auth.update_user(user) {
                tracing::warn!(error = %err, "failed to persist updated user");
            }
            push_toast(ctx, toast);
            navigate(ctx, Route::Dashboard)
        }
        profile::Event::Toast(toast) => {
            push_toast(ctx, toast);
            Task::none()
        }
    }
}
