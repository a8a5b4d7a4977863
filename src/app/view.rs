// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the page of the current route and stacks the toast overlay on top
//! of it.

use super::{Message, Pages};
use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::session::User;
use crate::ui::notifications::ToastContainer;
use crate::ui::pages::{
    self, dashboard, forgot_password, profile, reset_password, sign_in, sign_up,
};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub user: Option<&'a User>,
    pub pages: &'a Pages,
    pub toasts: &'a ToastContainer,
}

/// Renders the current application view based on the active route.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form_ctx = || pages::ViewContext { i18n: ctx.i18n };

    let page: Element<'_, Message> = match ctx.route {
        Route::SignIn => sign_in::view(form_ctx(), &ctx.pages.sign_in).map(Message::SignIn),
        Route::SignUp => sign_up::view(form_ctx(), &ctx.pages.sign_up).map(Message::SignUp),
        Route::ForgotPassword => forgot_password::view(form_ctx(), &ctx.pages.forgot_password)
            .map(Message::ForgotPassword),
        Route::ResetPassword => reset_password::view(form_ctx(), &ctx.pages.reset_password)
            .map(Message::ResetPassword),
        Route::Dashboard => dashboard::view(
            dashboard::ViewContext {
                i18n: ctx.i18n,
                user: ctx.user,
                now: chrono::Local::now(),
            },
            &ctx.pages.dashboard,
        )
        .map(Message::Dashboard),
        Route::Profile => profile::view(form_ctx(), &ctx.pages.profile).map(Message::Profile),
    };

    let overlay = ctx.toasts.view().map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay)
        .into()
}
