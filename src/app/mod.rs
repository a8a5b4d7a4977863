// SPDX-License-Identifier: MPL-2.0
//! Application root state, orchestration, and persistence glue.
//!
//! The `App` owns every page, the session, the API client and the toast
//! overlay. It routes messages to the current page, turns page events into
//! API requests and navigation, and renders the active route with the toast
//! stack on top.
//!
//! # Startup
//!
//! 1. `settings.toml` is loaded (a malformed file becomes an info toast)
//! 2. The persisted session is restored from `storage.cbor`
//! 3. The first route is resolved from the location argument (default `/`) and passed
//!    through the route guard

pub mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ApiClient, ApiResult};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::session::{AuthState, FileStore};
use crate::ui::notifications::{ToastContainer, ToastContext, ToastDescriptor, ToastDuration};
use crate::ui::pages::{dashboard, forgot_password, profile, reset_password, sign_in, sign_up};
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1120;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    route: Route,
    auth: AuthState<FileStore>,
    api: ApiResult<ApiClient>,
    toasts: ToastContainer,
    pages: Pages,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("signed_in", &self.auth.is_signed_in())
            .finish()
    }
}

/// Form state of every page. Pages keep their input while hidden.
#[derive(Debug, Clone)]
pub struct Pages {
    pub sign_in: sign_in::State,
    pub sign_up: sign_up::State,
    pub forgot_password: forgot_password::State,
    pub reset_password: reset_password::State,
    pub dashboard: dashboard::State,
    pub profile: profile::State,
}

impl Pages {
    /// Creates fresh pages. `location` feeds the reset token, if any.
    pub fn new(location: &str) -> Self {
        Self {
            sign_in: sign_in::State::default(),
            sign_up: sign_up::State::default(),
            forgot_password: forgot_password::State::default(),
            reset_password: reset_password::State::from_location(location),
            dashboard: dashboard::State::new(chrono::Local::now().date_naive()),
            profile: profile::State::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and session, then opens the first route.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let (store, storage_warning) = FileStore::open();
        let auth = AuthState::restore(store);

        let api = ApiClient::new(config.api.base_url.clone()).map(|mut client| {
            client.set_token(auth.token().map(str::to_string));
            client
        });
        if let Err(err) = &api {
            tracing::error!(error = %err, "HTTP client unavailable; every request will fail");
        }

        let toast_ctx = ToastContext::new();
        for key in [config_warning, storage_warning].into_iter().flatten() {
            toast_ctx.add_toast(ToastDescriptor::info(i18n.tr(&key)));
        }
        let duration = ToastDuration::from(config.notifications.toast_duration_ms);
        let toasts = ToastContainer::new(toast_ctx, duration.as_duration());

        let location = flags.location.unwrap_or_else(|| Route::SignIn.path().to_string());
        let route = Route::from_path(&location).unwrap_or_else(|| {
            tracing::warn!(location = %location, "unknown location; opening sign in");
            Route::SignIn
        });

        let mut app = App {
            i18n,
            route: Route::SignIn,
            auth,
            api,
            toasts,
            pages: Pages::new(&location),
        };
        let task = update::navigate(&mut app.update_context(), route);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Current route after the guard ran.
    pub fn route(&self) -> Route {
        self.route
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.is_active())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_, FileStore> {
        update::UpdateContext {
            i18n: &self.i18n,
            route: &mut self.route,
            auth: &mut self.auth,
            api: &mut self.api,
            toasts: &mut self.toasts,
            pages: &mut self.pages,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::SignIn(page_message) => update::handle_sign_in_message(&mut ctx, page_message),
            Message::SignUp(page_message) => update::handle_sign_up_message(&mut ctx, page_message),
            Message::ForgotPassword(page_message) => {
                update::handle_forgot_password_message(&mut ctx, page_message)
            }
            Message::ResetPassword(page_message) => {
                update::handle_reset_password_message(&mut ctx, page_message)
            }
            Message::Dashboard(page_message) => {
                update::handle_dashboard_message(&mut ctx, page_message)
            }
            Message::Profile(page_message) => update::handle_profile_message(&mut ctx, page_message),
            Message::Toast(toast_message) => {
                ctx.toasts.handle_message(toast_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Timers remove expired toasts from the store; unmount them here.
                ctx.toasts.sync();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            user: self.auth.user(),
            pages: &self.pages,
            toasts: &self.toasts,
        })
    }
}
