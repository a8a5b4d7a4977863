// SPDX-License-Identifier: MPL-2.0
//! Provider dashboard: the appointments of one selected day.

use crate::api::{Appointment, ApiResult};
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::routes::Route;
use crate::session::User;
use crate::ui::components::form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::ToastDescriptor;
use crate::ui::styles;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike};
use iced::widget::{button, scrollable, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Appointments starting before this hour belong to the morning.
const AFTERNOON_STARTS_AT: u32 = 12;

#[derive(Debug, Clone)]
pub struct State {
    selected_day: NaiveDate,
    appointments: Vec<Appointment>,
    loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    PreviousDay,
    NextDay,
    Today(NaiveDate),
    OpenProfile,
    SignOut,
    Loaded {
        day: NaiveDate,
        result: ApiResult<Vec<Appointment>>,
    },
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Fetch the appointments of this day.
    Load(NaiveDate),
    Navigate(Route),
    SignOut,
    /// The API no longer accepts the token: sign out and explain why.
    SessionExpired(ToastDescriptor),
    Toast(ToastDescriptor),
}

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub user: Option<&'a User>,
    pub now: DateTime<Local>,
}

impl State {
    /// Creates the dashboard showing `today`. The caller issues the first load.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_day: today,
            appointments: Vec::new(),
            loading: true,
        }
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn update(&mut self, message: Message, i18n: &I18n) -> Event {
        match message {
            Message::PreviousDay => match self.selected_day.pred_opt() {
                Some(day) => self.select(day),
                None => Event::None,
            },
            Message::NextDay => match self.selected_day.succ_opt() {
                Some(day) => self.select(day),
                None => Event::None,
            },
            Message::Today(today) => self.select(today),
            Message::OpenProfile => Event::Navigate(Route::Profile),
            Message::SignOut => Event::SignOut,
            Message::Loaded { day, .. } if day != self.selected_day => {
                tracing::debug!(%day, "ignoring appointments of a day no longer selected");
                Event::None
            }
            Message::Loaded { result, .. } => {
                self.loading = false;
                match result {
                    Ok(mut appointments) => {
                        appointments.sort_by_key(|appointment| appointment.date);
                        self.appointments = appointments;
                        Event::None
                    }
                    Err(err) => {
                        let toast = ToastDescriptor::error(i18n.tr("toast-appointments-error-title"))
                            .description(i18n.tr(err.i18n_key()));
                        if err == ApiError::Unauthorized {
                            Event::SessionExpired(toast)
                        } else {
                            Event::Toast(toast)
                        }
                    }
                }
            }
        }
    }

    fn select(&mut self, day: NaiveDate) -> Event {
        self.selected_day = day;
        self.appointments.clear();
        self.loading = true;
        Event::Load(day)
    }
}

/// Appointments of a day split by period, in chronological order.
#[derive(Debug, Default)]
pub struct Schedule<'a> {
    pub morning: Vec<&'a Appointment>,
    pub afternoon: Vec<&'a Appointment>,
    /// First appointment still ahead, only when the selected day is today.
    pub next: Option<&'a Appointment>,
}

impl<'a> Schedule<'a> {
    /// Periods are decided on the wall clock of `now`'s time zone.
    pub fn build<Tz: TimeZone>(
        appointments: &'a [Appointment],
        selected_day: NaiveDate,
        now: &DateTime<Tz>,
    ) -> Self {
        let tz = now.timezone();
        let mut sorted: Vec<&Appointment> = appointments.iter().collect();
        sorted.sort_by_key(|appointment| appointment.date);

        let (morning, afternoon): (Vec<_>, Vec<_>) = sorted
            .iter()
            .copied()
            .partition(|appointment| appointment.date.with_timezone(&tz).hour() < AFTERNOON_STARTS_AT);

        let next = if selected_day == now.date_naive() {
            sorted.iter().copied().find(|appointment| appointment.date > *now)
        } else {
            None
        };

        Self {
            morning,
            afternoon,
            next,
        }
    }
}

/// "Dia 26 de outubro" in the current locale.
pub fn day_heading(i18n: &I18n, day: NaiveDate) -> String {
    let month = i18n.tr(&format!("month-{}", day.month()));
    i18n.tr_with_args(
        "dashboard-day-heading",
        &[("day", &day.day().to_string()), ("month", &month)],
    )
}

fn local_time<Tz: TimeZone>(appointment: &Appointment, tz: &Tz) -> String {
    let local = appointment.date.with_timezone(tz);
    format!("{:02}:{:02}", local.hour(), local.minute())
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let content = Column::new()
        .push(view_header(&ctx))
        .push(view_schedule(&ctx, state));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let name = ctx.user.map(|user| user.name.clone()).unwrap_or_default();

    let profile = button(text(name).size(typography::BODY_LG).font(form::bold()))
        .on_press(Message::OpenProfile)
        .padding(0)
        .style(styles::button::accent_link);

    let greeting = Column::new()
        .spacing(spacing::XXS)
        .push(text(i18n.tr("dashboard-welcome")).size(typography::BODY))
        .push(profile);

    let sign_out = button(text(i18n.tr("dashboard-sign-out")).size(typography::BODY))
        .on_press(Message::SignOut)
        .padding(spacing::XS)
        .style(styles::button::link);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(greeting).width(Length::Fill))
        .push(sign_out);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::LG, spacing::XL])
        .style(styles::container::header)
        .into()
}

fn view_schedule<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let day = state.selected_day;
    let is_today = day == ctx.now.date_naive();
    let schedule = Schedule::build(&state.appointments, day, &ctx.now);
    let tz = ctx.now.timezone();

    let today: Element<'a, Message> = if is_today {
        text(i18n.tr("dashboard-today")).style(orange).into()
    } else {
        button(text(i18n.tr("dashboard-today")))
            .on_press(Message::Today(ctx.now.date_naive()))
            .padding(0)
            .style(styles::button::link)
            .into()
    };
    let subtitle = Row::new()
        .spacing(spacing::XS)
        .push(today)
        .push(text(day_heading(i18n, day)).style(orange));

    let day_nav = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text("‹").size(typography::TITLE_MD))
                .on_press(Message::PreviousDay)
                .style(styles::button::link),
        )
        .push(
            button(text("›").size(typography::TITLE_MD))
                .on_press(Message::NextDay)
                .style(styles::button::link),
        );

    let heading = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::XS)
                .push(form::title(i18n.tr("dashboard-schedule-title")))
                .push(subtitle),
        )
        .push(day_nav);

    let mut body = Column::new().spacing(spacing::LG).push(heading);

    if let Some(next) = schedule.next {
        body = body.push(
            Column::new()
                .spacing(spacing::SM)
                .push(text(i18n.tr("dashboard-next-appointment")).size(typography::BODY_LG))
                .push(
                    Container::new(appointment_row(next, &tz))
                        .width(Length::Fill)
                        .padding(spacing::MD)
                        .style(styles::container::highlighted_card),
                ),
        );
    }

    if !state.loading {
        body = body
            .push(period(i18n, "dashboard-morning", &schedule.morning, &tz))
            .push(period(i18n, "dashboard-afternoon", &schedule.afternoon, &tz));
    }

    let column = Container::new(body.width(Length::Fixed(sizing::SCHEDULE_WIDTH)))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL);

    scrollable(column).height(Length::Fill).into()
}

fn period<'a, Tz: TimeZone>(
    i18n: &I18n,
    label_key: &str,
    appointments: &[&Appointment],
    tz: &Tz,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr(label_key)).size(typography::BODY_LG));

    if appointments.is_empty() {
        column = column.push(
            text(i18n.tr("dashboard-empty-period"))
                .size(typography::BODY)
                .style(muted),
        );
    }

    for appointment in appointments {
        column = column.push(
            Container::new(appointment_row(appointment, tz))
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(styles::container::card),
        );
    }

    column.into()
}

fn appointment_row<'a, Tz: TimeZone>(appointment: &Appointment, tz: &Tz) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(
            text(local_time(appointment, tz))
                .size(typography::BODY_LG)
                .style(muted),
        )
        .push(
            text(appointment.user.name.clone())
                .size(typography::BODY_LG)
                .font(form::bold()),
        )
        .into()
}

fn orange(_theme: &iced::Theme) -> text::Style {
    text::Style {
        color: Some(crate::ui::design_tokens::palette::ORANGE_500),
    }
}

fn muted(_theme: &iced::Theme) -> text::Style {
    text::Style {
        color: Some(crate::ui::design_tokens::palette::TEXT_MUTED),
    }
}
