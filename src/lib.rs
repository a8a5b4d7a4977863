// SPDX-License-Identifier: MPL-2.0
//! `gobarber` is the desktop client of the GoBarber booking service, built
//! with the Iced GUI framework.
//!
//! Providers sign in, browse the appointments of a day and edit their
//! profile. Every outcome the user should know about is reported through
//! the toast notification subsystem in [`ui::notifications`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod routes;
pub mod session;
pub mod ui;
