// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. Brazilian Portuguese is the default UI language.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Argument interpolation (`tr_with_args`)

pub mod fluent;
