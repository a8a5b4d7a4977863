// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`pages`] - One screen per route (sign in, dashboard, profile, ...)
//! - [`components`] - Reusable form building blocks
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod pages;
pub mod styles;
