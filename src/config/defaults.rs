// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: Auto-dismiss duration and its bounds
//! - **API**: Remote service location
//! - **Locale**: Fallback UI language

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays on screen before dismissing itself (ms).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Minimum toast duration (ms).
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Maximum toast duration (ms).
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the GoBarber API when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "pt-BR";

const _: () = {
    assert!(MIN_TOAST_DURATION_MS <= DEFAULT_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
};
