// SPDX-License-Identifier: MPL-2.0
//! Toast display duration domain type.

use crate::config::{DEFAULT_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS, MIN_TOAST_DURATION_MS};
use std::time::Duration;

/// Time a toast stays visible before its presenter removes it.
///
/// The value is always within 1–30 seconds.
///
/// # Example
///
/// ```
/// use gobarber::ui::notifications::ToastDuration;
///
/// assert_eq!(ToastDuration::default().as_millis(), 3000);
///
/// // Values outside range are clamped
/// assert_eq!(ToastDuration::from_millis(50).as_millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(DEFAULT_TOAST_DURATION_MS)
    }
}

impl From<Option<u64>> for ToastDuration {
    fn from(value: Option<u64>) -> Self {
        value.map(Self::from_millis).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_clamps_to_valid_range() {
        assert_eq!(ToastDuration::from_millis(0).as_millis(), MIN_TOAST_DURATION_MS);
        assert_eq!(ToastDuration::from_millis(600_000).as_millis(), MAX_TOAST_DURATION_MS);
        assert_eq!(ToastDuration::from_millis(4500).as_millis(), 4500);
    }

    #[test]
    fn missing_value_uses_default() {
        assert_eq!(ToastDuration::from(None), ToastDuration::default());
        assert_eq!(ToastDuration::default().as_duration(), Duration::from_secs(3));
    }
}
