// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which the toast overlay is reconciled with the store.
const TOAST_TICK: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription while toasts are on screen.
///
/// Timers remove toasts from the store on their own; the tick makes the
/// overlay notice and redraw.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
