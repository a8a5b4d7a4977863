// SPDX-License-Identifier: MPL-2.0
//! Per-toast presenter owning the auto-dismiss timer.
//!
//! A presenter is mounted for every live toast. On mount it schedules a
//! single-shot timer that removes the toast from the store once the display
//! duration has elapsed. The timer handle lives inside the presenter and is
//! aborted when the presenter is dropped, so a timer can never outlive the
//! toast it was started for.

use super::notification::{ToastId, ToastMessage, ToastVariant};
use super::store::ToastSink;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Owned handle to a pending auto-dismiss timer. Aborts the timer on drop.
#[derive(Debug)]
pub struct DismissTimer {
    handle: JoinHandle<()>,
}

impl DismissTimer {
    /// Spawns a timer that calls `sink.remove_toast(id)` once `duration` has
    /// elapsed, measured from now.
    pub fn start<S: ToastSink>(id: ToastId, sink: S, duration: Duration) -> Self {
        let deadline = Instant::now() + duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            tracing::debug!(toast_id = %id, "toast timer expired");
            sink.remove_toast(&id);
        });
        Self { handle }
    }

    /// Returns whether the timer has neither fired nor been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancels the timer. Has no effect once it already fired.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Renders one toast and owns its temporal lifecycle.
#[derive(Debug)]
pub struct ToastPresenter<S: ToastSink> {
    message: ToastMessage,
    variant: ToastVariant,
    sink: S,
    timer: Option<DismissTimer>,
}

impl<S: ToastSink> ToastPresenter<S> {
    /// Mounts a presenter and starts its auto-dismiss timer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(message: ToastMessage, sink: S, duration: Duration) -> Self {
        let timer = DismissTimer::start(message.id().clone(), sink.clone(), duration);
        Self {
            variant: message.variant(),
            message,
            sink,
            timer: Some(timer),
        }
    }

    /// Manual dismissal: removes the toast right away and cancels the timer.
    pub fn dismiss(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.sink.remove_toast(self.message.id());
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        self.message.id()
    }

    #[must_use]
    pub fn message(&self) -> &ToastMessage {
        &self.message
    }

    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        self.variant
    }

    /// Returns whether the auto-dismiss timer is still waiting to fire.
    #[must_use]
    pub fn is_timer_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(DismissTimer::is_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{ToastDescriptor, ToastKind};
    use std::sync::{Arc, Mutex};

    const DURATION: Duration = Duration::from_millis(3000);

    /// Records every removal request instead of touching a store.
    #[derive(Debug, Clone, Default)]
    struct RecordingSink {
        calls: Arc<Mutex<Vec<ToastId>>>,
    }

    impl RecordingSink {
        fn calls(&self) -> Vec<ToastId> {
            self.calls.lock().expect("sink lock").clone()
        }
    }

    impl ToastSink for RecordingSink {
        fn remove_toast(&self, id: &ToastId) {
            self.calls.lock().expect("sink lock").push(id.clone());
        }
    }

    fn info_message(id: &str) -> ToastMessage {
        ToastMessage::new(
            ToastId::from(id),
            ToastDescriptor::info("Info Title").description("Info description"),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_removes_immediately() {
        let sink = RecordingSink::default();
        let mut presenter = ToastPresenter::mount(info_message("toast-id"), sink.clone(), DURATION);

        presenter.dismiss();

        assert_eq!(sink.calls(), vec![ToastId::from("toast-id")]);
        assert!(!presenter.is_timer_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_cancels_the_timer() {
        let sink = RecordingSink::default();
        let mut presenter = ToastPresenter::mount(info_message("toast-id"), sink.clone(), DURATION);

        presenter.dismiss();
        tokio::time::sleep(DURATION * 2).await;

        assert_eq!(sink.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_removes_after_duration() {
        let sink = RecordingSink::default();
        let presenter = ToastPresenter::mount(info_message("toast-id2"), sink.clone(), DURATION);

        tokio::time::sleep(DURATION - Duration::from_millis(1)).await;
        assert!(sink.calls().is_empty());
        assert!(presenter.is_timer_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(sink.calls(), vec![ToastId::from("toast-id2")]);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_exactly_once() {
        let sink = RecordingSink::default();
        let _presenter = ToastPresenter::mount(info_message("toast-id"), sink.clone(), DURATION);

        tokio::time::sleep(DURATION * 5).await;
        assert_eq!(sink.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_presenter_cancels_timer() {
        let sink = RecordingSink::default();
        let presenter = ToastPresenter::mount(info_message("toast-id"), sink.clone(), DURATION);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        drop(presenter);
        tokio::time::sleep(DURATION * 2).await;

        assert!(sink.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn variant_follows_message_kind() {
        let sink = RecordingSink::default();
        let message = ToastMessage::new(ToastId::from("e"), ToastDescriptor::error("Error Title"));
        let presenter = ToastPresenter::mount(message, sink, DURATION);

        assert_eq!(presenter.variant(), ToastVariant::for_kind(ToastKind::Error));
        assert_eq!(presenter.variant().background_hex(), "#fddede");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_and_store_race_is_first_writer_wins() {
        use crate::ui::notifications::ToastContext;

        let ctx = ToastContext::new();
        let id = ctx.add_toast(ToastDescriptor::new("race"));
        let message = ctx.messages()[0].clone();
        let _presenter = ToastPresenter::mount(message, ctx.clone(), DURATION);

        assert!(ctx.remove_toast(&id));
        tokio::time::sleep(DURATION * 2).await;

        assert!(ctx.is_empty());
    }
}
