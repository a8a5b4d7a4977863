// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle state.
//!
//! `ToastStore` is the plain ordered collection of live toasts. `ToastContext`
//! wraps it in a shared handle that pages, presenters and timers clone and
//! mutate through `add_toast`/`remove_toast`. Every change is broadcast on a
//! `tokio::sync::watch` channel so views can re-render.

use super::notification::{ToastDescriptor, ToastId, ToastMessage};
use std::sync::Arc;
use tokio::sync::watch;

/// Receives removal requests for toasts.
///
/// Presenters depend on this rather than on the concrete context so their
/// timers can be observed in isolation.
pub trait ToastSink: Clone + Send + Sync + 'static {
    fn remove_toast(&self, id: &ToastId);
}

/// Ordered collection of live toasts (oldest first).
#[derive(Debug, Default, Clone)]
pub struct ToastStore {
    messages: Vec<ToastMessage>,
}

impl ToastStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new toast and returns its freshly generated id.
    pub fn add(&mut self, descriptor: ToastDescriptor) -> ToastId {
        let mut id = ToastId::generate();
        while self.contains(&id) {
            id = ToastId::generate();
        }
        self.messages.push(ToastMessage::new(id.clone(), descriptor));
        id
    }

    /// Appends an already built message.
    ///
    /// Returns `false` without touching the collection when a toast with the
    /// same id is already live.
    pub fn insert(&mut self, message: ToastMessage) -> bool {
        if self.contains(message.id()) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Removes the toast with `id`.
    ///
    /// Returns `false` and leaves the collection untouched when no such toast
    /// is live.
    pub fn remove(&mut self, id: &ToastId) -> bool {
        match self.messages.iter().position(|m| m.id() == id) {
            Some(pos) => {
                self.messages.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns whether a toast with `id` is live.
    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.messages.iter().any(|m| m.id() == id)
    }

    /// Returns the live toasts in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[ToastMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops every toast.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Shared handle to the toast store.
///
/// Created once by the application root and passed down explicitly to every
/// part of the app that needs to raise or dismiss toasts. Cloning is cheap and
/// all clones observe the same collection.
#[derive(Debug, Clone)]
pub struct ToastContext {
    state: Arc<watch::Sender<ToastStore>>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    /// Creates a context with an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(watch::Sender::new(ToastStore::new())),
        }
    }

    /// Adds a toast and notifies subscribers. Always succeeds.
    pub fn add_toast(&self, descriptor: ToastDescriptor) -> ToastId {
        loop {
            let id = ToastId::generate();
            let message = ToastMessage::new(id.clone(), descriptor.clone());
            if self.state.send_if_modified(|store| store.insert(message)) {
                tracing::debug!(
                    toast_id = %id,
                    kind = descriptor.kind.unwrap_or_default().tag(),
                    "toast added"
                );
                return id;
            }
        }
    }

    /// Removes a toast. A no-op when the id is not live.
    ///
    /// Returns whether an entry was removed. Subscribers are only notified
    /// when the collection actually changed.
    pub fn remove_toast(&self, id: &ToastId) -> bool {
        let removed = self.state.send_if_modified(|store| store.remove(id));
        if removed {
            tracing::debug!(toast_id = %id, "toast removed");
        }
        removed
    }

    /// Returns a snapshot of the live toasts in insertion order.
    #[must_use]
    pub fn messages(&self) -> Vec<ToastMessage> {
        self.state.borrow().messages().to_vec()
    }

    /// Returns whether a toast with `id` is live.
    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.state.borrow().contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Subscribes to changes of the collection.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ToastStore> {
        self.state.subscribe()
    }

    /// Discards every toast. Called when the overlay is torn down.
    pub fn clear(&self) {
        self.state.send_if_modified(|store| {
            let changed = !store.is_empty();
            store.clear();
            changed
        });
    }
}

impl ToastSink for ToastContext {
    fn remove_toast(&self, id: &ToastId) {
        ToastContext::remove_toast(self, id);
    }
}
