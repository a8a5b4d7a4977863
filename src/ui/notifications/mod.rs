// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are transient, non-blocking messages raised by any page (sign-in
//! failure, profile saved, ...). They disappear on their own after a fixed
//! duration or when the user dismisses them.
//!
//! # Components
//!
//! - [`duration`] - `ToastDuration`, the clamped auto-dismiss delay
//! - [`notification`] - `ToastMessage`, `ToastKind` and the kind-to-color mapping
//! - [`store`] - `ToastStore` and the shared `ToastContext` handle
//! - [`presenter`] - `ToastPresenter`, one per live toast, owning its timer
//! - [`toast`] - `ToastContainer`, which mounts presenters and renders them
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{ToastContainer, ToastContext, ToastDescriptor};
//!
//! // Created once by the application root and handed to every page.
//! let toasts = ToastContext::new();
//! let mut overlay = ToastContainer::new(toasts.clone(), Duration::from_secs(3));
//!
//! toasts.add_toast(ToastDescriptor::error("Sign-in failed").description("Check your credentials"));
//! overlay.sync();
//! ```

mod duration;
mod notification;
mod presenter;
mod store;
mod toast;

pub use duration::ToastDuration;
pub use notification::{ToastDescriptor, ToastId, ToastKind, ToastMessage, ToastVariant};
pub use presenter::{DismissTimer, ToastPresenter};
pub use store::{ToastContext, ToastSink, ToastStore};
pub use toast::{Message as ToastOverlayMessage, ToastContainer};
