// SPDX-License-Identifier: MPL-2.0
//! Application pages, one per [`Route`](crate::routes::Route).
//!
//! Each page owns its form state and follows the same shape: a `Message`
//! enum for user input and API results, an `Event` enum telling the
//! application what to do next, `State::update` and a `view` function.
//! Pages never call the API themselves; they ask for it with a submit event
//! and receive the outcome back as a message.
//!
//! Every failed request becomes an error toast.

pub mod dashboard;
pub mod forgot_password;
pub mod profile;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;

use crate::i18n::fluent::I18n;

/// Contextual data needed to render a form page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}
