// SPDX-License-Identifier: MPL-2.0
//! Authentication state and its persistence.
//!
//! The signed-in session is two string entries in a [`KeyValueStore`]:
//! the bearer token under [`TOKEN_KEY`] and the user, as JSON, under
//! [`USER_KEY`]. On desktop the store is a [`FileStore`] (`storage.cbor` in
//! the application data directory); tests use a [`MemoryStore`].

mod auth;
mod storage;

pub use auth::{AuthState, SessionResponse, User, TOKEN_KEY, USER_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
