// SPDX-License-Identifier: MPL-2.0
//! Signed-in user session.

use super::storage::KeyValueStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "@GoBarber:token";

/// Storage key holding the signed-in user as JSON.
pub const USER_KEY: &str = "@GoBarber:user";

/// A GoBarber account as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of a successful `POST /sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Session {
    token: String,
    user: User,
}

/// In-memory session mirrored into a [`KeyValueStore`].
#[derive(Debug)]
pub struct AuthState<K: KeyValueStore> {
    store: K,
    session: Option<Session>,
}

impl<K: KeyValueStore> AuthState<K> {
    /// Rebuilds the session from storage.
    ///
    /// The session is live only when both entries exist and the user parses.
    pub fn restore(store: K) -> Self {
        let session = match (store.get(TOKEN_KEY), store.get(USER_KEY)) {
            (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
                Ok(user) => Some(Session { token, user }),
                Err(err) => {
                    tracing::warn!(error = %err, "stored user is not valid JSON; starting signed out");
                    None
                }
            },
            _ => None,
        };

        if let Some(session) = &session {
            tracing::info!(user_id = %session.user.id, "restored session");
        }

        Self { store, session }
    }

    /// Makes a fresh session returned by the API current and persists it.
    ///
    /// The session is live even when persisting fails; the error only means
    /// it will not survive a restart.
    pub fn establish(&mut self, response: SessionResponse) -> Result<()> {
        let SessionResponse { token, user } = response;
        tracing::info!(user_id = %user.id, "signed in");
        let user_json = serde_json::to_string(&user)?;
        self.session = Some(Session {
            token: token.clone(),
            user,
        });
        self.store.set(TOKEN_KEY, token)?;
        self.store.set(USER_KEY, user_json)
    }

    /// Ends the session, removing both storage entries.
    ///
    /// The in-memory session is cleared even when storage fails.
    pub fn sign_out(&mut self) -> Result<()> {
        if let Some(session) = self.session.take() {
            tracing::info!(user_id = %session.user.id, "signed out");
        }
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        Ok(())
    }

    /// Replaces the stored user, keeping the token.
    pub fn update_user(&mut self, user: User) -> Result<()> {
        let user_json = serde_json::to_string(&user)?;
        if let Some(session) = &mut self.session {
            session.user = user;
        }
        self.store.set(USER_KEY, user_json)
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
