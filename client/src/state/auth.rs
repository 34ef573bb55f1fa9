//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the bearer token for the whole app. The token is written at login or
//! registration, removed at logout or when any call comes back 401, and read
//! by pages right before each request so it can be handed to `net::api`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::util::token_storage;

/// Authentication state tracking the session token.
///
/// `restored` turns true once the stored token has been read back after
/// hydration; route guards wait for it before redirecting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub restored: bool,
}

impl AuthState {
    /// State with the token loaded from browser storage.
    #[must_use]
    pub fn restore() -> Self {
        Self { token: token_storage::read(), restored: true }
    }

    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Token to attach to the next request.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Start a session. Empty tokens are ignored.
    pub fn sign_in(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        token_storage::write(token);
        self.token = Some(token.to_owned());
        self.restored = true;
    }

    /// End the session and forget the stored token.
    pub fn sign_out(&mut self) {
        token_storage::clear();
        self.token = None;
    }

    /// Drop the session when `err` says it expired. Returns `true` when the
    /// caller should send the user to `/auth`.
    pub fn expire_on(&mut self, err: &ApiError) -> bool {
        if err.is_unauthorized() {
            self.sign_out();
            true
        } else {
            false
        }
    }
}
