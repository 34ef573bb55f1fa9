//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior, and
//! any request that comes back 401 ends the session the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;

/// Route that hosts login, registration and password reset.
pub const AUTH_ROUTE: &str = "/auth";

/// Whether a protected page should leave for [`AUTH_ROUTE`].
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.restored && !state.signed_in()
}

/// Redirect to `/auth` whenever the session has been restored and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(AUTH_ROUTE, NavigateOptions::default());
        }
    });
}

/// Drop the session when `err` is a 401. The redirect effect then takes the
/// user to `/auth`. Returns whether the session was dropped.
pub fn expire_session(auth: RwSignal<AuthState>, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    auth.update(|a| {
        a.expire_on(err);
    });
    true
}
