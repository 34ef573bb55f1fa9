//! Bearer token persistence.
//!
//! The token lives in `localStorage` under
//! [`TOKEN_STORAGE_KEY`](crate::config::TOKEN_STORAGE_KEY) so a reload keeps
//! the session. Only `state::auth` calls into this module. Requires a browser
//! environment; SSR paths no-op and report no token.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?
            .get_item(crate::config::TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, replacing any previous one.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if storage.set_item(crate::config::TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("could not persist session token");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(crate::config::TOKEN_STORAGE_KEY);
        }
    }
}
