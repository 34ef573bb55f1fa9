//! Blocking browser confirmation prompts.

/// Ask the user to confirm `message`. Returns `false` outside the browser or
/// when the prompt cannot be shown.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

pub const CONFIRM_DELETE_PROJECT: &str =
    "Are you sure you want to delete this playground? This action cannot be undone.";
pub const CONFIRM_LEAVE_UNSAVED: &str = "You have unsaved changes. Are you sure you want to leave?";
