//! Errors returned by the REST client.
//!
//! Every failed call resolves to one [`ApiError`]; pages turn it into the
//! line of text shown to the user with [`ApiError::user_message`] or a
//! page-specific fallback via [`ApiError::server_message_or`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered 401. The session token is no longer valid.
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-2xx answer. `message` is the body's `message` field.
    #[error("server error {status}")]
    Server { status: u16, message: Option<String> },
    /// A 2xx answer whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The call was made outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx status with the body's optional `message`.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Server { status, message: message.filter(|m| !m.trim().is_empty()) }
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Generic UI text for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Please check your connection.".to_owned(),
            Self::Unauthorized => "Session expired. Please login again.".to_owned(),
            Self::Server { message: Some(message), .. } => message.clone(),
            Self::Server { message: None, .. } => "Something went wrong".to_owned(),
            Self::Decode(_) | Self::Unavailable => "An unexpected error occurred".to_owned(),
        }
    }

    /// The server-provided message when there is one, else `fallback`.
    #[must_use]
    pub fn server_message_or(&self, fallback: &str) -> String {
        match self {
            Self::Server { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
