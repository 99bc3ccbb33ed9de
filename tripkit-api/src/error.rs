//! API error taxonomy
//!
//! Classification happens here, before anything reaches a store: the
//! stores only ever hold the display string from
//! [`ApiError::user_message`].

use std::fmt;

/// Shown for server faults; internal detail stays hidden
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong, please try again";

/// Failure of a REST collaborator call
#[derive(Debug)]
pub enum ApiError {
    /// HTTP 5xx; detail deliberately not surfaced
    Server,
    /// Non-success envelope or non-2xx response with a usable message
    Application(String),
    /// Connection, timeout, or decoding failure below the envelope
    Transport(reqwest::Error),
}

impl ApiError {
    /// The string a page should display for this failure.
    ///
    /// Server faults map to the fixed generic message; application errors
    /// surface the server's own message; transport errors surface the
    /// transport description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server => GENERIC_ERROR_MESSAGE.to_string(),
            ApiError::Application(message) => message.clone(),
            ApiError::Transport(e) => e.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server => write!(f, "Server error"),
            ApiError::Application(message) => write!(f, "Request rejected: {}", message),
            ApiError::Transport(e) => write!(f, "Transport failure: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}
