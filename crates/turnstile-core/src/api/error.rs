//! API failure taxonomy.
//!
//! Two branches only: the server answered with a non-2xx status (possibly
//! carrying an `error` message in the JSON body), or the request never
//! produced a usable response at all. Views decide how each surfaces.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Status { status: StatusCode, message: String },
    /// Connection, timeout, or body-decoding failure.
    Transport(reqwest::Error),
}

/// Error body shape used by the server (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ServerMessage {
    pub error: String,
}

impl ApiError {
    /// The message to show a user: the server's own wording when present,
    /// otherwise a transport summary.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Transport(err) => err.to_string(),
        }
    }

    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status { status, message } => {
                write!(f, "server returned {status}: {message}")
            }
            ApiError::Transport(err) => write!(f, "request failed: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Status { .. } => None,
            ApiError::Transport(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}
