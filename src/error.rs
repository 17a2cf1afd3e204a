/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error type shared by every module of the crate.

use reqwest::StatusCode;
use std::fmt;

/// Errors produced while talking to the ATS API
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure: connection refused, timeout, TLS, invalid URL...
    Network(reqwest::Error),
    /// The API answered 401 and the session could not be recovered locally
    AuthExpired {
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// The refresh call failed. Stored credentials have been cleared and the
    /// user has to sign in again at `login_route`.
    RefreshFailed {
        /// Route of the login view the presentation layer should navigate to
        login_route: String,
        /// Failure returned by the refresh call
        cause: Box<AppError>,
    },
    /// Any non-success status other than 401
    Http {
        /// Status returned by the API
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },
    /// JSON encoding or decoding error
    Json(serde_json::Error),
    /// Filesystem error from a persistent credential store
    Io(std::io::Error),
    /// Response body could not be decoded into the expected type
    Deserialization(String),
    /// Caller supplied an unusable value
    InvalidInput(String),
}

impl AppError {
    /// HTTP status attached to the error, when the API produced one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::AuthExpired { .. } => Some(StatusCode::UNAUTHORIZED),
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            AppError::RefreshFailed { cause, .. } => cause.status(),
            _ => None,
        }
    }

    /// Whether the caller has lost its session and must re-authenticate
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, AppError::RefreshFailed { .. })
    }

    /// Login route the caller should navigate to after a failed refresh
    #[must_use]
    pub fn login_route(&self) -> Option<&str> {
        match self {
            AppError::RefreshFailed { login_route, .. } => Some(login_route.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::AuthExpired { body } => {
                if body.is_empty() {
                    write!(f, "authorization expired")
                } else {
                    write!(f, "authorization expired: {body}")
                }
            }
            AppError::RefreshFailed { login_route, cause } => {
                write!(f, "token refresh failed ({cause}), sign in again at {login_route}")
            }
            AppError::Http { status, body } => {
                if body.is_empty() {
                    write!(f, "unexpected status: {status}")
                } else {
                    write!(f, "unexpected status: {status}: {body}")
                }
            }
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::RefreshFailed { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Deserialization(e.to_string())
        } else {
            AppError::Network(e)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
