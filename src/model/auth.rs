/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_token_type() -> String {
    String::from("bearer")
}

/// Shortens a token for diagnostics, never exposing it whole
fn redact(token: &str) -> String {
    if token.chars().count() <= 8 {
        String::from("***")
    } else {
        format!("{}***", token.chars().take(4).collect::<String>())
    }
}

/// Access and refresh token issued together at login
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialPair {
    /// Short-lived token sent as `Authorization: Bearer <token>`
    pub access_token: String,
    /// Long-lived token exchanged for a new access token
    pub refresh_token: String,
}

impl CredentialPair {
    /// Creates a new credential pair
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPair")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

/// Body of `POST /auth/refresh`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Refresh token read from the credential store
    pub refresh_token: String,
}

impl fmt::Debug for RefreshRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshRequest")
            .field("refresh_token", &redact(&self.refresh_token))
            .finish()
    }
}

/// Response of `POST /auth/refresh`
///
/// Only `access_token` is required; the backend echoes the refresh token back
/// but older deployments omit it.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    /// Newly issued access token
    pub access_token: String,
    /// Refresh token, when the server sends one back
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Token type, usually `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

impl fmt::Debug for RefreshResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshResponse")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &self.refresh_token.as_deref().map(redact))
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// User as returned by the ATS backend
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Database identifier
    pub id: i64,
    /// Login email
    pub email: String,
    /// Display name
    pub username: String,
    /// One of `admin`, `interviewer`, `hr`
    pub role: String,
    /// Inactive users cannot refresh their session
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response of `POST /auth/login`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Access token for API requests
    pub access_token: String,
    /// Refresh token for obtaining new access tokens
    pub refresh_token: String,
    /// Token type, usually `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Authenticated user
    pub user: User,
}

impl LoginResponse {
    /// Extracts the credential pair to persist
    #[must_use]
    pub fn credentials(&self) -> CredentialPair {
        CredentialPair::new(self.access_token.clone(), self.refresh_token.clone())
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("token_type", &self.token_type)
            .field("user", &self.user.email)
            .finish()
    }
}

/// Generic `{ "message": ... }` acknowledgement
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// Signal emitted on the session's event channel
///
/// The client never navigates on its own: the presentation layer subscribes
/// to these events and decides what to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A refresh succeeded and a new access token was stored
    TokenRefreshed,
    /// The session is gone; the user must sign in again at `redirect_to`
    LoggedOut {
        /// Route of the login view
        redirect_to: String,
    },
}
