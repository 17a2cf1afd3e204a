/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication module for the ATS API
//!
//! This module talks to the unauthenticated part of the `/auth` API:
//! - Login with email and password
//! - Exchange of a refresh token for a new access token
//! - Expiry of the local session when a refresh is rejected

use crate::application::config::Config;
use crate::application::session::Session;
use crate::constants::LOGIN_PATH;
use crate::error::AppError;
use crate::model::auth::{AuthEvent, LoginResponse, RefreshRequest, RefreshResponse};
use crate::model::http::{ApiRequest, make_http_request};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Authentication manager for the ATS API
///
/// Requests issued here never carry an `Authorization` header and never go
/// through the refresh flow themselves.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Session,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration with the base URL and refresh path
    /// * `client` - HTTP client carrying the default headers
    /// * `session` - Session the obtained tokens are written to
    pub fn new(config: Arc<Config>, client: Client, session: Session) -> Self {
        Self {
            config,
            client,
            session,
        }
    }

    /// Signs in with email and password and stores the issued credential pair
    ///
    /// # Returns
    /// * `Ok(LoginResponse)` - Tokens and the authenticated user
    /// * `Err(AppError::AuthExpired)` - Wrong email or password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::InvalidInput("email must not be empty".to_string()));
        }

        info!("Logging in as {}", email);

        let request = ApiRequest::post(LOGIN_PATH)
            .with_query("email", email)
            .with_query("password", password);

        let response = make_http_request(&self.client, &self.config, &request).await?;
        let login: LoginResponse = parse_json(response).await?;

        self.session.set_tokens(&login.credentials()).await?;

        info!("✓ Login successful, user: {}", login.user.username);
        Ok(login)
    }

    /// Exchanges `refresh_token` for a new access token
    ///
    /// Only performs the call; nothing is stored.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, AppError> {
        let request = ApiRequest::post(self.config.auth.refresh_path.as_str()).with_json(
            &RefreshRequest {
                refresh_token: refresh_token.to_string(),
            },
        )?;

        debug!("[{}] Sending refresh request", request.request_id);

        let response = make_http_request(&self.client, &self.config, &request).await?;
        parse_json(response).await
    }

    /// Refreshes the stored access token
    ///
    /// On success the new access token is stored and returned. On failure the
    /// local session is expired (see [`Auth::expire_session`]) and
    /// `AppError::RefreshFailed` is returned.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, AppError> {
        info!("Refreshing access token");

        match self.refresh(refresh_token).await {
            Ok(refreshed) => {
                self.session.set_access_token(&refreshed.access_token).await?;
                self.session.emit(AuthEvent::TokenRefreshed);
                info!("✓ Token refreshed successfully");
                Ok(refreshed.access_token)
            }
            Err(cause) => Err(self.expire_session(cause).await),
        }
    }

    /// Deletes both stored tokens and tells subscribers the user is logged out
    ///
    /// Returns the `RefreshFailed` error to hand back to the caller.
    pub async fn expire_session(&self, cause: AppError) -> AppError {
        warn!("Token refresh failed: {}", cause);

        if let Err(e) = self.session.clear().await {
            error!("Failed to clear stored credentials: {}", e);
        }

        let login_route = self.config.auth.login_route.clone();
        self.session.emit(AuthEvent::LoggedOut {
            redirect_to: login_route.clone(),
        });

        AppError::RefreshFailed {
            login_route,
            cause: Box::new(cause),
        }
    }

    /// Session the tokens are written to
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Decodes a JSON body, treating an empty body as `null`
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    let slice: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
    serde_json::from_slice(slice).map_err(|e| AppError::Deserialization(e.to_string()))
}
