/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authenticated client for the ATS API
//!
//! Every request goes through two interception steps:
//! - before sending, the stored access token (if any) is attached as
//!   `Authorization: Bearer <token>`
//! - when the API answers 401, the stored refresh token is exchanged for a new
//!   access token once and the original request is sent again once
//!
//! # Example
//! ```ignore
//! use ats_client::prelude::*;
//!
//! let client = Client::from_env()?;
//! client.auth().login("admin@ucube.ai", "admin").await?;
//!
//! let candidates: serde_json::Value = client.get("/candidates").await?;
//! ```

use crate::application::auth::{Auth, parse_json};
use crate::application::config::Config;
use crate::application::session::Session;
use crate::constants::{LOGOUT_PATH, ME_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{AuthEvent, MessageResponse, User};
use crate::model::http::{ApiRequest, build_http_client, make_http_request};
use crate::storage::{CredentialStore, FileStore, MemoryStore};
use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Client for the ATS API with bearer authentication and one-shot token refresh
///
/// Concurrent calls that hit a 401 each run their own refresh; nothing is
/// shared between them.
pub struct Client {
    auth: Arc<Auth>,
    session: Session,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client over an explicit credential store
    ///
    /// # Arguments
    /// * `config` - Base URL, default headers and auth routes
    /// * `store` - Storage holding the credential pair
    pub fn new(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config, USER_AGENT)?;
        let session = Session::new(store);
        let auth = Arc::new(Auth::new(
            config.clone(),
            http_client.clone(),
            session.clone(),
        ));

        debug!("Client created for {}", config.rest_api.base_url);

        Ok(Self {
            auth,
            session,
            http_client,
            config,
        })
    }

    /// Creates a client from the environment
    ///
    /// Tokens are persisted to `ATS_TOKEN_FILE` when it is set, kept in
    /// memory otherwise.
    pub fn from_env() -> Result<Self, AppError> {
        let config = Config::new();
        let store: Arc<dyn CredentialStore> = match &config.auth.token_file {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(config, store)
    }

    /// Sends `request` through the authentication pipeline
    ///
    /// # Returns
    /// * `Ok(Response)` - 2xx response of the original request or of its resend
    /// * `Err(AppError::AuthExpired)` - 401 with no refresh token stored, or 401 on the resend
    /// * `Err(AppError::RefreshFailed)` - the refresh call failed; credentials were cleared
    /// * `Err(AppError::Http)` - any other failing status, unchanged
    pub async fn send(&self, mut request: ApiRequest) -> Result<Response, AppError> {
        self.authorize(&mut request).await?;

        match make_http_request(&self.http_client, &self.config, &request).await {
            Err(unauthorized @ AppError::AuthExpired { .. }) => {
                self.refresh_and_resend(request, unauthorized).await
            }
            outcome => outcome,
        }
    }

    /// Attaches the stored access token, if any
    async fn authorize(&self, request: &mut ApiRequest) -> Result<(), AppError> {
        match self.session.access_token().await? {
            Some(token) => request.set_bearer(&token),
            None => {
                debug!("[{}] No access token stored, sending unauthenticated", request.request_id);
                Ok(())
            }
        }
    }

    /// Handles a 401: one refresh, then one resend of the original request
    ///
    /// `unauthorized` is handed back untouched when no refresh token is stored.
    async fn refresh_and_resend(
        &self,
        mut request: ApiRequest,
        unauthorized: AppError,
    ) -> Result<Response, AppError> {
        let Some(refresh_token) = self.session.refresh_token().await? else {
            debug!("[{}] No refresh token stored, giving up", request.request_id);
            return Err(unauthorized);
        };

        warn!("[{}] Access token rejected, refreshing and retrying", request.request_id);
        let access_token = self.auth.refresh_access_token(&refresh_token).await?;

        request.set_bearer(&access_token)?;
        make_http_request(&self.http_client, &self.config, &request).await
    }

    /// Sends a request and decodes the JSON response
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let mut request = ApiRequest::new(method, path);
        if let Some(b) = body {
            request = request.with_json(b)?;
        }
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Fetches the signed-in user
    pub async fn me(&self) -> Result<User, AppError> {
        self.get(ME_PATH).await
    }

    /// Revokes the refresh tokens server-side and clears the local session
    ///
    /// Local credentials are cleared even when the server call fails.
    pub async fn logout(&self) -> Result<MessageResponse, AppError> {
        info!("Logging out");

        let outcome = self
            .request::<(), MessageResponse>(Method::POST, LOGOUT_PATH, None)
            .await;

        self.session.clear().await?;
        // A failed refresh already announced the logout
        if !matches!(&outcome, Err(e) if e.is_unauthenticated()) {
            self.session.emit(AuthEvent::LoggedOut {
                redirect_to: self.config.auth.login_route.clone(),
            });
        }

        if outcome.is_ok() {
            info!("✓ Logged out successfully");
        }
        outcome
    }

    /// Subscribes to refresh and logout events
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.session.subscribe()
    }

    /// Gets the session holding the credentials
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
