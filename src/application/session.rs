/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Typed access to the credential pair held in a [`CredentialStore`]

use crate::constants::{ACCESS_TOKEN_KEY, AUTH_EVENT_CAPACITY, REFRESH_TOKEN_KEY};
use crate::error::AppError;
use crate::model::auth::{AuthEvent, CredentialPair};
use crate::storage::CredentialStore;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Session context passed to the client at construction
///
/// Wraps the credential store with read, write and clear operations on the
/// fixed `access_token` / `refresh_token` keys, and owns the channel on which
/// [`AuthEvent`]s are published. Cloning is cheap and clones share both the
/// store and the channel.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
    events: broadcast::Sender<AuthEvent>,
}

impl Session {
    /// Creates a session over `store`
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);
        Self { store, events }
    }

    /// Stored access token
    pub async fn access_token(&self) -> Result<Option<String>, AppError> {
        self.store.get(ACCESS_TOKEN_KEY).await
    }

    /// Stored refresh token
    pub async fn refresh_token(&self) -> Result<Option<String>, AppError> {
        self.store.get(REFRESH_TOKEN_KEY).await
    }

    /// Both tokens, when both are present
    pub async fn credentials(&self) -> Result<Option<CredentialPair>, AppError> {
        let access = self.access_token().await?;
        let refresh = self.refresh_token().await?;
        Ok(access.zip(refresh).map(|(a, r)| CredentialPair::new(a, r)))
    }

    /// Whether an access token is stored
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.access_token().await?.is_some())
    }

    /// Replaces the access token, leaving the refresh token alone
    pub async fn set_access_token(&self, token: &str) -> Result<(), AppError> {
        self.store.set(ACCESS_TOKEN_KEY, token).await
    }

    /// Stores a full credential pair, as issued at login
    pub async fn set_tokens(&self, pair: &CredentialPair) -> Result<(), AppError> {
        self.store.set(ACCESS_TOKEN_KEY, &pair.access_token).await?;
        self.store.set(REFRESH_TOKEN_KEY, &pair.refresh_token).await
    }

    /// Deletes both tokens
    pub async fn clear(&self) -> Result<(), AppError> {
        debug!("Clearing stored credentials");
        self.store.remove(ACCESS_TOKEN_KEY).await?;
        self.store.remove(REFRESH_TOKEN_KEY).await
    }

    /// Subscribes to auth events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    /// Publishes an event; having no subscriber is not an error
    pub(crate) fn emit(&self, event: AuthEvent) {
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &"CredentialStore")
            .field("subscribers", &self.events.receiver_count())
            .finish()
    }
}
