/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # ATS Client
//!
//! Client for the ATS (Application Tracking System) REST API.
//!
//! The [`Client`](application::client::Client) attaches the stored access token
//! to every request as a bearer token. When the API answers `401 Unauthorized`
//! it exchanges the stored refresh token for a new access token and sends the
//! original request one more time. If the refresh itself fails, both stored
//! tokens are deleted and the caller receives
//! [`AppError::RefreshFailed`](error::AppError::RefreshFailed) carrying the
//! login route; the same signal is published as an
//! [`AuthEvent`](model::auth::AuthEvent) to subscribers.
//!
//! Credentials live in an explicit [`CredentialStore`](storage::CredentialStore)
//! passed at construction: [`MemoryStore`](storage::MemoryStore) or the
//! file-backed [`FileStore`](storage::FileStore).
//!
//! ## Configuration
//!
//! | Variable          | Default                        |
//! |-------------------|--------------------------------|
//! | `ATS_API_URL`     | `http://localhost:8000/api/v1` |
//! | `ATS_API_TIMEOUT` | `30`                           |
//! | `ATS_LOGIN_ROUTE` | `/auth`                        |
//! | `ATS_TOKEN_FILE`  | unset                          |
//! | `LOGLEVEL`        | `INFO`                         |
//!
//! ## Usage
//!
//! ```ignore
//! use ats_client::prelude::*;
//! use std::sync::Arc;
//!
//! setup_logger();
//! let client = Client::new(Config::new(), Arc::new(MemoryStore::new()))?;
//! client.auth().login("admin@ucube.ai", "admin").await?;
//!
//! match client.get::<serde_json::Value>("/candidates").await {
//!     Ok(candidates) => println!("{candidates}"),
//!     Err(e) if e.is_unauthenticated() => println!("go to {}", e.login_route().unwrap()),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

/// Login, refresh, session and the authenticated client
pub mod application;
/// Constants shared across the crate
pub mod constants;
/// Error type
pub mod error;
/// Wire models and HTTP dispatch
pub mod model;
/// Commonly used types
pub mod prelude;
/// Credential stores
pub mod storage;
/// Environment, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
