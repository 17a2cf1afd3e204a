/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # ATS Client Prelude
//!
//! Brings the commonly used types into scope:
//!
//! ```rust
//! use ats_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000/api/v1");
//! assert_eq!(config.refresh_url(), "http://localhost:8000/api/v1/auth/refresh");
//! ```

pub use crate::application::auth::Auth;
pub use crate::application::client::Client;
pub use crate::application::config::{AuthConfig, Config, RestApiConfig};
pub use crate::application::session::Session;
pub use crate::error::AppError;
pub use crate::model::auth::{
    AuthEvent, CredentialPair, LoginResponse, MessageResponse, RefreshRequest, RefreshResponse,
    User,
};
pub use crate::model::http::ApiRequest;
pub use crate::storage::{CredentialStore, FileStore, MemoryStore};
pub use crate::utils::logger::setup_logger;
pub use crate::{VERSION, version};
