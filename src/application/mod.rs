/// Login and token refresh against the `/auth` API
pub mod auth;
/// Authenticated API client
pub mod client;
/// Application configuration module
pub mod config;
/// Credential session over a store
pub mod session;
