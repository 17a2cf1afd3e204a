/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client-side key-value storage for credentials
//!
//! The client never reaches for ambient global storage: a [`CredentialStore`]
//! is handed to it at construction. Two implementations are provided:
//! - [`MemoryStore`] keeps values for the lifetime of the process
//! - [`FileStore`] persists values as a JSON object on disk

/// Persistent JSON file store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AppError;
use async_trait::async_trait;

/// Key-value storage holding the credential pair
///
/// Implementations are shared between concurrent requests through an `Arc`,
/// so every method takes `&self`.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<(), AppError>;
}
